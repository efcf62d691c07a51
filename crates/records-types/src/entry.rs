//! Record traits and the dynamic record.

use crate::descriptor::EntryDescriptor;
use crate::error::ValueError;
use crate::value::FieldValue;

/// Positional access to an entry's fields.
///
/// Positions are declaration positions in the entry's [`EntryDescriptor`],
/// unannotated fields included. Implementations usually come from
/// `#[derive(Entry)]`, but a hand-written impl works the same way.
pub trait Record {
    /// Current value of the field at `index`.
    ///
    /// Fields without a text coercion (and positions past the end) yield
    /// [`FieldValue::Unsupported`].
    fn field_value(&self, index: usize) -> FieldValue;

    /// Assign the field at `index`.
    fn set_field_value(&mut self, index: usize, value: FieldValue) -> Result<(), ValueError>;
}

/// A record type with a static descriptor.
///
/// `Default` is the zero-valued entry the decoder starts every row from.
pub trait Entry: Record + Default {
    /// Field metadata of this type, in declaration order.
    fn descriptor() -> &'static EntryDescriptor;
}

/// Record whose shape is only known at runtime.
///
/// Holds one value per field of the descriptor it was built for. Assignments
/// must keep the variant of the value already in the slot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DynamicRecord {
    values: Vec<FieldValue>,
}

impl DynamicRecord {
    /// A record holding the zero value of every field in `descriptor`.
    pub fn zeroed(descriptor: &EntryDescriptor) -> Self {
        Self {
            values: descriptor
                .fields
                .iter()
                .map(|field| field.kind.zero_value())
                .collect(),
        }
    }

    /// A record from explicit values, one per descriptor field.
    pub fn from_values(values: Vec<FieldValue>) -> Self {
        Self { values }
    }

    /// Number of values held.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the record holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at a declaration position.
    pub fn get(&self, index: usize) -> Option<&FieldValue> {
        self.values.get(index)
    }

    /// All values in declaration order.
    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }

    /// Consume the record, returning its values.
    pub fn into_values(self) -> Vec<FieldValue> {
        self.values
    }
}

impl Record for DynamicRecord {
    fn field_value(&self, index: usize) -> FieldValue {
        self.values
            .get(index)
            .cloned()
            .unwrap_or(FieldValue::Unsupported)
    }

    fn set_field_value(&mut self, index: usize, value: FieldValue) -> Result<(), ValueError> {
        let slot = self
            .values
            .get_mut(index)
            .ok_or(ValueError::NoSuchField(index))?;

        if matches!(slot, FieldValue::Unsupported)
            || std::mem::discriminant(slot) != std::mem::discriminant(&value)
        {
            return Err(ValueError::KindMismatch {
                expected: slot.kind_name(),
                found: value.kind_name(),
            });
        }

        *slot = value;
        Ok(())
    }
}
