//! Entry type descriptors.
//!
//! An [`EntryDescriptor`] is the static metadata of one record shape: its
//! fields in declaration order, each with a declared name, an optional column
//! annotation, a kind and a writability flag. Descriptors come either from
//! `#[derive(Entry)]` or from a YAML schema:
//!
//! ```yaml
//! name: Person
//! fields:
//!   - name: age
//!     kind: i32
//!   - name: name
//!     column: name
//!     kind: string
//!   - name: is_employee
//!     column: isEmployee
//!     kind: bool
//!     writable: false
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::SchemaError;
use crate::kind::FieldKind;

/// Metadata of one struct field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Declared field name (diagnostics only)
    pub name: String,

    /// Column annotation; `None` excludes the field from the tabular form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,

    /// Coercion-relevant kind
    pub kind: FieldKind,

    /// Whether decode may assign this field
    #[serde(default = "default_writable")]
    pub writable: bool,
}

fn default_writable() -> bool {
    true
}

impl FieldDescriptor {
    /// Create an unannotated, writable field.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            column: None,
            kind,
            writable: true,
        }
    }

    /// Annotate the field with a column name.
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Mark the field as not assignable by decode.
    pub fn readonly(mut self) -> Self {
        self.writable = false;
        self
    }

    /// Whether the field takes part in the tabular form.
    pub fn is_included(&self) -> bool {
        self.column.is_some()
    }
}

/// Ordered field metadata of one record shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EntryDescriptor {
    /// Name of the entry type (diagnostics only)
    #[serde(default)]
    pub name: String,

    /// Fields in declaration order
    pub fields: Vec<FieldDescriptor>,
}

impl EntryDescriptor {
    /// Create a descriptor from fields in declaration order.
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Load a descriptor from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a descriptor from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let descriptor: EntryDescriptor = serde_yaml::from_str(yaml)?;
        descriptor.validate()?;
        Ok(descriptor)
    }

    fn validate(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::with_capacity(self.fields.len());
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField(field.name.clone()));
            }
        }
        Ok(())
    }

    /// Number of fields, annotated or not.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the entry type has no fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field at a declaration position.
    pub fn field(&self, index: usize) -> Option<&FieldDescriptor> {
        self.fields.get(index)
    }

    /// Annotated fields with their declaration positions.
    pub fn included(&self) -> impl Iterator<Item = (usize, &FieldDescriptor)> + '_ {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, field)| field.is_included())
    }

    /// Column names of annotated fields, in declaration order.
    pub fn columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().filter_map(|field| field.column.as_deref())
    }
}
