//! Header derivation and column lookup.

use records_types::{EntryDescriptor, Row};
use std::collections::HashMap;

/// Column names of the annotated fields of `descriptor`, in declaration order.
///
/// Unannotated fields contribute nothing, not even a placeholder.
pub fn header(descriptor: &EntryDescriptor) -> Row {
    descriptor.columns().map(str::to_string).collect()
}

/// Column name → position lookup built from a table's header row.
///
/// When a name occurs more than once the last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnIndex {
    positions: HashMap<String, usize>,
}

impl ColumnIndex {
    /// Build the lookup by scanning `header` left to right.
    pub fn from_header<S: AsRef<str>>(header: &[S]) -> Self {
        let mut positions = HashMap::with_capacity(header.len());
        for (position, name) in header.iter().enumerate() {
            positions.insert(name.as_ref().to_string(), position);
        }
        Self { positions }
    }

    /// Position of `column` in the header, if present.
    pub fn position(&self, column: &str) -> Option<usize> {
        self.positions.get(column).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use records_types::{FieldDescriptor, FieldKind, IntWidth};

    fn person() -> EntryDescriptor {
        EntryDescriptor::new(
            "person",
            vec![
                FieldDescriptor::new("Age", FieldKind::Int(IntWidth::W64)),
                FieldDescriptor::new("Name", FieldKind::Text).with_column("name"),
                FieldDescriptor::new("Hobby", FieldKind::Text).with_column("hobby"),
                FieldDescriptor::new("Address", FieldKind::Text).with_column("address"),
                FieldDescriptor::new("IsNigerian", FieldKind::Bool).with_column("isNigerian"),
            ],
        )
    }

    #[test]
    fn test_header_in_declaration_order() {
        assert_eq!(
            header(&person()),
            vec!["name", "hobby", "address", "isNigerian"]
        );
    }

    #[test]
    fn test_header_empty_when_nothing_annotated() {
        let descriptor = EntryDescriptor::new(
            "bare",
            vec![FieldDescriptor::new("x", FieldKind::Bool)],
        );
        assert!(header(&descriptor).is_empty());
    }

    #[test]
    fn test_header_keeps_unsupported_columns() {
        let descriptor = EntryDescriptor::new(
            "nested",
            vec![
                FieldDescriptor::new("inner", FieldKind::Unsupported).with_column("inner"),
                FieldDescriptor::new("id", FieldKind::Uint(IntWidth::W32)).with_column("id"),
            ],
        );
        assert_eq!(header(&descriptor), vec!["inner", "id"]);
    }

    #[test]
    fn test_column_index_positions() {
        let index = ColumnIndex::from_header(&["age", "name", "isEmployee"]);
        assert_eq!(index.position("age"), Some(0));
        assert_eq!(index.position("isEmployee"), Some(2));
        assert_eq!(index.position("missing"), None);
    }

    #[test]
    fn test_column_index_last_duplicate_wins() {
        let index = ColumnIndex::from_header(&["a", "b", "a"]);
        assert_eq!(index.position("a"), Some(2));
        assert_eq!(index.position("b"), Some(1));
    }

    #[test]
    fn test_column_index_empty_header() {
        let header: Vec<String> = Vec::new();
        let index = ColumnIndex::from_header(&header);
        assert_eq!(index, ColumnIndex::default());
        assert_eq!(index.position("a"), None);
    }
}
