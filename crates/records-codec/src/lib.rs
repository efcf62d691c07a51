//! Row codec for the records tabular mapper.
//!
//! This crate converts between typed records and rows of text fields.
//!
//! # Modules
//!
//! - [`columns`] - header derivation and the column index map
//! - [`forward`] - field value → text coercion
//! - [`reverse`] - text → field value coercion
//! - [`marshal`] - collection-level encode/decode
//! - [`report`] - per-field failure accumulator
//!
//! # Example
//!
//! ```ignore
//! use records::{marshal, unmarshal, Entry};
//!
//! #[derive(Debug, Default, PartialEq, Entry)]
//! struct Person {
//!     age: i32,
//!     #[csv("name")]
//!     name: String,
//!     #[csv("isEmployee")]
//!     is_employee: bool,
//! }
//!
//! // Forward: entries → table
//! let table = marshal(&people).into_result()?;
//!
//! // Reverse: table → entries
//! let mut decoded: Vec<Person> = Vec::new();
//! unmarshal(&table, &mut decoded)?.into_result()?;
//! ```

pub mod columns;
pub mod forward;
pub mod marshal;
pub mod report;
pub mod reverse;

pub use columns::{header, ColumnIndex};
pub use forward::{encode_value, format_float};
pub use marshal::{
    decode_entry, encode_entry, marshal, marshal_dynamic, marshal_records, unmarshal,
    unmarshal_dynamic, unmarshal_records,
};
pub use report::{Conversion, Failure, Report};
pub use reverse::{decode_value, parse_bool};
