//! Record engine for recordtree.
//!
//! This layer maps statically-typed records onto `Value` trees and back:
//! - `record!`: declares a record type with an ordered schema
//! - `Field`: per-type validation, decoding and encoding (scalars,
//!   `Nullable<T>`, `Vec<T>`, `[T; N]`, nested records)
//! - `Record`: whole-record validate/parse/create passes with first-failure
//!   reporting
//! - `Document`: the `load`/`write` surface with `last_error`/`error_info`
//!
//! # Example
//!
//! ```rust
//! use recordtree_record::{record, Document, Nullable};
//!
//! record! {
//!     #[derive(Debug, Clone, PartialEq)]
//!     pub struct Settings {
//!         pub bool_val: bool => "boolVal",
//!         pub uint_val: Nullable<u32> => "uintVal",
//!         pub vec: Vec<i32>,
//!     }
//! }
//!
//! let mut doc = Document::<Settings>::new();
//! assert!(!doc.load(r#"{"boolVal": true, "uintVal": "123", "vec": [1, 2, 3]}"#));
//! assert_eq!(doc.error_info(), "$.uintVal -> invalid value type.");
//!
//! assert!(doc.load(r#"{"boolVal": true, "uintVal": 123, "vec": [1, 2, 3]}"#));
//! assert!(doc.uint_val.holds(&123));
//! ```

mod diagnostic;
mod document;
mod engine;
mod error;
mod field;
mod macros;
mod nullable;
mod schema;

pub use diagnostic::{Diagnostic, Segment};
pub use document::{Document, RecordExt};
pub use engine::{FieldFailure, FieldReader, FieldWriter, Record};
pub use error::Error;
pub use field::Field;
pub use nullable::Nullable;
pub use schema::{FieldDescriptor, Shape};

// Re-export the tree layer for convenience
pub use recordtree_value::{Codec, JsonCodec, Path, Style, Value};
