//! recordtree: typed records mapped onto JSON trees.
//!
//! A record declares an ordered list of named, typed fields. recordtree checks
//! a JSON tree against that schema, decodes it into the record, and encodes
//! records back into trees and text. Every failure is reported with the path
//! of the offending node, such as `$.vecObj[1].v -> invalid value type.`
//!
//! The workspace is layered:
//! - [`value`]: the tree document and its JSON text codec
//! - [`record`]: the schema-driven mapping engine
//!
//! The most common items are re-exported at the top level.

pub use recordtree_record as record;
pub use recordtree_value as value;

pub use recordtree_record::{
    record, Diagnostic, Document, Error, Field, FieldDescriptor, FieldFailure, Nullable, Record,
    RecordExt, Shape,
};
pub use recordtree_value::{Codec, JsonCodec, Path, Style, Value};
