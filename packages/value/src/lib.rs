//! Tree document layer for recordtree.
//!
//! This layer is the dynamically-typed side of a record mapping:
//! - `Value`: a JSON-shaped tree with shape predicates and accessors
//! - `Path`: slash-separated navigation into a tree
//! - `JsonCodec`: JSON text parsing and rendering, honoring a `Style`
//!
//! The record engine only ever talks to the tree through this crate.
//!
//! # Example
//!
//! ```rust
//! use recordtree_value::{Codec, JsonCodec, Value, path};
//!
//! let value = JsonCodec.decode(r#"{"user": {"ids": [3, 4]}}"#).unwrap();
//! assert_eq!(value.get(&path!("user/ids/1")), Some(&Value::from(4)));
//! ```

mod codec;
mod convert;
mod error;
mod path;
mod value;

pub use codec::{Codec, JsonCodec, Style};
pub use convert::{json_to_value, value_to_json};
pub use error::Error;
pub use path::Path;
pub use value::Value;
