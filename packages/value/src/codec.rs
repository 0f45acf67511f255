//! JSON text codec.

use std::io::{Read, Write};

use serde::Serialize;
use serde_json::ser::{CompactFormatter, PrettyFormatter};

use crate::convert::json_to_value;
use crate::{Error, Value};

/// How a tree is laid out when rendered as text.
///
/// Formatting is always chosen per call; there is no process-wide default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Style {
    /// Everything on one line, no insignificant whitespace.
    #[default]
    Compact,
    /// One member per line, indented with a tab per nesting level.
    Styled,
}

impl From<bool> for Style {
    fn from(styled: bool) -> Self {
        if styled {
            Style::Styled
        } else {
            Style::Compact
        }
    }
}

/// Codec for converting between Value and text.
pub trait Codec: Send + Sync {
    /// Parse text into a Value.
    fn decode(&self, text: &str) -> Result<Value, Error>;

    /// Render a Value as text.
    fn encode(&self, value: &Value, style: Style) -> Result<String, Error>;
}

/// A codec that handles JSON text.
///
/// # Example
///
/// ```rust
/// use recordtree_value::{Codec, JsonCodec, Style, Value};
///
/// let codec = JsonCodec;
/// let value = codec.decode(r#"{"a": [1, 2]}"#).unwrap();
///
/// assert_eq!(codec.encode(&value, Style::Compact).unwrap(), r#"{"a":[1,2]}"#);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl JsonCodec {
    /// Parse a JSON document from a reader.
    pub fn decode_reader<R: Read>(&self, reader: R) -> Result<Value, Error> {
        let json: serde_json::Value = serde_json::from_reader(reader).map_err(Error::parse)?;
        Ok(json_to_value(json))
    }

    /// Render a Value into a writer.
    pub fn encode_writer<W: Write>(&self, value: &Value, writer: W, style: Style) -> Result<(), Error> {
        match style {
            Style::Compact => {
                let mut ser = serde_json::Serializer::with_formatter(writer, CompactFormatter);
                value.serialize(&mut ser).map_err(Error::render)
            }
            Style::Styled => {
                let mut ser =
                    serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(b"\t"));
                value.serialize(&mut ser).map_err(Error::render)
            }
        }
    }
}

impl Codec for JsonCodec {
    fn decode(&self, text: &str) -> Result<Value, Error> {
        let json: serde_json::Value = serde_json::from_str(text).map_err(Error::parse)?;
        Ok(json_to_value(json))
    }

    fn encode(&self, value: &Value, style: Style) -> Result<String, Error> {
        let mut buf = Vec::new();
        self.encode_writer(value, &mut buf, style)?;
        String::from_utf8(buf).map_err(|e| Error::Render {
            message: e.to_string(),
        })
    }
}
