//! The load/write surface of a record.

use std::io::{Read, Write};
use std::ops::{Deref, DerefMut};

use recordtree_value::{Codec, JsonCodec, Style, Value};
use tracing::{debug, trace};

use crate::{Error, Record};

/// Result-based conversions between a record and JSON.
///
/// This trait is automatically implemented for all `Record` types. Every
/// conversion validates before decoding and validates the tree it creates
/// before rendering it.
pub trait RecordExt: Record {
    /// Validate `node` against the schema, then decode it.
    fn from_value(node: &Value) -> Result<Self, Error> {
        Self::validate_record(node).map_err(Error::Invalid)?;
        Self::decode_record(node).map_err(Error::Decode)
    }

    /// Parse JSON text into a record.
    fn from_json(text: &str) -> Result<Self, Error> {
        let node = JsonCodec.decode(text).map_err(Error::Parse)?;
        Self::from_value(&node)
    }

    /// Parse a JSON document read from `reader`.
    fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let node = JsonCodec.decode_reader(reader).map_err(Error::Parse)?;
        Self::from_value(&node)
    }

    /// Build the tree for this record and check it against the schema.
    fn to_value(&self) -> Result<Value, Error> {
        let node = self.create_record().map_err(Error::Create)?;
        Self::validate_record(&node).map_err(Error::CreatedInvalid)?;
        Ok(node)
    }

    /// Render this record as JSON text.
    fn to_json(&self, style: Style) -> Result<String, Error> {
        let node = self.to_value()?;
        JsonCodec.encode(&node, style).map_err(Error::Render)
    }

    /// Render this record as JSON into `writer`.
    fn to_writer<W: Write>(&self, writer: W, style: Style) -> Result<(), Error> {
        let node = self.to_value()?;
        JsonCodec
            .encode_writer(&node, writer, style)
            .map_err(Error::Render)
    }
}

// Blanket implementation for all Records
impl<R: Record> RecordExt for R {}

/// A record together with the outcome of its last load or write.
///
/// `load` and `write` report success as a `bool`; the reason for a failure
/// stays on the document as [`last_error`](Document::last_error) (a short
/// message) and [`error_info`](Document::error_info) (the path-qualified
/// diagnostic, e.g. `$.uintVal -> invalid value type.`). Both are reset at
/// the start of every load or write.
///
/// The record itself is reachable through `data`/`data_mut` or by deref.
#[derive(Debug, Default, Clone)]
pub struct Document<R: Record> {
    data: R,
    last_error: String,
    error_info: String,
}

impl<R: Record> Document<R> {
    /// A document holding a default record.
    pub fn new() -> Self {
        Document::from_data(R::default())
    }

    pub fn from_data(data: R) -> Self {
        Document {
            data,
            last_error: String::new(),
            error_info: String::new(),
        }
    }

    pub fn data(&self) -> &R {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut R {
        &mut self.data
    }

    pub fn into_inner(self) -> R {
        self.data
    }

    /// Message of the most recent failed load or write; empty after a success.
    pub fn last_error(&self) -> &str {
        &self.last_error
    }

    /// `$`-rooted diagnostic of the most recent failed load or write.
    ///
    /// Empty after a success, and after failures that happen before the
    /// schema is consulted (malformed text, rendering errors).
    pub fn error_info(&self) -> &str {
        &self.error_info
    }

    /// Parse `text`, validate it and decode it into this document.
    ///
    /// On failure the current record is left untouched.
    pub fn load(&mut self, text: &str) -> bool {
        let result = R::from_json(text);
        self.finish_load(result)
    }

    /// Like [`load`](Document::load), reading the text from `reader`.
    pub fn load_reader<Rd: Read>(&mut self, reader: Rd) -> bool {
        let result = R::from_reader(reader);
        self.finish_load(result)
    }

    /// Validate and decode an already parsed tree.
    pub fn load_value(&mut self, node: &Value) -> bool {
        let result = R::from_value(node);
        self.finish_load(result)
    }

    fn finish_load(&mut self, result: Result<R, Error>) -> bool {
        self.reset();
        match result {
            Ok(data) => {
                trace!(record = R::NAME, "loaded record");
                self.data = data;
                true
            }
            Err(e) => {
                self.fail("load", &e);
                false
            }
        }
    }

    /// Encode, validate and render this document.
    ///
    /// Returns the text (empty on failure) and whether the write succeeded.
    pub fn write(&mut self, style: impl Into<Style>) -> (String, bool) {
        let result = self.data.to_json(style.into());
        self.reset();
        match result {
            Ok(text) => {
                trace!(record = R::NAME, bytes = text.len(), "wrote record");
                (text, true)
            }
            Err(e) => {
                self.fail("write", &e);
                (String::new(), false)
            }
        }
    }

    /// Like [`write`](Document::write), rendering into `writer`.
    pub fn write_to<W: Write>(&mut self, writer: W, style: impl Into<Style>) -> bool {
        let result = self.data.to_writer(writer, style.into());
        self.reset();
        match result {
            Ok(()) => true,
            Err(e) => {
                self.fail("write", &e);
                false
            }
        }
    }

    /// The rendered text, or an empty string if writing fails.
    pub fn json_string(&mut self, style: impl Into<Style>) -> String {
        self.write(style).0
    }

    /// The tree for this record, or `null` if it cannot be created.
    pub fn value(&self) -> Value {
        self.data.create_record().unwrap_or_default()
    }

    fn reset(&mut self) {
        self.last_error.clear();
        self.error_info.clear();
    }

    fn fail(&mut self, operation: &'static str, error: &Error) {
        self.last_error = error.to_string();
        self.error_info = error.error_info().unwrap_or_default();
        debug!(
            record = R::NAME,
            operation,
            error = %self.last_error,
            info = %self.error_info,
            "record {} failed",
            operation
        );
    }
}

impl<R: Record> From<R> for Document<R> {
    fn from(data: R) -> Self {
        Document::from_data(data)
    }
}

impl<R: Record> Deref for Document<R> {
    type Target = R;

    fn deref(&self) -> &R {
        &self.data
    }
}

impl<R: Record> DerefMut for Document<R> {
    fn deref_mut(&mut self) -> &mut R {
        &mut self.data
    }
}
