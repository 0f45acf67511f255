//! Whole-record validation, parsing and creation.
//!
//! A record walks its schema in declared order, binding each field to the
//! object child of the same name. Every pass stops at the first failing
//! field; later siblings are not looked at.

use std::collections::BTreeMap;
use std::fmt;

use recordtree_value::Value;

use crate::{Diagnostic, Field, FieldDescriptor};

/// The first field of a record that failed a pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldFailure {
    /// Schema index of the failing field; `None` when the record node itself
    /// has the wrong shape.
    pub index: Option<usize>,
    /// Diagnostic whose path starts at the record root.
    pub diagnostic: Diagnostic,
}

impl FieldFailure {
    pub fn field(index: usize, diagnostic: Diagnostic) -> Self {
        FieldFailure {
            index: Some(index),
            diagnostic,
        }
    }

    pub fn root(diagnostic: Diagnostic) -> Self {
        FieldFailure {
            index: None,
            diagnostic,
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        self.diagnostic
    }

    /// The `$`-rooted diagnostic text.
    pub fn error_info(&self) -> String {
        self.diagnostic.error_info()
    }
}

impl fmt::Display for FieldFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diagnostic.error_info())
    }
}

/// A type with a fixed, ordered schema that maps onto an object node.
///
/// Implemented by [`record!`](crate::record); the generated code drives a
/// [`FieldReader`] or [`FieldWriter`] over the fields in declared order.
pub trait Record: Field + Default {
    /// The record type's name.
    const NAME: &'static str;

    /// Tree keys of the fields, in schema order.
    const FIELD_NAMES: &'static [&'static str];

    /// Ordered field descriptors.
    fn schema() -> Vec<FieldDescriptor>;

    /// Check every field of `node` against the schema.
    fn validate_record(node: &Value) -> Result<(), FieldFailure>;

    /// Decode every field of `node` without a prior validation pass.
    fn decode_record(node: &Value) -> Result<Self, FieldFailure>;

    /// Build a new object node from this record.
    fn create_record(&self) -> Result<Value, FieldFailure>;

    /// Validate `node`, then decode it.
    fn parse_record(node: &Value) -> Result<Self, FieldFailure> {
        Self::validate_record(node)?;
        Self::decode_record(node)
    }

    /// Schema index of the field bound to `name`.
    fn field_index(name: &str) -> Option<usize> {
        Self::FIELD_NAMES.iter().position(|n| *n == name)
    }
}

/// Cursor over the fields of an object node, one schema entry at a time.
pub struct FieldReader<'a> {
    node: &'a Value,
    next: usize,
}

impl<'a> FieldReader<'a> {
    /// Start reading `node`.
    ///
    /// A `null` node reads as an object without keys. Any other non-object
    /// node is rejected.
    pub fn new(node: &'a Value) -> Result<Self, FieldFailure> {
        if !(node.is_map() || node.is_null()) {
            return Err(FieldFailure::root(Diagnostic::must_be_object()));
        }
        Ok(FieldReader { node, next: 0 })
    }

    fn child(&mut self, name: &str) -> (usize, &'a Value) {
        let index = self.next;
        self.next += 1;
        (index, self.node.field_or_null(name))
    }

    /// Validate the next field, bound to the child `name`.
    pub fn validate<T: Field>(&mut self, name: &str) -> Result<(), FieldFailure> {
        let (index, child) = self.child(name);
        T::validate(child).map_err(|d| FieldFailure::field(index, d.in_field(name)))
    }

    /// Decode the next field, bound to the child `name`.
    pub fn decode<T: Field>(&mut self, name: &str) -> Result<T, FieldFailure> {
        let (index, child) = self.child(name);
        T::decode(child).map_err(|d| FieldFailure::field(index, d.in_field(name)))
    }
}

/// Builder for a new object node, one schema entry at a time.
#[derive(Default)]
pub struct FieldWriter {
    fields: BTreeMap<String, Value>,
    next: usize,
}

impl FieldWriter {
    pub fn new() -> Self {
        FieldWriter::default()
    }

    /// Encode the next field into the child `name`.
    pub fn encode<T: Field>(&mut self, name: &str, value: &T) -> Result<(), FieldFailure> {
        let index = self.next;
        self.next += 1;
        let node = value
            .encode()
            .map_err(|d| FieldFailure::field(index, d.in_field(name)))?;
        self.fields.insert(name.to_string(), node);
        Ok(())
    }

    pub fn finish(self) -> Value {
        Value::Map(self.fields)
    }
}
