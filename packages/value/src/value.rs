//! The Value type - a JSON-shaped tree.
//!
//! This is the document side of a record mapping: a dynamically-typed tree
//! that records are validated against, decoded from and encoded into.

use std::collections::BTreeMap;

use crate::{Error, Path};

static NULL: Value = Value::Null;

/// A JSON-shaped value.
///
/// # Design Notes
///
/// - Uses `BTreeMap` for deterministic ordering (important for comparison)
/// - Integers are kept as `i64`; `Unsigned` only holds values above `i64::MAX`,
///   so every integer has exactly one representation
/// - Numeric predicates describe what a node can be read as, not how it is
///   stored: `Integer(7)` is `is_i32`, `is_u32`, `is_i64`, `is_u64` and `is_f64`
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// JSON `null`.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed 64-bit integer.
    Integer(i64),
    /// Unsigned integer above `i64::MAX`.
    Unsigned(u64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// Ordered sequence of values.
    Array(Vec<Value>),
    /// Key-value map with string keys.
    Map(BTreeMap<String, Value>),
}

const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
const U64_BOUND: f64 = 18_446_744_073_709_551_616.0;

fn is_integral(f: f64) -> bool {
    f.is_finite() && f.fract() == 0.0
}

impl Value {
    /// Create a null value.
    pub fn null() -> Self {
        Value::Null
    }

    /// Create an empty map.
    pub fn map() -> Self {
        Value::Map(BTreeMap::new())
    }

    /// Create an empty array.
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    /// A shared `null`, for lookups that need to hand out a reference.
    pub fn null_ref() -> &'static Value {
        &NULL
    }

    /// Human-readable name of this node's shape.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Unsigned(_) => "unsigned integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Map(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// True if the node is a number representable as `i32`.
    pub fn is_i32(&self) -> bool {
        self.as_i32().is_some()
    }

    /// True if the node is a number representable as `u32`.
    pub fn is_u32(&self) -> bool {
        self.as_u32().is_some()
    }

    /// True if the node is a number representable as `i64`.
    pub fn is_i64(&self) -> bool {
        self.as_i64().is_some()
    }

    /// True if the node is a number representable as `u64`.
    pub fn is_u64(&self) -> bool {
        self.as_u64().is_some()
    }

    /// True for every numeric node.
    pub fn is_f64(&self) -> bool {
        matches!(
            self,
            Value::Integer(_) | Value::Unsigned(_) | Value::Float(_)
        )
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Check if this value is a map (JSON object).
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Integer(i) => i32::try_from(*i).ok(),
            Value::Unsigned(u) => i32::try_from(*u).ok(),
            Value::Float(f)
                if is_integral(*f) && *f >= i32::MIN as f64 && *f <= i32::MAX as f64 =>
            {
                Some(*f as i32)
            }
            _ => None,
        }
    }

    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Value::Integer(i) => u32::try_from(*i).ok(),
            Value::Unsigned(u) => u32::try_from(*u).ok(),
            Value::Float(f) if is_integral(*f) && *f >= 0.0 && *f <= u32::MAX as f64 => {
                Some(*f as u32)
            }
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            Value::Unsigned(u) => i64::try_from(*u).ok(),
            Value::Float(f) if is_integral(*f) && *f >= -I64_BOUND && *f < I64_BOUND => {
                Some(*f as i64)
            }
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Integer(i) => u64::try_from(*i).ok(),
            Value::Unsigned(u) => Some(*u),
            Value::Float(f) if is_integral(*f) && *f >= 0.0 && *f < U64_BOUND => {
                Some(*f as u64)
            }
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Unsigned(u) => Some(*u as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Elements of an array node.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Number of children of an array or map; zero for every other shape.
    pub fn len(&self) -> usize {
        match self {
            Value::Array(arr) => arr.len(),
            Value::Map(map) => map.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Array element at `index`.
    pub fn index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(arr) => arr.get(index),
            _ => None,
        }
    }

    /// Append to an array. A null node becomes an empty array first.
    pub fn push(&mut self, value: Value) -> Result<(), Error> {
        if self.is_null() {
            *self = Value::array();
        }
        match self {
            Value::Array(arr) => {
                arr.push(value);
                Ok(())
            }
            other => Err(Error::NotContainer {
                key: "[]".to_string(),
                found: other.type_name(),
            }),
        }
    }

    /// Map child named `name`.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Map(map) => map.get(name),
            _ => None,
        }
    }

    /// Map child named `name`, reading a missing key (or a non-map node) as null.
    pub fn field_or_null(&self, name: &str) -> &Value {
        self.field(name).unwrap_or(&NULL)
    }

    /// Assign a map child. A null node becomes an empty map first.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Result<Option<Value>, Error> {
        if self.is_null() {
            *self = Value::map();
        }
        match self {
            Value::Map(map) => Ok(map.insert(name.into(), value)),
            other => Err(Error::NotContainer {
                key: name.into(),
                found: other.type_name(),
            }),
        }
    }

    /// Get a reference to a nested value by path.
    ///
    /// Returns `None` if the path doesn't exist or can't be navigated
    /// (e.g., trying to index into a string).
    pub fn get(&self, path: &Path) -> Option<&Value> {
        let mut current = self;
        for component in path.iter() {
            current = match current {
                Value::Map(map) => map.get(component)?,
                Value::Array(arr) => {
                    let index: usize = component.parse().ok()?;
                    arr.get(index)?
                }
                _ => return None,
            };
        }
        Some(current)
    }

    /// Get a mutable reference to a nested value by path.
    pub fn get_mut(&mut self, path: &Path) -> Option<&mut Value> {
        let mut current = self;
        for component in path.iter() {
            current = match current {
                Value::Map(map) => map.get_mut(component)?,
                Value::Array(arr) => {
                    let index: usize = component.parse().ok()?;
                    arr.get_mut(index)?
                }
                _ => return None,
            };
        }
        Some(current)
    }

    /// Set a value at a path, creating intermediate maps as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the path traverses through a scalar, or addresses
    /// an array slot past the end.
    pub fn set(&mut self, path: &Path, value: Value) -> Result<(), Error> {
        let Some((last, parents)) = path.components.split_last() else {
            *self = value;
            return Ok(());
        };

        let mut current = self;
        for component in parents {
            if current.is_null() {
                *current = Value::map();
            }
            current = match current {
                Value::Map(map) => map.entry(component.clone()).or_insert_with(Value::map),
                Value::Array(arr) => {
                    let index = parse_index(component)?;
                    arr.get_mut(index).ok_or_else(|| Error::InvalidPath {
                        message: format!("array index {} out of bounds", index),
                    })?
                }
                other => {
                    return Err(Error::InvalidPath {
                        message: format!(
                            "cannot navigate through {} at '{}'",
                            other.type_name(),
                            component
                        ),
                    });
                }
            };
        }

        match current {
            Value::Array(arr) => {
                let index = parse_index(last)?;
                if index < arr.len() {
                    arr[index] = value;
                } else if index == arr.len() {
                    arr.push(value);
                } else {
                    return Err(Error::InvalidPath {
                        message: format!("array index {} out of bounds", index),
                    });
                }
                Ok(())
            }
            other => other.insert(last.clone(), value).map(|_| ()),
        }
    }

    /// Remove a value at a path, returning it if it existed.
    pub fn remove(&mut self, path: &Path) -> Result<Option<Value>, Error> {
        let Some(parent_path) = path.parent() else {
            return Ok(Some(std::mem::take(self)));
        };
        let Some(last) = path.last() else {
            return Ok(None);
        };

        match self.get_mut(&parent_path) {
            Some(Value::Map(map)) => Ok(map.remove(last)),
            Some(Value::Array(arr)) => {
                let index = parse_index(last)?;
                if index < arr.len() {
                    Ok(Some(arr.remove(index)))
                } else {
                    Ok(None)
                }
            }
            _ => Ok(None),
        }
    }
}

fn parse_index(component: &str) -> Result<usize, Error> {
    component.parse().map_err(|_| Error::InvalidPath {
        message: format!("invalid array index: {}", component),
    })
}

// Conversion from common types

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        match i64::try_from(v) {
            Ok(i) => Value::Integer(i),
            Err(_) => Value::Unsigned(v),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}
