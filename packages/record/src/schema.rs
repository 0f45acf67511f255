//! Schema descriptors: the declared shape of every record field.

use std::fmt;

/// The declared type of a field, as seen by the mapping engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Shape {
    Bool,
    I32,
    U32,
    I64,
    U64,
    F64,
    String,
    /// `Nullable<T>`: the inner shape, or `null`.
    Optional(Box<Shape>),
    /// `Vec<T>`: an array of any length.
    List(Box<Shape>),
    /// `[T; N]`: an array of exactly `N` elements.
    Array(Box<Shape>, usize),
    /// A nested record, by type name.
    Record(&'static str),
}

impl Shape {
    /// True for the seven scalar shapes.
    pub fn is_scalar(&self) -> bool {
        !matches!(
            self,
            Shape::Optional(_) | Shape::List(_) | Shape::Array(..) | Shape::Record(_)
        )
    }

    /// True if a `null` node satisfies this shape.
    pub fn accepts_null(&self) -> bool {
        matches!(self, Shape::Optional(_))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Bool => write!(f, "bool"),
            Shape::I32 => write!(f, "i32"),
            Shape::U32 => write!(f, "u32"),
            Shape::I64 => write!(f, "i64"),
            Shape::U64 => write!(f, "u64"),
            Shape::F64 => write!(f, "f64"),
            Shape::String => write!(f, "string"),
            Shape::Optional(inner) => write!(f, "optional<{}>", inner),
            Shape::List(inner) => write!(f, "list<{}>", inner),
            Shape::Array(inner, size) => write!(f, "array<{}, {}>", inner, size),
            Shape::Record(name) => write!(f, "{}", name),
        }
    }
}

/// One schema entry: the tree key a field binds to and its declared shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub shape: Shape,
}

impl FieldDescriptor {
    pub fn new(name: &'static str, shape: Shape) -> Self {
        FieldDescriptor { name, shape }
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.shape)
    }
}
