//! Path-qualified diagnostics.
//!
//! A diagnostic is built from the inside out: the function that detects a
//! mismatch creates it with a message, and every enclosing list, array or
//! record field prepends its own segment while the error propagates.

use std::fmt;

/// One step of a diagnostic path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A record field, rendered as `.name`.
    Field(String),
    /// A list or array element, rendered as `[i]`.
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Field(name) => write!(f, ".{}", name),
            Segment::Index(i) => write!(f, "[{}]", i),
        }
    }
}

/// Where a mapping failed and why.
///
/// Renders as `.obj.v[2] -> invalid value type.`; [`Diagnostic::error_info`]
/// adds the `$` root marker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    path: Vec<Segment>,
    message: String,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>) -> Self {
        Diagnostic {
            path: Vec::new(),
            message: message.into(),
        }
    }

    /// A scalar node has the wrong shape for the declared type.
    pub fn invalid_value_type() -> Self {
        Self::new("invalid value type.")
    }

    /// A scalar node could not be read as the declared type.
    pub fn invalid_value() -> Self {
        Self::new("invalid value.")
    }

    /// A float field holds NaN or an infinity, which JSON cannot carry.
    pub fn non_finite() -> Self {
        Self::new("invalid value, must be a finite number.")
    }

    /// A list field is not backed by an array node.
    pub fn must_be_array() -> Self {
        Self::new("invalid type, must be array.")
    }

    /// A fixed-size array field is not backed by an array node.
    pub fn must_be_fixed_array(size: usize) -> Self {
        Self::new(format!("invalid type, must be fixed size ({}) array.", size))
    }

    /// A fixed-size array field has the wrong number of elements.
    pub fn fixed_array_size(actual: usize, size: usize) -> Self {
        Self::new(format!("invalid fixed size array {} != {}.", actual, size))
    }

    /// A record is backed by something other than an object node.
    pub fn must_be_object() -> Self {
        Self::new("invalid type, must be object.")
    }

    /// Prefix the path with a record field.
    pub fn in_field(mut self, name: impl Into<String>) -> Self {
        self.path.insert(0, Segment::Field(name.into()));
        self
    }

    /// Prefix the path with an element index.
    pub fn at_index(mut self, index: usize) -> Self {
        self.path.insert(0, Segment::Index(index));
        self
    }

    pub fn path(&self) -> &[Segment] {
        &self.path
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The path alone, e.g. `.vecObj[1].v`.
    pub fn location(&self) -> String {
        self.path.iter().map(Segment::to_string).collect()
    }

    /// The full diagnostic rooted at `$`, e.g. `$.vecObj[1].v -> invalid value type.`
    pub fn error_info(&self) -> String {
        format!("${}", self)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.path {
            write!(f, "{}", segment)?;
        }
        write!(f, " -> {}", self.message)
    }
}
