//! Error types for the tree document layer.

/// Errors raised while parsing, rendering or navigating a [`Value`](crate::Value).
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Input text is not a well-formed JSON document.
    #[error("parse error at line {line}, column {column}: {message}")]
    Parse {
        message: String,
        line: usize,
        column: usize,
    },

    /// A tree could not be written out as text.
    #[error("render error: {message}")]
    Render { message: String },

    /// Reading from or writing to a stream failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A path could not be followed through the tree.
    #[error("invalid path: {message}")]
    InvalidPath { message: String },

    /// A child was assigned on a node that cannot hold children.
    #[error("cannot set child '{key}' on {found} value")]
    NotContainer { key: String, found: &'static str },
}

impl Error {
    pub(crate) fn parse(e: serde_json::Error) -> Self {
        if e.is_io() {
            return Error::Io(e.into());
        }
        Error::Parse {
            message: e.to_string(),
            line: e.line(),
            column: e.column(),
        }
    }

    pub(crate) fn render(e: serde_json::Error) -> Self {
        if e.is_io() {
            return Error::Io(e.into());
        }
        Error::Render {
            message: e.to_string(),
        }
    }
}
