//! Errors raised at the record boundary.

use crate::{Diagnostic, FieldFailure};

/// Why loading or writing a record failed.
///
/// The display text is the short message kept as a document's last error;
/// the path-qualified detail is available through [`Error::diagnostic`].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The input text is not a JSON document.
    #[error("Input text is not a valid json document: {0}")]
    Parse(#[source] recordtree_value::Error),

    /// The input tree does not match the schema.
    #[error("Input json object is not valid")]
    Invalid(FieldFailure),

    /// A validated tree could still not be decoded.
    #[error("Json object cannot be parsed")]
    Decode(FieldFailure),

    /// The record could not be encoded into a tree.
    #[error("Cannot create json object")]
    Create(FieldFailure),

    /// The freshly encoded tree does not match the schema.
    #[error("Created json object is not valid")]
    CreatedInvalid(FieldFailure),

    /// The tree could not be written out as text.
    #[error("Cannot render json object: {0}")]
    Render(#[source] recordtree_value::Error),
}

impl Error {
    /// The failing field, for the failures that have one.
    pub fn failure(&self) -> Option<&FieldFailure> {
        match self {
            Error::Invalid(f) | Error::Decode(f) | Error::Create(f) | Error::CreatedInvalid(f) => {
                Some(f)
            }
            Error::Parse(_) | Error::Render(_) => None,
        }
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        self.failure().map(|f| &f.diagnostic)
    }

    /// The `$`-rooted diagnostic text, when there is one.
    pub fn error_info(&self) -> Option<String> {
        self.diagnostic().map(Diagnostic::error_info)
    }
}
