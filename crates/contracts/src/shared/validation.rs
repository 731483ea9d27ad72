use thiserror::Error;

/// A required-field or invalid-input failure raised by form drafts.
///
/// Rendered inline next to the form, never propagated through the HTTP
/// layer: a draft that fails validation is not submitted at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
