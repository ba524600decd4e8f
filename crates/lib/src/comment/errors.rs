//! Error types for comment construction.

use thiserror::Error;

/// Errors raised while turning submitted form values into a [`super::Comment`].
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommentError {
    /// The submitted category is neither `positive` nor `negative`.
    #[error("Unknown category '{value}': expected 'positive' or 'negative'")]
    UnknownCategory {
        /// The raw value that was submitted
        value: String,
    },
}

impl CommentError {
    /// Check if this error was caused by an unrecognized category value
    pub fn is_unknown_category(&self) -> bool {
        matches!(self, CommentError::UnknownCategory { .. })
    }
}

impl From<CommentError> for crate::Error {
    fn from(err: CommentError) -> Self {
        crate::Error::Comment(err)
    }
}
