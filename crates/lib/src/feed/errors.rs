//! Error types for feed requests.

use thiserror::Error;

/// Errors that reject a feed request before any data is read.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedError {
    /// Page numbers start at 1.
    #[error("Invalid page {page}: page must be greater than 0")]
    InvalidPage { page: i64 },

    /// The query string could not be decoded into page parameters.
    #[error("Malformed feed query: {reason}")]
    MalformedQuery { reason: String },
}

impl FeedError {
    pub fn is_invalid_page(&self) -> bool {
        matches!(self, FeedError::InvalidPage { .. })
    }
}

impl From<FeedError> for crate::Error {
    fn from(err: FeedError) -> Self {
        crate::Error::Feed(err)
    }
}
