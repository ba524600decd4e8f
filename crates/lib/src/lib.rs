//!
//! VoxPop: a small public feed of short comments tagged `positive` or `negative`.
//!
//! ## Core Concepts
//!
//! * **Comments (`comment::Comment`)**: an immutable text + [`comment::Category`] pair.
//!   Comments have no id and no timestamp; their position in the store is their order.
//! * **Store (`store::CommentStore`)**: the newest-first, in-memory sequence of comments.
//!   It lives for the lifetime of the process and is never persisted.
//! * **Feed (`feed`)**: pagination over the store. Pages are numbered from 1.
//! * **Web (`web`)**: the axum router serving the landing page, the submission form,
//!   the feed and a health check.

pub mod comment;
pub mod feed;
pub mod settings;
pub mod store;
pub mod web;

pub use comment::{Category, Comment};
pub use settings::FeedSettings;
pub use store::CommentStore;

/// Result type used throughout the VoxPop library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the VoxPop library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Structured comment errors from the comment module
    #[error(transparent)]
    Comment(comment::CommentError),

    /// Structured feed errors from the feed module
    #[error(transparent)]
    Feed(feed::FeedError),

    /// Structured settings errors from the settings module
    #[error(transparent)]
    Settings(settings::SettingsError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Comment(_) => "comment",
            Error::Feed(_) => "feed",
            Error::Settings(_) => "settings",
            Error::Io(_) => "io",
        }
    }

    /// Check if this error was caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Comment(_) | Error::Feed(_))
    }

    /// Check if this error is a rejected page number.
    pub fn is_invalid_page(&self) -> bool {
        match self {
            Error::Feed(feed_err) => feed_err.is_invalid_page(),
            _ => false,
        }
    }

    /// Check if this error is a rejected category.
    pub fn is_unknown_category(&self) -> bool {
        match self {
            Error::Comment(comment_err) => comment_err.is_unknown_category(),
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}
