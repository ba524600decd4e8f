//! Runtime settings for the feed.

use thiserror::Error;

/// Page size used when a request does not ask for one.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Largest page size a request may ask for. Larger values are clamped.
pub const DEFAULT_MAX_PAGE_SIZE: usize = 100;

/// Errors found while validating [`FeedSettings`].
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Default page size must be at least 1")]
    ZeroPageSize,

    #[error("Maximum page size must be at least 1")]
    ZeroMaxPageSize,

    #[error("Default page size {default} exceeds maximum page size {max}")]
    DefaultExceedsMax { default: usize, max: usize },
}

impl From<SettingsError> for crate::Error {
    fn from(err: SettingsError) -> Self {
        crate::Error::Settings(err)
    }
}

/// Pagination limits applied by the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedSettings {
    default_page_size: usize,
    max_page_size: usize,
}

impl FeedSettings {
    /// Validate and build settings.
    pub fn new(default_page_size: usize, max_page_size: usize) -> Result<Self, SettingsError> {
        if default_page_size == 0 {
            return Err(SettingsError::ZeroPageSize);
        }
        if max_page_size == 0 {
            return Err(SettingsError::ZeroMaxPageSize);
        }
        if default_page_size > max_page_size {
            return Err(SettingsError::DefaultExceedsMax {
                default: default_page_size,
                max: max_page_size,
            });
        }
        Ok(Self {
            default_page_size,
            max_page_size,
        })
    }

    pub fn default_page_size(&self) -> usize {
        self.default_page_size
    }

    pub fn max_page_size(&self) -> usize {
        self.max_page_size
    }
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}
