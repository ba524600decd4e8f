//! Comment records and their sentiment category.
//!
//! A [`Comment`] is immutable once created. It carries no identifier and no
//! timestamp: its place in the feed is decided entirely by its position in the
//! [`crate::store::CommentStore`].

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

mod errors;

pub use errors::CommentError;

/// Sentiment attached to a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Positive,
    Negative,
}

impl Category {
    /// All categories, in the order the submission form offers them.
    pub const ALL: [Category; 2] = [Category::Positive, Category::Negative];

    /// The wire spelling used in forms and rendered HTML.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Positive => "positive",
            Category::Negative => "negative",
        }
    }

    /// Human-readable label for the submission form.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Positive => "Positive",
            Category::Negative => "Negative",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CommentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CommentError::UnknownCategory {
                value: s.to_string(),
            })
    }
}

/// A single submitted comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    text: String,
    category: Category,
}

impl Comment {
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    /// Build a comment from raw form values, rejecting unknown categories.
    ///
    /// The text is kept verbatim.
    pub fn parse(text: impl Into<String>, category: &str) -> Result<Self, CommentError> {
        Ok(Self::new(text, category.parse()?))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> Category {
        self.category
    }
}
