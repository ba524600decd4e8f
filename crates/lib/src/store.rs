//! In-memory comment storage.
//!
//! The store lives for as long as the process does. Nothing is persisted and
//! records are never removed, so the length only grows.

use std::{collections::VecDeque, sync::Arc};

use tokio::sync::RwLock;

use crate::comment::Comment;

/// A contiguous run of comments together with the store length observed
/// under the same read guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreWindow {
    pub items: Vec<Comment>,
    pub total: usize,
}

/// Newest-first comment store shared between request handlers.
///
/// Cloning the store is cheap and yields another handle to the same sequence.
/// Every read and write goes through one `RwLock`, so a feed read never sees a
/// half-applied prepend.
#[derive(Clone, Default)]
pub struct CommentStore {
    comments: Arc<RwLock<VecDeque<Comment>>>,
}

impl CommentStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a comment at the front of the store.
    ///
    /// Every existing record shifts back by one position.
    pub async fn prepend(&self, comment: Comment) {
        let mut comments = self.comments.write().await;
        comments.push_front(comment);
        tracing::debug!(len = comments.len(), "Comment stored");
    }

    /// Records in `[start, end)`, clipped to the current bounds.
    ///
    /// Out-of-range or inverted bounds yield an empty vector.
    pub async fn slice(&self, start: usize, end: usize) -> Vec<Comment> {
        let comments = self.comments.read().await;
        clipped(&comments, start, end)
    }

    /// Same as [`CommentStore::slice`], plus the store length at read time.
    pub async fn window(&self, start: usize, end: usize) -> StoreWindow {
        let comments = self.comments.read().await;
        StoreWindow {
            items: clipped(&comments, start, end),
            total: comments.len(),
        }
    }

    pub async fn len(&self) -> usize {
        self.comments.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.comments.read().await.is_empty()
    }
}

fn clipped(comments: &VecDeque<Comment>, start: usize, end: usize) -> Vec<Comment> {
    let end = end.min(comments.len());
    if start >= end {
        return Vec::new();
    }
    comments.range(start..end).cloned().collect()
}
