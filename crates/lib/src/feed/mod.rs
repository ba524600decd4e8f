//! Feed pagination.
//!
//! Pages are numbered from 1 and hold up to `page_size` comments, newest
//! first. A request is validated into a [`PageRequest`] and then resolved
//! against a [`StoreWindow`] into a [`FeedPage`], which carries everything the
//! feed template needs including the neighbouring page numbers.

use crate::{
    comment::Comment,
    settings::FeedSettings,
    store::{CommentStore, StoreWindow},
};

mod errors;

pub use errors::FeedError;

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    /// Validate raw query values.
    ///
    /// A missing `page` means page 1 and a missing `page_size` means the
    /// configured default. `page` must be positive. `page_size` is clamped to
    /// `1..=max_page_size` rather than rejected.
    pub fn new(
        page: Option<i64>,
        page_size: Option<i64>,
        settings: &FeedSettings,
    ) -> Result<Self, FeedError> {
        let page = page.unwrap_or(1);
        if page <= 0 {
            return Err(FeedError::InvalidPage { page });
        }

        let page_size = match page_size {
            None => settings.default_page_size(),
            Some(size) if size < 1 => 1,
            Some(size) => usize::try_from(size)
                .unwrap_or(usize::MAX)
                .min(settings.max_page_size()),
        };

        Ok(Self {
            page: usize::try_from(page).unwrap_or(usize::MAX),
            page_size,
        })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Index of the first record on this page.
    pub fn start(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Index one past the last record on this page.
    pub fn end(&self) -> usize {
        self.start().saturating_add(self.page_size)
    }
}

/// One rendered page of the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedPage {
    pub items: Vec<Comment>,
    pub current_page: usize,
    pub page_size: usize,
    pub next_page: Option<usize>,
    pub prev_page: Option<usize>,
}

impl FeedPage {
    /// Resolve a request against a window read from the store.
    pub fn from_window(request: PageRequest, window: StoreWindow) -> Self {
        let page = request.page();
        let next_page = (request.end() < window.total).then(|| page + 1);
        let prev_page = (page > 1).then(|| page - 1);

        Self {
            items: window.items,
            current_page: page,
            page_size: request.page_size(),
            next_page,
            prev_page,
        }
    }
}

/// Read one page of the feed from the store.
pub async fn load(store: &CommentStore, request: PageRequest) -> FeedPage {
    let window = store.window(request.start(), request.end()).await;
    tracing::debug!(
        page = request.page(),
        page_size = request.page_size(),
        items = window.items.len(),
        total = window.total,
        "Loaded feed page"
    );
    FeedPage::from_window(request, window)
}
