//! HTTP surface for VoxPop.
//!
//! | Method | Path            | Purpose                                   |
//! |--------|-----------------|-------------------------------------------|
//! | GET    | `/`             | Landing page                              |
//! | GET    | `/comments/new` | Submission form                           |
//! | POST   | `/comments/new` | Store a comment, `303` to `/feed`         |
//! | GET    | `/feed`         | Paginated feed (`page`, `page_size`)      |
//! | GET    | `/health`       | JSON health check                         |

use std::future::Future;

use axum::{
    Router,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tokio::net::TcpListener;

use crate::{Error, Result, settings::FeedSettings, store::CommentStore};

mod handlers;
pub mod templates;

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    pub store: CommentStore,
    pub settings: FeedSettings,
}

impl AppState {
    /// Create state with an empty store
    pub fn new(settings: FeedSettings) -> Self {
        Self {
            store: CommentStore::new(),
            settings,
        }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::handle_home))
        .route(
            "/comments/new",
            get(handlers::handle_new_comment_page).post(handlers::handle_new_comment_submit),
        )
        .route("/feed", get(handlers::handle_feed))
        .route("/health", get(handlers::handle_health))
        .with_state(state)
}

/// Serve the application on `listener` until `shutdown` resolves.
///
/// In-flight requests are allowed to finish before this returns.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!("Serving VoxPop on http://{addr}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server on {addr} stopped");
    Ok(())
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        if status.is_server_error() {
            tracing::error!(module = self.module(), "Request failed: {self}");
        } else {
            tracing::debug!(module = self.module(), "Rejected request: {self}");
        }

        let title = status.canonical_reason().unwrap_or("Error");
        (status, Html(templates::error_page(title, &self.to_string()))).into_response()
    }
}
