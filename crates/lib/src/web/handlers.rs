//! Request handlers for the VoxPop routes.

use axum::{
    Form, Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};

use super::{AppState, templates};
use crate::{
    Result,
    comment::Comment,
    feed::{self, FeedError, PageRequest},
};

/// Submission form data
#[derive(Deserialize)]
pub(crate) struct NewCommentForm {
    text: String,
    category: String,
}

/// Query parameters for the feed
#[derive(Deserialize)]
pub(crate) struct FeedQuery {
    page: Option<i64>,
    page_size: Option<i64>,
}

/// Health check response
#[derive(Serialize)]
pub(crate) struct HealthResponse {
    status: &'static str,
    comments: usize,
}

/// Handler for GET / - Landing page
pub(crate) async fn handle_home() -> Html<String> {
    Html(templates::home_page())
}

/// Handler for GET /comments/new - Show submission form
pub(crate) async fn handle_new_comment_page() -> Html<String> {
    Html(templates::new_comment_page(None, ""))
}

/// Handler for POST /comments/new - Store a comment and redirect to the feed
pub(crate) async fn handle_new_comment_submit(
    State(state): State<AppState>,
    Form(form): Form<NewCommentForm>,
) -> Response {
    match Comment::parse(form.text.as_str(), &form.category) {
        Ok(comment) => {
            tracing::info!(category = %comment.category(), "New comment submitted");
            state.store.prepend(comment).await;
            Redirect::to("/feed").into_response()
        }
        Err(e) => {
            tracing::debug!("Rejected comment submission: {e}");
            (
                StatusCode::BAD_REQUEST,
                Html(templates::new_comment_page(Some(&e.to_string()), &form.text)),
            )
                .into_response()
        }
    }
}

/// Handler for GET /feed?page=..&page_size=.. - Show one page of the feed
pub(crate) async fn handle_feed(
    State(state): State<AppState>,
    query: std::result::Result<Query<FeedQuery>, QueryRejection>,
) -> Result<Html<String>> {
    let Query(query) = query.map_err(|rejection| FeedError::MalformedQuery {
        reason: rejection.body_text(),
    })?;

    let request = PageRequest::new(query.page, query.page_size, &state.settings)?;
    let page = feed::load(&state.store, request).await;
    Ok(Html(templates::feed_page(&page)))
}

/// Handler for GET /health - Health check endpoint
pub(crate) async fn handle_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        comments: state.store.len().await,
    })
}
