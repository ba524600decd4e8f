use std::net::SocketAddr;

use tokio::sync::oneshot;
use voxpop::{
    Category, Comment, CommentStore,
    web::{self, AppState},
};

/// A router bound to an ephemeral local port.
///
/// The server is shut down when the value is dropped.
pub struct TestServer {
    pub addr: SocketAddr,
    pub state: AppState,
    pub client: reqwest::Client,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    pub async fn get_text(&self, path: &str) -> String {
        let response = self.get(path).await;
        assert!(
            response.status().is_success(),
            "GET {path} returned {}",
            response.status()
        );
        response.text().await.unwrap()
    }

    /// Post the submission form with the given fields.
    pub async fn submit(&self, fields: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .post(self.url("/comments/new"))
            .form(fields)
            .send()
            .await
            .unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// Start the router with default settings on `127.0.0.1:0`.
pub async fn spawn_server() -> TestServer {
    spawn_server_with(AppState::default()).await
}

pub async fn spawn_server_with(state: AppState) -> TestServer {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let server_state = state.clone();
    tokio::spawn(async move {
        web::serve(listener, server_state, async move {
            let _ = shutdown_rx.await;
        })
        .await
        .expect("Server failed");
    });

    // Redirects are asserted on, not followed
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestServer {
        addr,
        state,
        client,
        shutdown: Some(shutdown_tx),
    }
}

/// Store `count` comments named `comment 1` .. `comment {count}` in that order,
/// so `comment {count}` ends up first.
pub async fn populate(store: &CommentStore, count: usize) {
    for i in 1..=count {
        let category = if i % 2 == 0 {
            Category::Negative
        } else {
            Category::Positive
        };
        store
            .prepend(Comment::new(format!("comment {i}"), category))
            .await;
    }
}

/// Byte offset of `needle` in `haystack`, panicking when absent.
pub fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("'{needle}' not found in page"))
}
