//! Test server utilities using axum-test
//!
//! Serves the real router over an in-memory catalog store.

use axum::http::{HeaderName, HeaderValue};
use axum::Router;

use crate::config::CatalogConfig;
use crate::loader::CatalogStore;
use crate::model::Category;
use crate::server::router;
use crate::state::CatalogState;
use crate::template::LISTING_TARGET;

/// Test server wrapper for handler tests
pub struct TestServer {
    inner: axum_test::TestServer,
}

impl TestServer {
    /// Create a new test server from an Axum router
    ///
    /// # Panics
    ///
    /// Panics if the server cannot be started
    pub fn new(app: Router) -> Self {
        let inner = axum_test::TestServer::new(app).expect("Failed to start test server");
        Self { inner }
    }

    /// Serve the catalog router with `categories` already loaded
    pub fn catalog(categories: Vec<Category>) -> Self {
        Self::with_store(CatalogStore::with_categories(categories))
    }

    /// Serve the catalog router while the fetch is still pending
    pub fn pending() -> Self {
        Self::with_store(CatalogStore::new())
    }

    /// Serve the catalog router over an existing store
    pub fn with_store(store: CatalogStore) -> Self {
        Self::with_config(CatalogConfig::default(), store)
    }

    /// Serve the catalog router with custom configuration
    pub fn with_config(config: CatalogConfig, store: CatalogStore) -> Self {
        let state = CatalogState::with_config(config, store).expect("Configuration is valid");
        Self::new(router(state))
    }

    /// Make a plain GET request
    pub fn get(&self, path: &str) -> axum_test::TestRequest {
        self.inner.get(path)
    }

    /// Make an HTMX GET request aimed at the element with id `target`
    pub fn htmx_get(&self, path: &str, target: &str) -> axum_test::TestRequest {
        self.inner
            .get(path)
            .add_header(
                HeaderName::from_static("hx-request"),
                HeaderValue::from_static("true"),
            )
            .add_header(
                HeaderName::from_static("hx-target"),
                HeaderValue::from_str(target).expect("Invalid target id"),
            )
    }

    /// Make the HTMX request the search box and pagination controls send
    pub fn listing(&self, path: &str) -> axum_test::TestRequest {
        self.htmx_get(path, LISTING_TARGET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;

    #[tokio::test]
    async fn test_server_creation() {
        let app = Router::new().route("/", get(|| async { "Hello" }));
        let server = TestServer::new(app);
        server.get("/").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_htmx_headers_are_sent() {
        let app = Router::new().route(
            "/",
            get(|headers: axum::http::HeaderMap| async move {
                format!(
                    "{}:{}",
                    headers.get("hx-request").map_or("", |v| v.to_str().unwrap_or("")),
                    headers.get("hx-target").map_or("", |v| v.to_str().unwrap_or(""))
                )
            }),
        );
        let server = TestServer::new(app);
        server.listing("/").await.assert_text("true:listing");
    }
}
