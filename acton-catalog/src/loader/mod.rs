//! One-shot catalog fetch bound to the view lifecycle
//!
//! [`CatalogLoader::mount`] issues exactly one fetch in the background and
//! returns immediately; the page keeps rendering its loading placeholder
//! until the result is applied to the [`CatalogStore`]. The returned
//! [`LoaderHandle`] owns the fetch: unmounting (or dropping) it cancels the
//! fetch, and a response that arrives afterwards is discarded.
//!
//! Failures are terminal. They are logged and recorded in the store's
//! [`LoadStatus`], never retried, and never shown to the visitor.
//!
//! ```rust,no_run
//! use acton_catalog::config::GraphQlSettings;
//! use acton_catalog::graphql::GraphQlClient;
//! use acton_catalog::loader::{CatalogLoader, CatalogStore};
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let store = CatalogStore::new();
//! let client = GraphQlClient::from_settings(&GraphQlSettings::default())?;
//! let handle = CatalogLoader::new(Arc::new(client), store.clone()).mount();
//!
//! // ... serve requests from `store` ...
//!
//! handle.unmount().await;
//! # Ok(())
//! # }
//! ```

mod store;

pub use store::{CatalogStore, LoadStatus};

use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::graphql::CatalogSource;

/// Fetches the catalog once into a store
pub struct CatalogLoader {
    source: Arc<dyn CatalogSource>,
    store: CatalogStore,
}

impl CatalogLoader {
    /// Loader that writes results from `source` into `store`
    #[must_use]
    pub fn new(source: Arc<dyn CatalogSource>, store: CatalogStore) -> Self {
        Self { source, store }
    }

    /// Start the fetch in the background
    ///
    /// Must be called from within a tokio runtime.
    #[must_use = "dropping the handle cancels the fetch"]
    pub fn mount(self) -> LoaderHandle {
        let token = CancellationToken::new();
        let task = tokio::spawn(fetch_once(self.source, self.store, token.clone()));
        LoaderHandle {
            token,
            task: Some(task),
        }
    }
}

async fn fetch_once(source: Arc<dyn CatalogSource>, store: CatalogStore, token: CancellationToken) {
    info!("Fetching catalog");

    // The response is applied in the same poll that observes it, so a cancel
    // seen first always wins and nothing is written after teardown.
    tokio::select! {
        biased;
        () = token.cancelled() => {
            info!("Catalog fetch cancelled, response discarded");
            store.mark_cancelled();
        }
        result = source.fetch_categories() => match result {
            Ok(categories) => {
                info!(categories = categories.len(), "Catalog loaded");
                store.replace(categories);
            }
            Err(error) => {
                warn!(%error, "Catalog fetch failed");
                store.mark_failed(error.to_string());
            }
        },
    }
}

/// Ownership of a mounted fetch
///
/// Dropping the handle cancels a fetch that is still in flight.
#[derive(Debug)]
pub struct LoaderHandle {
    token: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl LoaderHandle {
    /// Cancel the fetch without waiting
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether the fetch task has finished
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Wait for the fetch to finish on its own
    pub async fn finished(&mut self) {
        if let Some(task) = self.task.take() {
            if let Err(error) = task.await {
                warn!(%error, "Catalog fetch task aborted");
            }
        }
    }

    /// Tear down: cancel the fetch and wait for the task to settle
    pub async fn unmount(mut self) {
        self.token.cancel();
        self.finished().await;
    }
}

impl Drop for LoaderHandle {
    fn drop(&mut self) {
        if self.task.is_some() {
            self.token.cancel();
        }
    }
}
