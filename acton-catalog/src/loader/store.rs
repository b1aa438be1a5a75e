//! Shared category list and load status

use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;

use crate::model::Category;

/// Where the one-shot catalog fetch stands
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum LoadStatus {
    /// Fetch not finished yet
    Pending,
    /// Categories received and applied
    Loaded {
        /// Number of categories received
        categories: usize,
    },
    /// Fetch failed; the page keeps showing its loading placeholder
    Failed {
        /// Error description, for diagnostics only
        reason: String,
    },
    /// The view went away before the fetch finished
    Cancelled,
}

#[derive(Debug)]
struct StoreInner {
    categories: Arc<Vec<Category>>,
    status: LoadStatus,
}

/// The category list every render reads from
///
/// Replacement is wholesale: readers get an `Arc` snapshot and never observe
/// a partially applied response.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl CatalogStore {
    /// Empty store in the `Pending` state
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                categories: Arc::new(Vec::new()),
                status: LoadStatus::Pending,
            })),
        }
    }

    /// Store pre-filled with categories, as if a fetch had completed
    #[must_use]
    pub fn with_categories(categories: Vec<Category>) -> Self {
        let store = Self::new();
        store.replace(categories);
        store
    }

    /// Snapshot of the current categories
    #[must_use]
    pub fn categories(&self) -> Arc<Vec<Category>> {
        Arc::clone(&self.inner.read().categories)
    }

    /// Current load status
    #[must_use]
    pub fn status(&self) -> LoadStatus {
        self.inner.read().status.clone()
    }

    /// Whether the fetch is still in flight
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.inner.read().status == LoadStatus::Pending
    }

    /// Whether a fetch result has been applied
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self.inner.read().status, LoadStatus::Loaded { .. })
    }

    /// Replace the category list with a fetch result
    pub fn replace(&self, categories: Vec<Category>) {
        let mut inner = self.inner.write();
        inner.status = LoadStatus::Loaded {
            categories: categories.len(),
        };
        inner.categories = Arc::new(categories);
    }

    /// Record a failed fetch; categories are left untouched
    pub fn mark_failed(&self, reason: impl Into<String>) {
        self.inner.write().status = LoadStatus::Failed {
            reason: reason.into(),
        };
    }

    /// Record a fetch discarded by cancellation; categories are left untouched
    pub fn mark_cancelled(&self) {
        self.inner.write().status = LoadStatus::Cancelled;
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
