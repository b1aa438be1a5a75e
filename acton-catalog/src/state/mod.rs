//! Application state shared by all handlers

use crate::{
    config::CatalogConfig, error::CatalogResult, loader::CatalogStore,
    observability::ObservabilityConfig, pricing::PriceFormatter,
};
use std::sync::Arc;

/// Application state for acton-catalog
///
/// Combines:
/// - Configuration (including observability settings)
/// - The catalog store filled by the loader
/// - The page-wide price formatter
///
/// # Example
///
/// ```rust
/// use acton_catalog::state::CatalogState;
///
/// # fn example() -> anyhow::Result<()> {
/// let state = CatalogState::new()?;
///
/// let app: axum::Router = axum::Router::new()
///     .route("/", axum::routing::get(|| async { "Hello!" }))
///     .with_state(state);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CatalogState {
    config: Arc<CatalogConfig>,
    store: CatalogStore,
    formatter: Arc<PriceFormatter>,
}

impl CatalogState {
    /// Create application state with defaults and an empty store
    ///
    /// # Errors
    ///
    /// Returns an error if the default pricing settings are unsupported.
    pub fn new() -> CatalogResult<Self> {
        Self::with_config(CatalogConfig::default(), CatalogStore::new())
    }

    /// Create application state with custom configuration and store
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::CatalogError::Config`] if the pricing locale or
    /// currency is unsupported.
    pub fn with_config(config: CatalogConfig, store: CatalogStore) -> CatalogResult<Self> {
        let formatter = PriceFormatter::from_settings(&config.pricing)?;

        Ok(Self {
            config: Arc::new(config),
            store,
            formatter: Arc::new(formatter),
        })
    }

    /// Get configuration reference
    #[must_use]
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Get observability configuration
    #[must_use]
    pub fn observability(&self) -> &ObservabilityConfig {
        &self.config.observability
    }

    /// The catalog store
    #[must_use]
    pub const fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// The price formatter
    #[must_use]
    pub fn formatter(&self) -> &PriceFormatter {
        &self.formatter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::sample_catalog;

    #[test]
    fn test_new_state() {
        let state = CatalogState::new().expect("Failed to create state");
        assert_eq!(state.config().listing.page_size, 10);
        assert!(state.store().categories().is_empty());
        assert_eq!(state.formatter().currency(), "EUR");
        assert_eq!(state.observability().service_name, "acton-catalog");
    }

    #[test]
    fn test_with_config() {
        let mut config = CatalogConfig::default();
        config.listing.page_size = 24;
        config.pricing.locale = "en-US".to_string();
        config.pricing.currency = "USD".to_string();

        let state = CatalogState::with_config(config, CatalogStore::with_categories(sample_catalog()))
            .expect("Failed to create state");

        assert_eq!(state.config().listing.page_size, 24);
        assert_eq!(state.formatter().format_minor(100), "$1.00");
        assert!(state.store().is_loaded());
    }

    #[test]
    fn test_observability_comes_from_config() {
        let mut config = CatalogConfig::default();
        config.observability = ObservabilityConfig::new("my-shop").without_render_logs();

        let state = CatalogState::with_config(config, CatalogStore::new()).unwrap();
        assert_eq!(state.observability().service_name, "my-shop");
        assert!(!state.observability().log_renders);
    }

    #[test]
    fn test_with_config_rejects_unsupported_currency() {
        let mut config = CatalogConfig::default();
        config.pricing.currency = "BTC".to_string();
        assert!(CatalogState::with_config(config, CatalogStore::new()).is_err());
    }

    #[test]
    fn test_clone_state() {
        let state = CatalogState::new().expect("Failed to create state");
        let cloned = state.clone();

        assert!(Arc::ptr_eq(&state.config, &cloned.config));
        state.store().replace(sample_catalog());
        assert!(cloned.store().is_loaded());
    }
}
