//! Configuration management for acton-catalog
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `CATALOG_` prefix, `__` for nesting)
//! 2. `./config.toml` (development)
//! 3. `~/.config/acton-catalog/{service}/config.toml` (user config, XDG)
//! 4. `/etc/acton-catalog/{service}/config.toml` (system config)
//! 5. Hardcoded defaults (fallback)
//!
//! Environment variable format: `CATALOG_SECTION__FIELD_NAME`, for example
//! `CATALOG_LISTING__PAGE_SIZE=20`.
//!
//! # Example Configuration
//!
//! ```toml
//! # config.toml
//! [service]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [graphql]
//! endpoint = "https://shop.example.com/graphql"
//! category_ids = "156126"
//! locale = "de_DE"
//! article_limit = 50
//!
//! [listing]
//! page_size = 10
//!
//! [pricing]
//! locale = "de-DE"
//! currency = "EUR"
//!
//! [observability]
//! log_renders = false
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use acton_catalog::config::CatalogConfig;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = CatalogConfig::load_for_service("acton-catalog")?;
//! let page_size = config.listing.page_size;
//! # Ok(())
//! # }
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CatalogError, CatalogResult};
use crate::observability::ObservabilityConfig;
use crate::pricing::PriceFormatter;

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Interface to bind
    pub host: String,

    /// Port to bind
    pub port: u16,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServiceSettings {
    /// `host:port` string suitable for binding a listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// GraphQL catalog source configuration
///
/// These values are interpolated into the catalog query document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphQlSettings {
    /// Full URL of the GraphQL endpoint
    pub endpoint: String,

    /// Category id(s) passed to the `categories` field
    pub category_ids: String,

    /// Catalog locale enum value (e.g. `de_DE`)
    pub locale: String,

    /// Maximum number of articles requested per category
    pub article_limit: u32,

    /// Image format enum value (e.g. `WEBP`)
    pub image_format: String,

    /// Maximum image width in pixels
    pub image_max_width: u32,

    /// Maximum image height in pixels
    pub image_max_height: u32,

    /// Number of images requested per article
    pub image_limit: u32,

    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for GraphQlSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:4000/graphql".to_string(),
            category_ids: "156126".to_string(),
            locale: "de_DE".to_string(),
            article_limit: 50,
            image_format: "WEBP".to_string(),
            image_max_width: 200,
            image_max_height: 200,
            image_limit: 1,
            request_timeout_ms: 5000,
        }
    }
}

/// Listing (search + pagination) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingSettings {
    /// Number of articles per page
    pub page_size: usize,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self { page_size: 10 }
    }
}

/// Price formatting configuration
///
/// Fixed for the whole page; never derived from article data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingSettings {
    /// BCP 47 locale tag (e.g. `de-DE`)
    pub locale: String,

    /// ISO 4217 currency code (e.g. `EUR`)
    pub currency: String,
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            locale: "de-DE".to_string(),
            currency: "EUR".to_string(),
        }
    }
}

/// HTMX-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmxSettings {
    /// Enable auto-vary middleware for caching
    pub auto_vary: bool,

    /// Interval at which a loading page polls for the catalog
    pub poll_interval_ms: u64,
}

impl Default for HtmxSettings {
    fn default() -> Self {
        Self {
            auto_vary: true,
            poll_interval_ms: 1000,
        }
    }
}

/// Static page copy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontSettings {
    /// Brand shown in the header
    pub brand: String,

    /// Heading above the category links
    pub sidebar_title: String,

    /// Legal notice shown in the footer
    pub footer: String,
}

impl Default for StorefrontSettings {
    fn default() -> Self {
        Self {
            brand: "home24".to_string(),
            sidebar_title: "Kategorien".to_string(),
            footer: "Alle Preise sind in Euro (€) inkl. gesetzlicher Umsatzsteuer und Versandkosten."
                .to_string(),
        }
    }
}

/// Complete acton-catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// HTTP listener settings
    #[serde(default)]
    pub service: ServiceSettings,

    /// GraphQL source settings
    #[serde(default)]
    pub graphql: GraphQlSettings,

    /// Listing settings
    #[serde(default)]
    pub listing: ListingSettings,

    /// Price formatting settings
    #[serde(default)]
    pub pricing: PricingSettings,

    /// HTMX settings
    #[serde(default)]
    pub htmx: HtmxSettings,

    /// Logging settings
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Page copy
    #[serde(default)]
    pub storefront: StorefrontSettings,
}

impl CatalogConfig {
    /// Load configuration for a specific service
    ///
    /// Searches for configuration in XDG-compliant locations with precedence:
    /// 1. Environment variables (`CATALOG_*`, use `__` for nesting)
    /// 2. `./config.toml`
    /// 3. `~/.config/acton-catalog/{service_name}/config.toml`
    /// 4. `/etc/acton-catalog/{service_name}/config.toml`
    /// 5. Defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be parsed, a value has
    /// the wrong type, or the merged configuration fails [`Self::validate`].
    pub fn load_for_service(service_name: &str) -> anyhow::Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?));

        let system_config = PathBuf::from("/etc/acton-catalog")
            .join(service_name)
            .join("config.toml");
        if system_config.exists() {
            figment = figment.merge(Toml::file(&system_config));
        }

        let user_config = Self::recommended_path(service_name);
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        let local_config = PathBuf::from("./config.toml");
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        figment = figment.merge(Env::prefixed("CATALOG_").split("__").lowercase(true));

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// Missing keys fall back to defaults; environment variables still
    /// override the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file contains invalid TOML, a value has the
    /// wrong type, or the merged configuration fails [`Self::validate`].
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config: Self = Figment::new()
            .merge(Toml::string(&toml::to_string(&Self::default())?))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("CATALOG_").split("__").lowercase(true))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// Get the recommended XDG config path for a service
    ///
    /// ```rust
    /// use acton_catalog::config::CatalogConfig;
    ///
    /// let path = CatalogConfig::recommended_path("my-shop");
    /// assert!(path.ends_with("config.toml"));
    /// ```
    #[must_use]
    pub fn recommended_path(service_name: &str) -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from("./config.toml"),
            |config_dir| {
                config_dir
                    .join("acton-catalog")
                    .join(service_name)
                    .join("config.toml")
            },
        )
    }

    /// Check values that deserialize fine but cannot drive the page
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] for a zero page size, a zero article
    /// limit, or a pricing locale/currency the formatter does not support.
    pub fn validate(&self) -> CatalogResult<()> {
        if self.listing.page_size == 0 {
            return Err(CatalogError::Config(
                "listing.page_size must be at least 1".to_string(),
            ));
        }
        if self.graphql.article_limit == 0 {
            return Err(CatalogError::Config(
                "graphql.article_limit must be at least 1".to_string(),
            ));
        }
        PriceFormatter::from_settings(&self.pricing)?;
        Ok(())
    }
}
