//! acton-catalog: searchable, paginated product listing rendered with HTMX
//!
//! One GraphQL query loads a category tree with its articles when the
//! server starts. Every request is then answered from that snapshot:
//!
//! - **Data fetching**: [`graphql`] builds the query and decodes the response,
//!   [`loader`] runs it once and discards it if the server goes away first
//! - **Filtering**: [`listing::filter`] keeps articles whose name contains the
//!   search input, case-insensitively
//! - **Pagination**: [`listing::paginate`] slices each category's matches into pages
//! - **View**: [`template`] renders the full page or only the `#listing`
//!   region HTMX swaps on search and pagination
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use acton_catalog::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     acton_catalog::observability::init()?;
//!     let config = CatalogConfig::load_for_service("acton-catalog")?;
//!     acton_catalog::server::serve(config).await
//! }
//! ```
//!
//! # Configuration
//!
//! Settings are layered with figment: built-in defaults, then
//! `/etc/acton-catalog/{service}/config.toml`, then the user config directory,
//! then `./config.toml`, then `CATALOG_*` environment variables
//! (`CATALOG_LISTING__PAGE_SIZE=20`).

#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod graphql;
pub mod handlers;
pub mod listing;
pub mod loader;
pub mod model;
pub mod observability;
pub mod pricing;
pub mod server;
pub mod state;
pub mod template;

#[cfg(test)]
pub mod testing;

pub mod prelude {
    //! Convenience re-exports for common types and traits
    //!
    //! ```rust
    //! use acton_catalog::prelude::*;
    //! ```

    // Configuration and state
    pub use crate::config::CatalogConfig;
    pub use crate::state::CatalogState;

    // Error types
    pub use crate::error::{CatalogError, CatalogResult};

    // Catalog data
    pub use crate::graphql::{CatalogQuery, CatalogSource, GraphQlClient};
    pub use crate::loader::{CatalogLoader, CatalogStore, LoadStatus, LoaderHandle};
    pub use crate::model::{Article, Category, ChildCategory};

    // Listing
    pub use crate::listing::{ListingQuery, ListingState, ListingView};
    pub use crate::pricing::PriceFormatter;

    // Rendering
    pub use crate::template::{HxTemplate, ListingFragment, ListingPage, LISTING_TARGET};

    // Re-export key dependencies
    pub use askama;
    pub use axum;
}
