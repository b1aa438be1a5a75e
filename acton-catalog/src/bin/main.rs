//! acton-catalog server
//!
//! Loads configuration for the `acton-catalog` service and serves the
//! listing page until ctrl-c.

use acton_catalog::config::CatalogConfig;
use acton_catalog::{observability, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    observability::init()?;

    let config = CatalogConfig::load_for_service("acton-catalog")?;
    server::serve(config).await
}
