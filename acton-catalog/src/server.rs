//! Router assembly and the serving loop

use axum::{routing::get, Router};
use axum_htmx::AutoVaryLayer;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::CatalogConfig;
use crate::graphql::GraphQlClient;
use crate::handlers::{health, listing};
use crate::loader::{CatalogLoader, CatalogStore};
use crate::state::CatalogState;

/// Build the application router
///
/// Routes:
/// - `GET /` - listing page, or the `#listing` fragment for HTMX requests
/// - `GET /health/live` - liveness probe
/// - `GET /health/ready` - readiness probe (catalog loaded)
pub fn router(state: CatalogState) -> Router {
    let auto_vary = state.config().htmx.auto_vary;

    let app = Router::new()
        .route("/", get(listing::index))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if auto_vary {
        app.layer(AutoVaryLayer)
    } else {
        app
    }
}

/// Serve the listing page until ctrl-c
///
/// Mounts the catalog loader before accepting connections and unmounts it on
/// shutdown, so a fetch still in flight is cancelled and its response dropped.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the GraphQL client
/// cannot be built, or the listener cannot be bound.
pub async fn serve(config: CatalogConfig) -> anyhow::Result<()> {
    config.validate()?;

    let store = CatalogStore::new();
    let client = GraphQlClient::from_settings(&config.graphql)?;
    let address = config.service.bind_address();
    let state = CatalogState::with_config(config, store.clone())?;

    tracing::info!(
        service = %state.observability().service_name,
        endpoint = %client.endpoint(),
        page_size = state.config().listing.page_size,
        "Configuration loaded"
    );

    let loader = CatalogLoader::new(Arc::new(client), store).mount();

    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("Server listening on http://{address}");

    let result = axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await;

    loader.unmount().await;
    tracing::info!("Server stopped");

    result.map_err(Into::into)
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
