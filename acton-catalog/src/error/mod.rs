//! Error types and error handling
//!
//! Every failure of the catalog fetch is terminal at the loader: it is
//! logged and recorded in the load status, never shown to the visitor.
//! Template failures are the only errors that reach an HTTP response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Catalog error type
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The GraphQL endpoint could not be reached or the body could not be read
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The GraphQL endpoint answered with a status other than 200
    #[error("Unexpected status {0} from GraphQL endpoint")]
    Status(u16),

    /// The response body was not the expected JSON document
    #[error("Malformed GraphQL response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response carried GraphQL errors and no data
    #[error("GraphQL errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    /// The response carried neither data nor errors
    #[error("GraphQL response has no data")]
    MissingData,

    /// Template rendering failed
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// Result alias used across the crate
pub type CatalogResult<T> = Result<T, CatalogError>;

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}
