//! Testing utilities for the catalog
//!
//! - [`fixtures`] - small catalogs built in code
//! - [`TestServer`] - `axum-test` wrapper serving the real router
//! - HTMX assertion helpers for listing responses

pub mod assertions;
pub mod fixtures;
pub mod server;

pub use assertions::*;
pub use server::TestServer;
