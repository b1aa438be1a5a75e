//! HTTP request handlers
//!
//! ```rust,no_run
//! use acton_catalog::handlers::{health, listing};
//! use acton_catalog::state::CatalogState;
//! use axum::{routing::get, Router};
//!
//! # fn example(state: CatalogState) {
//! let app: Router = Router::new()
//!     .route("/", get(listing::index))
//!     .route("/health/live", get(health::liveness))
//!     .route("/health/ready", get(health::readiness))
//!     .with_state(state);
//! # }
//! ```

pub mod health;
pub mod listing;
