//! HTTP application wiring (axum router + store wiring).
//!
//! Layout:
//! - `services.rs`: store construction (seed catalog + ledger)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::Extension;
use axum::Router;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app() -> Router {
    let ledger = Arc::new(services::build_ledger());

    routes::router().layer(Extension(ledger))
}
