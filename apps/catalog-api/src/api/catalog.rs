//! Item catalog routes
//!
//! Wires the catalog domain to HTTP routes.

use axum::Router;
use domain_catalog::{CatalogService, handlers};

use crate::state::AppState;

/// Create the item catalog router
pub fn router(state: &AppState) -> Router {
    let service = CatalogService::new(state.repository.clone());

    handlers::router(service)
}
