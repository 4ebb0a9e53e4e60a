//! API routes module
//!
//! This module defines all HTTP API routes for the item catalog.

pub mod catalog;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/v1/itemcatalog", catalog::router(state))
}
