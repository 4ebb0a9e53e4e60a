//! Custom extractors for Axum handlers.
//!
//! This module provides reusable extractors that reduce boilerplate
//! and standardize error handling across your API.

pub mod id_path;
pub mod query_params;
pub mod validated_path;

pub use id_path::IdPath;
pub use query_params::QueryParams;
pub use validated_path::ValidatedPath;
