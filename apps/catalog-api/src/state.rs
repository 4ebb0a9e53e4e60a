//! Application state management.
//!
//! The state holds the loaded configuration and the seeded item store
//! shared by every route.

use domain_catalog::{InMemoryItemRepository, ItemResult};
use tracing::info;

use crate::config::Config;

/// Shared application state.
///
/// Cloning is cheap; the repository shares its items behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: Config,
    /// Read-only catalog store
    pub repository: InMemoryItemRepository,
}

impl AppState {
    /// Seed the catalog from the configured file, or the bundled data when none is set.
    pub fn load(config: Config) -> ItemResult<Self> {
        let repository = match &config.catalog.seed_file {
            Some(path) => {
                info!("Seeding catalog from {}", path.display());
                InMemoryItemRepository::from_json_file(path)?
            }
            None => InMemoryItemRepository::bundled()?,
        };
        info!("Catalog loaded with {} items", repository.len());

        Ok(Self { config, repository })
    }
}
