use core_config::{AppInfo, FromEnv, app_info, env_optional, server::ServerConfig};
use std::path::PathBuf;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Where the catalog is seeded from
#[derive(Clone, Debug, Default)]
pub struct CatalogConfig {
    /// JSON array of items; the bundled seed data is used when unset
    pub seed_file: Option<PathBuf>,
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        Self {
            seed_file: env_optional("CATALOG_SEED_FILE").map(PathBuf::from),
        }
    }
}

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let catalog = CatalogConfig::from_env();

        Ok(Self {
            app: app_info!(),
            server,
            catalog,
            environment,
        })
    }
}
