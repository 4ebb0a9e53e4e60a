use axum_helpers::server::{RouterOptions, create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use eyre::WrapErr;
use tracing::{Instrument, Span, info};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing; everything after runs inside the application span
    let app_span = init_tracing(&config.app, &config.environment);

    serve(config, app_span.clone()).instrument(app_span).await
}

async fn serve(config: Config, app_span: Span) -> eyre::Result<()> {
    info!("Starting {} v{}", config.app.name, config.app.version);

    let state = AppState::load(config).wrap_err("Failed to seed catalog")?;

    // Build router with API routes
    let api_routes = api::routes(&state);

    let options = RouterOptions {
        expose_docs: state.config.environment.is_development(),
        cors_allowed_origins: state.config.server.cors_allowed_origins.clone(),
        parent_span: Some(app_span),
    };
    let router = create_router::<openapi::ApiDoc>(api_routes, &options)?;

    // Merge health endpoints
    let app = router.merge(health_router(state.config.app));

    create_app(app, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Item catalog API shutdown complete");
    Ok(())
}
