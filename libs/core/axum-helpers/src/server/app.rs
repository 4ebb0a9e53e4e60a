use super::shutdown::shutdown_signal;
use crate::errors::handlers::not_found;
use crate::http::{create_cors_layer, parse_origins, security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::io;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Level, Span, info, info_span};
use utoipa::OpenApi;

/// Cross-cutting options for [`create_router`].
#[derive(Clone, Debug, Default)]
pub struct RouterOptions {
    /// Mount Swagger UI at `/swagger-ui` and the OpenAPI document at `/api-docs/openapi.json`
    pub expose_docs: bool,
    /// Allowed CORS origins; no CORS layer is added when empty
    pub cors_allowed_origins: Vec<String>,
    /// Parent of every request span, typically the application span
    pub parent_span: Option<Span>,
}

/// Starts the Axum server with graceful shutdown.
///
/// # Errors
/// Returns an error if:
/// - The TCP listener fails to bind to the configured address
/// - The server encounters an error during operation
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Creates a configured Axum router with common middleware and documentation.
///
/// This function sets up:
/// - API routes nested under `/api`
/// - OpenAPI documentation (Swagger UI) when `options.expose_docs` is set
/// - Request tracing (request spans are children of `options.parent_span`)
/// - Security headers and response compression
/// - CORS when origins are configured
/// - JSON 404 fallback
///
/// Health endpoints are added by the app with `health_router()`.
///
/// # Errors
/// Returns an error if a configured CORS origin is not a valid header value.
pub fn create_router<T>(apis: Router, options: &RouterOptions) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_swagger_ui::SwaggerUi;

    let mut router = Router::new();

    if options.expose_docs {
        info!("API documentation available at /swagger-ui");
        router = router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()));
    }

    let parent = options.parent_span.clone().unwrap_or_else(Span::none);

    let mut router = router
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(move |request: &axum::extract::Request| {
                    info_span!(
                        parent: &parent,
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version()
                    )
                })
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        // Compresses responses based on the Accept-Encoding header
        .layer(CompressionLayer::new());

    let origins = parse_origins(&options.cors_allowed_origins)?;
    if !origins.is_empty() {
        info!(
            "CORS configured with allowed origins: {}",
            options.cors_allowed_origins.join(",")
        );
        router = router.layer(create_cors_layer(origins));
    }

    Ok(router)
}
