use crate::{AppInfo, Environment};
use tracing::{Span, Subscriber, debug, info, info_span};
use tracing_subscriber::{fmt::MakeWriter, prelude::*, EnvFilter};

/// Install color-eyre with a project-standard configuration.
///
/// Call this early in the main() before any fallible operations to ensure
/// colored error output. Safe to call multiple times.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Root span naming the running application.
///
/// Every event recorded inside it, and every span created with it as parent,
/// carries `application` and `version` fields.
pub fn app_span(app: &AppInfo) -> Span {
    info_span!("app", application = %app.name, version = %app.version)
}

/// Default filter when `RUST_LOG` is unset
fn default_filter(environment: &Environment) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if environment.is_production() {
            EnvFilter::new("info")
        } else {
            EnvFilter::new("debug")
        }
    })
}

/// Build the subscriber for `environment`, writing to `writer`.
///
/// Production emits flattened JSON lines with the span list attached, so the
/// application fields from [`app_span`] appear on every line. Development uses
/// the pretty formatter. Both carry an `ErrorLayer` for span traces.
pub fn build_subscriber<W>(
    environment: &Environment,
    filter: EnvFilter,
    writer: W,
) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    if environment.is_production() {
        Box::new(
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(writer)
                        .with_target(false)
                        .with_span_list(true)
                        .flatten_event(true),
                )
                .with(tracing_error::ErrorLayer::default())
                .with(filter),
        )
    } else {
        Box::new(
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_target(true)
                        .with_file(false)
                        .with_line_number(false)
                        .pretty(),
                )
                .with(tracing_error::ErrorLayer::default())
                .with(filter),
        )
    }
}

/// Initialize the global subscriber and return the application span.
///
/// Enter (or `instrument` with) the returned span for bootstrap and serving,
/// and use it as the parent of request spans, so log lines name the
/// application they came from.
///
/// Environment variables:
/// - `APP_ENV`: Set to "production" for JSON logs (default: "development")
/// - `RUST_LOG`: Override log levels (e.g., "debug", "domain_catalog=trace")
///
/// Calling it again once a subscriber is installed only logs at debug level.
pub fn init_tracing(app: &AppInfo, environment: &Environment) -> Span {
    let subscriber = build_subscriber(environment, default_filter(environment), std::io::stdout);

    match subscriber.try_init() {
        Ok(_) => info!(
            application = app.name,
            "Tracing initialized. Environment: {:?}",
            environment
        ),
        Err(_) => debug!("Tracing already initialized, skipping re-initialization"),
    }

    app_span(app)
}
