use axum::http::{HeaderValue, Method, header};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Parse configured origins into header values.
///
/// Blank entries are skipped; any entry that is not a valid header value is
/// an error.
pub fn parse_origins(origins: &[String]) -> io::Result<Vec<HeaderValue>> {
    origins
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })
}

/// Creates a CORS layer for a read-only API.
///
/// # Returns
/// A configured `CorsLayer` with:
/// - The given allowed origins
/// - GET and OPTIONS methods
/// - Content-Type and Accept headers
/// - 1 hour max age
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_skips_blanks() {
        let origins = vec![
            "http://localhost:3000".to_string(),
            " ".to_string(),
            " https://example.com ".to_string(),
        ];
        let parsed = parse_origins(&origins).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1], "https://example.com");
    }

    #[test]
    fn test_parse_origins_rejects_invalid_values() {
        let origins = vec!["http://bad\norigin".to_string()];
        assert!(parse_origins(&origins).is_err());
    }
}
