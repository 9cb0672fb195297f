//! CORS layer built from `server.cors`.

use std::str::FromStr;
use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, Any, CorsLayer};
use tracing::warn;

use cuti_core::config::CorsConfig;

/// Builds the CORS layer. A `"*"` entry in origins or headers allows any.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins = if is_wildcard(&config.allowed_origins) {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(parse_all::<HeaderValue>(&config.allowed_origins, "origin"))
    };

    let headers = if is_wildcard(&config.allowed_headers) {
        AllowHeaders::from(Any)
    } else {
        AllowHeaders::list(parse_all::<HeaderName>(&config.allowed_headers, "header"))
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(parse_all::<Method>(&config.allowed_methods, "method"))
        .allow_headers(headers)
        .expose_headers(parse_all::<HeaderName>(&config.exposed_headers, "header"))
        .max_age(Duration::from_secs(config.max_age_seconds))
}

fn is_wildcard(values: &[String]) -> bool {
    values.iter().any(|v| v == "*")
}

/// Parses every entry, skipping (and reporting) the ones that do not parse.
fn parse_all<T: FromStr>(values: &[String], what: &str) -> Vec<T> {
    values
        .iter()
        .filter_map(|v| match v.parse() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                warn!(value = %v, "Ignoring invalid CORS {what}");
                None
            }
        })
        .collect()
}
