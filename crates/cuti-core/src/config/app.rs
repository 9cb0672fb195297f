//! Server and CORS configuration.

use serde::{Deserialize, Serialize};

/// Where and how the HTTP listener runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Requests with a larger body are refused with 413.
    pub body_limit_bytes: usize,
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            body_limit_bytes: 64 * 1024,
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// `host:port` for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Browser access rules.
///
/// `exposed_headers` must keep `authorization`: login and profile updates
/// hand the token back in that response header.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// `["*"]` allows any origin.
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub exposed_headers: Vec<String>,
    /// Preflight cache lifetime.
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: owned(&["http://localhost:3000"]),
            allowed_methods: owned(&["GET", "POST", "PUT", "PATCH", "DELETE"]),
            allowed_headers: owned(&["content-type", "authorization"]),
            exposed_headers: owned(&["authorization"]),
            max_age_seconds: 3600,
        }
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
