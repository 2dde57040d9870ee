//! HTTP Server Configuration
//!
//! Bind address and the origins allowed to call the API from a browser.
//! An empty origin list opens CORS to any origin.

use std::net::SocketAddr;

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::{ConfigError, ConfigResult};

/// Origins of the local dashboard
const DASHBOARD_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Interface to listen on (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Listen port (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Browser origins allowed to call `/api` (default: local dashboard)
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_cors_origins() -> Vec<String> {
    DASHBOARD_ORIGINS.iter().map(|o| o.to_string()).collect()
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl HttpServerConfig {
    /// Same settings on another port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// `host:port` as given
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parsed listen address
    pub fn bind_addr(&self) -> ConfigResult<SocketAddr> {
        self.socket_addr().parse().map_err(|_| {
            ConfigError::invalid("http.host", format!("{:?} is not an IP address", self.host))
        })
    }

    /// Check the bind address and every origin
    pub fn validate(&self) -> ConfigResult<()> {
        self.bind_addr()?;
        for origin in &self.cors_origins {
            parse_origin(origin)?;
        }
        Ok(())
    }

    /// CORS layer for the configured origins
    pub fn cors_layer(&self) -> ConfigResult<CorsLayer> {
        let allow_origin = if self.cors_origins.is_empty() {
            AllowOrigin::any()
        } else {
            let origins = self
                .cors_origins
                .iter()
                .map(|o| parse_origin(o))
                .collect::<ConfigResult<Vec<_>>>()?;
            AllowOrigin::list(origins)
        };

        Ok(CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods(Any)
            .allow_headers(Any))
    }
}

/// An origin is a scheme plus authority, no path
fn parse_origin(origin: &str) -> ConfigResult<HeaderValue> {
    let authority = origin
        .strip_prefix("http://")
        .or_else(|| origin.strip_prefix("https://"))
        .filter(|rest| !rest.is_empty() && !rest.contains('/'));

    match authority {
        Some(_) => HeaderValue::from_str(origin)
            .map_err(|e| ConfigError::invalid("http.cors_origins", format!("{}: {}", origin, e))),
        None => Err(ConfigError::invalid(
            "http.cors_origins",
            format!("{:?} is not an http(s) origin", origin),
        )),
    }
}
