//! # HTTP Server
//!
//! Combines the health, generate and history routers behind one CORS layer.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::ConfigResult;
use crate::generator::Generator;
use crate::observability::{log_event_with_fields, Event};

use super::config::HttpServerConfig;
use super::generate_routes::generate_routes;
use super::health_routes::health_routes;
use super::history_routes::history_routes;

/// HTTP server for the generation service
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server around a shared generator.
    ///
    /// Fails if a CORS origin does not parse.
    pub fn with_state(config: HttpServerConfig, generator: Arc<Generator>) -> ConfigResult<Self> {
        let router = Self::build_router(&config, generator)?;
        Ok(Self { config, router })
    }

    fn build_router(config: &HttpServerConfig, generator: Arc<Generator>) -> ConfigResult<Router> {
        let api = Router::new()
            .merge(generate_routes(generator.clone()))
            .merge(history_routes(generator));

        Ok(Router::new()
            .merge(health_routes())
            .nest("/api", api)
            .layer(config.cors_layer()?))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the listener fails
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .bind_addr()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        let bound = addr.to_string();
        log_event_with_fields(Event::Serving, &[("addr", bound.as_str())]);

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
