//! # HTTP Server Module
//!
//! Axum server exposing the generation pipeline.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/generate` - Derive a numeral for the current minute
//! - `GET /api/history` - Recent numerals, newest first
//! - `DELETE /api/history` - Clear the history

pub mod config;
pub mod generate_routes;
pub mod health_routes;
pub mod history_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
