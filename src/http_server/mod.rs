//! # HTTP Server Module
//!
//! Axum server exposing the conversion API.
//!
//! # Endpoints
//!
//! - `POST /api/convert` - Project lunar birthdays for a birth date
//! - `GET /api/health` - Health check

pub mod config;
pub mod convert_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use convert_routes::ConvertState;
pub use server::HttpServer;
