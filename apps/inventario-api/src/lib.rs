//! # Inventario API
//!
//! HTTP/JSON server for the inventory database.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Inventario API                                 │
//! │                                                                         │
//! │  HTTP client ──► axum Router (routes) ──► services ──► inventario-db   │
//! │                        │                     │                          │
//! │                        │                     └── inventario-core        │
//! │                        │                         (validation, patches)  │
//! │                        ▼                                                │
//! │                  ApiError { code, message }                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables, see [`config`]:
//! - `INVENTARIO_HTTP_PORT` - HTTP port (default: 8080)
//! - `INVENTARIO_BIND_ADDR` - Bind address (default: 0.0.0.0)
//! - `INVENTARIO_DB_PATH` - SQLite file (default: ./inventario.db)
//! - `INVENTARIO_DB_MAX_CONNECTIONS` - Pool size (default: 5)

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod services;

use axum::Router;
use inventario_db::Database;
use tower_http::trace::TraceLayer;

// Re-exports
pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ApiResult, ErrorCode};

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
}

/// Builds the full application router over `db`.
pub fn router(db: Database) -> Router {
    routes::routes()
        .with_state(AppState { db })
        .layer(TraceLayer::new_for_http())
}
