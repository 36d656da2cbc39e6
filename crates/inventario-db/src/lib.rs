//! # inventario-db: Database Layer for Inventario
//!
//! SQLite storage for the inventory API, built on sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Inventario Data Flow                             │
//! │                                                                         │
//! │  HTTP handler → service (validation, FK checks)                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  inventario-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐   ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories  │   │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │  (one/table)   │   │  (embedded)  │  │   │
//! │  │   │               │    │                │   │              │  │   │
//! │  │   │ SqlitePool    │◄───│ ClienteRepo    │   │ 001_initial  │  │   │
//! │  │   │ WAL + FKs on  │    │ OrdenCompraRepo│   │ _schema.sql  │  │   │
//! │  │   │               │    │ Detalle*Repo   │   │              │  │   │
//! │  │   └───────────────┘    └────────────────┘   └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              SQLite Database (INVENTARIO_DB_PATH)               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - One repository per table
//!
//! ## Usage
//!
//! ```rust,ignore
//! use inventario_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./inventario.db")).await?;
//! let clientes = db.clientes().list().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::{
    ClienteRepository, DetalleOrdenCompraRepository, DetalleOrdenVentaRepository,
    OrdenCompraRepository, OrdenVentaRepository, ProductoRepository, ProveedorRepository,
};
