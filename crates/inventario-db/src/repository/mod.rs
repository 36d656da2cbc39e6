//! # Repository Module
//!
//! One repository per table. Each holds a clone of the pool and exposes
//! the same shape of operations.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Service (inventario-api)                                              │
//! │       │                                                                 │
//! │       │  db.clientes().get_by_id(7)                                    │
//! │       ▼                                                                 │
//! │  ClienteRepository                                                     │
//! │  ├── list(&self)              ORDER BY id                              │
//! │  ├── get_by_id(&self, id)     Option<Cliente>                          │
//! │  ├── exists(&self, id)        bool (FK checks)                         │
//! │  ├── insert(&self, nuevo)     Cliente with its new id                  │
//! │  ├── update(&self, cliente)   full-row write                           │
//! │  └── delete(&self, id)        RESTRICT → ForeignKeyViolation           │
//! │       │                                                                 │
//! │       │  SQL (runtime-checked queries, one transaction per write)      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Writes that fail roll back: the transaction is dropped without commit
//! and no partial row is left behind.
//!
//! ## Available Repositories
//!
//! - [`ClienteRepository`], [`ProveedorRepository`]
//! - [`ProductoRepository`]
//! - [`OrdenCompraRepository`], [`OrdenVentaRepository`]
//! - [`DetalleOrdenCompraRepository`], [`DetalleOrdenVentaRepository`]

use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteQueryResult};
use sqlx::SqlitePool;

use crate::error::{DbError, DbResult};

pub mod cliente;
pub mod detalle_orden_compra;
pub mod detalle_orden_venta;
pub mod orden_compra;
pub mod orden_venta;
pub mod producto;
pub mod proveedor;

pub use cliente::ClienteRepository;
pub use detalle_orden_compra::DetalleOrdenCompraRepository;
pub use detalle_orden_venta::DetalleOrdenVentaRepository;
pub use orden_compra::OrdenCompraRepository;
pub use orden_venta::OrdenVentaRepository;
pub use producto::ProductoRepository;
pub use proveedor::ProveedorRepository;

/// Executes a single write statement inside its own transaction.
pub(crate) async fn execute_in_transaction<'q>(
    pool: &SqlitePool,
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
) -> DbResult<SqliteQueryResult> {
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

    let result = query.execute(&mut *tx).await?;

    tx.commit()
        .await
        .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

    Ok(result)
}

/// `SELECT EXISTS(...)` for a single id in `table`.
pub(crate) async fn row_exists(pool: &SqlitePool, table: &str, id: i64) -> DbResult<bool> {
    let sql = format!("SELECT EXISTS(SELECT 1 FROM {table} WHERE id = ?1)");
    let found: i64 = sqlx::query_scalar(&sql).bind(id).fetch_one(pool).await?;
    Ok(found != 0)
}

// =============================================================================
// Test Fixtures
// =============================================================================
