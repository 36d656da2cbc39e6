//! # Producto Repository
//!
//! Database operations for the `productos` table.
//!
//! ## Money Columns
//! ```text
//! JSON            Rust                 SQLite
//! ─────────────   ──────────────────   ──────────────────────────
//! "costo": 1.50   Some(Money(150))     costo_cents = 150
//! "costo": null   None                 costo_cents = NULL
//! ```
//!
//! Every attribute is nullable. Productos are referenced by both line-item
//! tables, so a delete is restricted while any detalle points at the row.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::{execute_in_transaction, row_exists};
use inventario_core::{NuevoProducto, Producto};

const TABLE: &str = "productos";

/// Repository for Producto database operations.
#[derive(Debug, Clone)]
pub struct ProductoRepository {
    pool: SqlitePool,
}

impl ProductoRepository {
    /// Creates a new ProductoRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductoRepository { pool }
    }

    /// Lists every Producto in insertion order.
    pub async fn list(&self) -> DbResult<Vec<Producto>> {
        let productos = sqlx::query_as::<_, Producto>(
            r#"
            SELECT id, nombre, costo_cents, precio_venta_cents, cantidad
            FROM productos
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = productos.len(), "Listed productos");
        Ok(productos)
    }

    /// Gets a Producto by its ID.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Producto>> {
        let producto = sqlx::query_as::<_, Producto>(
            r#"
            SELECT id, nombre, costo_cents, precio_venta_cents, cantidad
            FROM productos
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(producto)
    }

    /// Returns whether a Producto with this ID exists.
    pub async fn exists(&self, id: i64) -> DbResult<bool> {
        row_exists(&self.pool, TABLE, id).await
    }

    /// Inserts a Producto as given, nulls included.
    pub async fn insert(&self, nuevo: &NuevoProducto) -> DbResult<Producto> {
        let result = execute_in_transaction(
            &self.pool,
            sqlx::query(
                r#"
                INSERT INTO productos (nombre, costo_cents, precio_venta_cents, cantidad)
                VALUES (?1, ?2, ?3, ?4)
                "#,
            )
            .bind(&nuevo.nombre)
            .bind(nuevo.costo)
            .bind(nuevo.precio_venta)
            .bind(nuevo.cantidad),
        )
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, "Inserted producto");

        Ok(Producto {
            id,
            nombre: nuevo.nombre.clone(),
            costo: nuevo.costo,
            precio_venta: nuevo.precio_venta,
            cantidad: nuevo.cantidad,
        })
    }

    /// Writes every field of `producto` to its row.
    pub async fn update(&self, producto: &Producto) -> DbResult<()> {
        let result = execute_in_transaction(
            &self.pool,
            sqlx::query(
                r#"
                UPDATE productos SET
                    nombre = ?2,
                    costo_cents = ?3,
                    precio_venta_cents = ?4,
                    cantidad = ?5
                WHERE id = ?1
                "#,
            )
            .bind(producto.id)
            .bind(&producto.nombre)
            .bind(producto.costo)
            .bind(producto.precio_venta)
            .bind(producto.cantidad),
        )
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(TABLE, producto.id));
        }

        Ok(())
    }

    /// Deletes a Producto.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - no row with this ID
    /// * `DbError::ForeignKeyViolation` - a line item still references it
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        let result = execute_in_transaction(
            &self.pool,
            sqlx::query("DELETE FROM productos WHERE id = ?1").bind(id),
        )
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(TABLE, id));
        }

        debug!(id, "Deleted producto");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
