//! # DetalleOrdenCompra Repository
//!
//! Line items of purchase orders (`detalle_orden_compra`).
//!
//! ```text
//! ordenes_compra (id) ◄──┐
//!                        ├── detalle_orden_compra (id_orden_compra, id_producto, cantidad)
//! productos (id) ◄───────┘
//! ```
//!
//! Inserting or updating a line item never touches `productos.cantidad`.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::execute_in_transaction;
use inventario_core::{DetalleOrdenCompra, NuevoDetalleOrdenCompra};

const TABLE: &str = "detalle_orden_compra";

/// Repository for DetalleOrdenCompra database operations.
#[derive(Debug, Clone)]
pub struct DetalleOrdenCompraRepository {
    pool: SqlitePool,
}

impl DetalleOrdenCompraRepository {
    /// Creates a new DetalleOrdenCompraRepository.
    pub fn new(pool: SqlitePool) -> Self {
        DetalleOrdenCompraRepository { pool }
    }

    /// Lists every purchase line item in insertion order.
    pub async fn list(&self) -> DbResult<Vec<DetalleOrdenCompra>> {
        let detalles = sqlx::query_as::<_, DetalleOrdenCompra>(
            r#"
            SELECT id, id_orden_compra, id_producto, cantidad
            FROM detalle_orden_compra
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(detalles)
    }

    /// Lists the line items of one purchase order.
    ///
    /// An unknown order yields an empty list; the caller decides whether
    /// that is a 404.
    pub async fn list_by_order(&self, id_orden_compra: i64) -> DbResult<Vec<DetalleOrdenCompra>> {
        let detalles = sqlx::query_as::<_, DetalleOrdenCompra>(
            r#"
            SELECT id, id_orden_compra, id_producto, cantidad
            FROM detalle_orden_compra
            WHERE id_orden_compra = ?1
            ORDER BY id
            "#,
        )
        .bind(id_orden_compra)
        .fetch_all(&self.pool)
        .await?;

        debug!(id_orden_compra, count = detalles.len(), "Listed detalles de compra");
        Ok(detalles)
    }

    /// Gets a line item by its ID.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<DetalleOrdenCompra>> {
        let detalle = sqlx::query_as::<_, DetalleOrdenCompra>(
            r#"
            SELECT id, id_orden_compra, id_producto, cantidad
            FROM detalle_orden_compra
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(detalle)
    }

    /// Inserts a line item whose references were already checked.
    pub async fn insert(&self, nuevo: &NuevoDetalleOrdenCompra) -> DbResult<DetalleOrdenCompra> {
        let result = execute_in_transaction(
            &self.pool,
            sqlx::query(
                r#"
                INSERT INTO detalle_orden_compra (id_orden_compra, id_producto, cantidad)
                VALUES (?1, ?2, ?3)
                "#,
            )
            .bind(nuevo.id_orden_compra)
            .bind(nuevo.id_producto)
            .bind(nuevo.cantidad),
        )
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, id_orden_compra = nuevo.id_orden_compra, "Inserted detalle de compra");

        Ok(DetalleOrdenCompra {
            id,
            id_orden_compra: nuevo.id_orden_compra,
            id_producto: nuevo.id_producto,
            cantidad: nuevo.cantidad,
        })
    }

    /// Writes every field of `detalle` to its row.
    pub async fn update(&self, detalle: &DetalleOrdenCompra) -> DbResult<()> {
        let result = execute_in_transaction(
            &self.pool,
            sqlx::query(
                r#"
                UPDATE detalle_orden_compra SET
                    id_orden_compra = ?2,
                    id_producto = ?3,
                    cantidad = ?4
                WHERE id = ?1
                "#,
            )
            .bind(detalle.id)
            .bind(detalle.id_orden_compra)
            .bind(detalle.id_producto)
            .bind(detalle.cantidad),
        )
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(TABLE, detalle.id));
        }

        Ok(())
    }

    /// Deletes a line item. Nothing references line items.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        let result = execute_in_transaction(
            &self.pool,
            sqlx::query("DELETE FROM detalle_orden_compra WHERE id = ?1").bind(id),
        )
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(TABLE, id));
        }

        debug!(id, "Deleted detalle de compra");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
