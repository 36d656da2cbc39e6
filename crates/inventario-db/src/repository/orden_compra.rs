//! # OrdenCompra Repository
//!
//! Database operations for the `ordenes_compra` table.
//!
//! ## Relationships
//! ```text
//! proveedores ◄──── ordenes_compra ◄──── detalle_orden_compra
//!   (id)            (id_proveedor)         (id_orden_compra)
//! ```
//!
//! Dates are stored as `YYYY-MM-DD` text, `estado` as its lowercase name.
//! The schema rejects any `estado` outside the three known values.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::{execute_in_transaction, row_exists};
use inventario_core::{NuevaOrdenCompra, OrdenCompra};

const TABLE: &str = "ordenes_compra";

/// Repository for OrdenCompra database operations.
#[derive(Debug, Clone)]
pub struct OrdenCompraRepository {
    pool: SqlitePool,
}

impl OrdenCompraRepository {
    /// Creates a new OrdenCompraRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrdenCompraRepository { pool }
    }

    /// Lists every OrdenCompra in insertion order.
    pub async fn list(&self) -> DbResult<Vec<OrdenCompra>> {
        let ordenes = sqlx::query_as::<_, OrdenCompra>(
            r#"
            SELECT id, fecha_inicio, fecha_final, estado, id_proveedor
            FROM ordenes_compra
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = ordenes.len(), "Listed ordenes de compra");
        Ok(ordenes)
    }

    /// Gets an OrdenCompra by its ID.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<OrdenCompra>> {
        let orden = sqlx::query_as::<_, OrdenCompra>(
            r#"
            SELECT id, fecha_inicio, fecha_final, estado, id_proveedor
            FROM ordenes_compra
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(orden)
    }

    /// Returns whether an OrdenCompra with this ID exists.
    pub async fn exists(&self, id: i64) -> DbResult<bool> {
        row_exists(&self.pool, TABLE, id).await
    }

    /// Inserts a validated OrdenCompra.
    ///
    /// The caller has already checked that the Proveedor exists; the FK
    /// constraint still guards against a concurrent delete.
    pub async fn insert(&self, nueva: &NuevaOrdenCompra) -> DbResult<OrdenCompra> {
        let result = execute_in_transaction(
            &self.pool,
            sqlx::query(
                r#"
                INSERT INTO ordenes_compra (fecha_inicio, fecha_final, estado, id_proveedor)
                VALUES (?1, ?2, ?3, ?4)
                "#,
            )
            .bind(nueva.fecha_inicio)
            .bind(nueva.fecha_final)
            .bind(nueva.estado)
            .bind(nueva.id_proveedor),
        )
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, id_proveedor = nueva.id_proveedor, "Inserted orden de compra");

        Ok(OrdenCompra {
            id,
            fecha_inicio: nueva.fecha_inicio,
            fecha_final: nueva.fecha_final,
            estado: nueva.estado,
            id_proveedor: nueva.id_proveedor,
        })
    }

    /// Writes every field of `orden` to its row.
    pub async fn update(&self, orden: &OrdenCompra) -> DbResult<()> {
        let result = execute_in_transaction(
            &self.pool,
            sqlx::query(
                r#"
                UPDATE ordenes_compra SET
                    fecha_inicio = ?2,
                    fecha_final = ?3,
                    estado = ?4,
                    id_proveedor = ?5
                WHERE id = ?1
                "#,
            )
            .bind(orden.id)
            .bind(orden.fecha_inicio)
            .bind(orden.fecha_final)
            .bind(orden.estado)
            .bind(orden.id_proveedor),
        )
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(TABLE, orden.id));
        }

        Ok(())
    }

    /// Deletes an OrdenCompra.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - no row with this ID
    /// * `DbError::ForeignKeyViolation` - the order still has line items
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        let result = execute_in_transaction(
            &self.pool,
            sqlx::query("DELETE FROM ordenes_compra WHERE id = ?1").bind(id),
        )
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(TABLE, id));
        }

        debug!(id, "Deleted orden de compra");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use inventario_core::{EstadoOrden, NuevoDetalleOrdenCompra};

    use crate::repository::fixtures;

    use super::*;

    #[tokio::test]
    async fn test_insert_and_read_back() {
        let db = fixtures::db().await;
        let proveedor = db.proveedores().insert(&fixtures::contacto("Acme")).await.unwrap();

        let orden = db
            .ordenes_compra()
            .insert(&fixtures::orden_compra(proveedor.id))
            .await
            .unwrap();

        let stored = db.ordenes_compra().get_by_id(orden.id).await.unwrap().unwrap();
        assert_eq!(stored, orden);
        assert_eq!(stored.fecha_inicio, fixtures::date(2024, 1, 1));
        assert_eq!(stored.estado, EstadoOrden::Pendiente);
    }

    #[tokio::test]
    async fn test_estado_stored_lowercase() {
        let db = fixtures::db().await;
        let proveedor = db.proveedores().insert(&fixtures::contacto("Acme")).await.unwrap();
        let orden = db
            .ordenes_compra()
            .insert(&fixtures::orden_compra(proveedor.id))
            .await
            .unwrap();

        let (estado, fecha): (String, String) =
            sqlx::query_as("SELECT estado, fecha_inicio FROM ordenes_compra WHERE id = ?1")
                .bind(orden.id)
                .fetch_one(db.pool())
                .await
                .unwrap();
        assert_eq!(estado, "pendiente");
        assert_eq!(fecha, "2024-01-01");
    }

    #[tokio::test]
    async fn test_unknown_proveedor_violates_fk() {
        let db = fixtures::db().await;

        let err = db
            .ordenes_compra()
            .insert(&fixtures::orden_compra(404))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
        assert!(db.ordenes_compra().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_then_delete_blocked_by_detalle() {
        let db = fixtures::db().await;
        let proveedor = db.proveedores().insert(&fixtures::contacto("Acme")).await.unwrap();
        let producto = db.productos().insert(&fixtures::producto("Widget")).await.unwrap();
        let mut orden = db
            .ordenes_compra()
            .insert(&fixtures::orden_compra(proveedor.id))
            .await
            .unwrap();

        orden.estado = EstadoOrden::Completado;
        db.ordenes_compra().update(&orden).await.unwrap();
        assert_eq!(
            db.ordenes_compra().get_by_id(orden.id).await.unwrap(),
            Some(orden.clone())
        );

        let detalle = db
            .detalles_compra()
            .insert(&NuevoDetalleOrdenCompra {
                id_orden_compra: orden.id,
                id_producto: producto.id,
                cantidad: 1,
            })
            .await
            .unwrap();
        assert!(matches!(
            db.ordenes_compra().delete(orden.id).await,
            Err(DbError::ForeignKeyViolation { .. })
        ));

        db.detalles_compra().delete(detalle.id).await.unwrap();
        db.ordenes_compra().delete(orden.id).await.unwrap();
        assert!(!db.ordenes_compra().exists(orden.id).await.unwrap());
    }
}
