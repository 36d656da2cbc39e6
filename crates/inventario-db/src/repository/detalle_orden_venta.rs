//! # DetalleOrdenVenta Repository
//!
//! Line items of sales orders (`detalle_orden_venta`). Same shape as the
//! purchase side, keyed by `id_orden_venta`.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::execute_in_transaction;
use inventario_core::{DetalleOrdenVenta, NuevoDetalleOrdenVenta};

const TABLE: &str = "detalle_orden_venta";

/// Repository for DetalleOrdenVenta database operations.
#[derive(Debug, Clone)]
pub struct DetalleOrdenVentaRepository {
    pool: SqlitePool,
}

impl DetalleOrdenVentaRepository {
    pub fn new(pool: SqlitePool) -> Self {
        DetalleOrdenVentaRepository { pool }
    }

    pub async fn list(&self) -> DbResult<Vec<DetalleOrdenVenta>> {
        let detalles = sqlx::query_as::<_, DetalleOrdenVenta>(
            r#"
            SELECT id, id_orden_venta, id_producto, cantidad
            FROM detalle_orden_venta
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(detalles)
    }

    /// Lists the line items of one sales order.
    pub async fn list_by_order(&self, id_orden_venta: i64) -> DbResult<Vec<DetalleOrdenVenta>> {
        let detalles = sqlx::query_as::<_, DetalleOrdenVenta>(
            r#"
            SELECT id, id_orden_venta, id_producto, cantidad
            FROM detalle_orden_venta
            WHERE id_orden_venta = ?1
            ORDER BY id
            "#,
        )
        .bind(id_orden_venta)
        .fetch_all(&self.pool)
        .await?;

        debug!(id_orden_venta, count = detalles.len(), "Listed detalles de venta");
        Ok(detalles)
    }

    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<DetalleOrdenVenta>> {
        let detalle = sqlx::query_as::<_, DetalleOrdenVenta>(
            r#"
            SELECT id, id_orden_venta, id_producto, cantidad
            FROM detalle_orden_venta
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(detalle)
    }

    pub async fn insert(&self, nuevo: &NuevoDetalleOrdenVenta) -> DbResult<DetalleOrdenVenta> {
        let result = execute_in_transaction(
            &self.pool,
            sqlx::query(
                r#"
                INSERT INTO detalle_orden_venta (id_orden_venta, id_producto, cantidad)
                VALUES (?1, ?2, ?3)
                "#,
            )
            .bind(nuevo.id_orden_venta)
            .bind(nuevo.id_producto)
            .bind(nuevo.cantidad),
        )
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, id_orden_venta = nuevo.id_orden_venta, "Inserted detalle de venta");

        Ok(DetalleOrdenVenta {
            id,
            id_orden_venta: nuevo.id_orden_venta,
            id_producto: nuevo.id_producto,
            cantidad: nuevo.cantidad,
        })
    }

    pub async fn update(&self, detalle: &DetalleOrdenVenta) -> DbResult<()> {
        let result = execute_in_transaction(
            &self.pool,
            sqlx::query(
                r#"
                UPDATE detalle_orden_venta SET
                    id_orden_venta = ?2,
                    id_producto = ?3,
                    cantidad = ?4
                WHERE id = ?1
                "#,
            )
            .bind(detalle.id)
            .bind(detalle.id_orden_venta)
            .bind(detalle.id_producto)
            .bind(detalle.cantidad),
        )
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(TABLE, detalle.id));
        }

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> DbResult<()> {
        let result = execute_in_transaction(
            &self.pool,
            sqlx::query("DELETE FROM detalle_orden_venta WHERE id = ?1").bind(id),
        )
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(TABLE, id));
        }

        debug!(id, "Deleted detalle de venta");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::fixtures;

    use super::*;

    #[tokio::test]
    async fn test_crud() {
        let db = fixtures::db().await;
        let cliente = db.clientes().insert(&fixtures::contacto("Ana")).await.unwrap();
        let orden = db
            .ordenes_venta()
            .insert(&fixtures::orden_venta(cliente.id))
            .await
            .unwrap();
        let producto = db.productos().insert(&fixtures::producto("Widget")).await.unwrap();
        let repo = db.detalles_venta();

        let mut detalle = repo
            .insert(&NuevoDetalleOrdenVenta {
                id_orden_venta: orden.id,
                id_producto: producto.id,
                cantidad: 2,
            })
            .await
            .unwrap();
        assert_eq!(repo.list_by_order(orden.id).await.unwrap(), vec![detalle.clone()]);

        detalle.cantidad = 5;
        repo.update(&detalle).await.unwrap();
        assert_eq!(repo.get_by_id(detalle.id).await.unwrap(), Some(detalle.clone()));

        repo.delete(detalle.id).await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
        assert!(matches!(
            repo.delete(detalle.id).await,
            Err(DbError::NotFound { .. })
        ));
    }
}
