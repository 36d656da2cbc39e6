//! # OrdenVenta Repository
//!
//! Database operations for the `ordenes_venta` table.
//!
//! ```text
//! clientes ◄──── ordenes_venta ◄──── detalle_orden_venta
//!   (id)         (id_cliente)          (id_orden_venta)
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::{execute_in_transaction, row_exists};
use inventario_core::{NuevaOrdenVenta, OrdenVenta};

const TABLE: &str = "ordenes_venta";

/// Repository for OrdenVenta database operations.
#[derive(Debug, Clone)]
pub struct OrdenVentaRepository {
    pool: SqlitePool,
}

impl OrdenVentaRepository {
    pub fn new(pool: SqlitePool) -> Self {
        OrdenVentaRepository { pool }
    }

    /// Lists every OrdenVenta in insertion order.
    pub async fn list(&self) -> DbResult<Vec<OrdenVenta>> {
        let ordenes = sqlx::query_as::<_, OrdenVenta>(
            r#"
            SELECT id, fecha_inicio, fecha_final, estado, id_cliente
            FROM ordenes_venta
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = ordenes.len(), "Listed ordenes de venta");
        Ok(ordenes)
    }

    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<OrdenVenta>> {
        let orden = sqlx::query_as::<_, OrdenVenta>(
            r#"
            SELECT id, fecha_inicio, fecha_final, estado, id_cliente
            FROM ordenes_venta
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(orden)
    }

    pub async fn exists(&self, id: i64) -> DbResult<bool> {
        row_exists(&self.pool, TABLE, id).await
    }

    /// Inserts a validated OrdenVenta.
    pub async fn insert(&self, nueva: &NuevaOrdenVenta) -> DbResult<OrdenVenta> {
        let result = execute_in_transaction(
            &self.pool,
            sqlx::query(
                r#"
                INSERT INTO ordenes_venta (fecha_inicio, fecha_final, estado, id_cliente)
                VALUES (?1, ?2, ?3, ?4)
                "#,
            )
            .bind(nueva.fecha_inicio)
            .bind(nueva.fecha_final)
            .bind(nueva.estado)
            .bind(nueva.id_cliente),
        )
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, id_cliente = nueva.id_cliente, "Inserted orden de venta");

        Ok(OrdenVenta {
            id,
            fecha_inicio: nueva.fecha_inicio,
            fecha_final: nueva.fecha_final,
            estado: nueva.estado,
            id_cliente: nueva.id_cliente,
        })
    }

    pub async fn update(&self, orden: &OrdenVenta) -> DbResult<()> {
        let result = execute_in_transaction(
            &self.pool,
            sqlx::query(
                r#"
                UPDATE ordenes_venta SET
                    fecha_inicio = ?2,
                    fecha_final = ?3,
                    estado = ?4,
                    id_cliente = ?5
                WHERE id = ?1
                "#,
            )
            .bind(orden.id)
            .bind(orden.fecha_inicio)
            .bind(orden.fecha_final)
            .bind(orden.estado)
            .bind(orden.id_cliente),
        )
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(TABLE, orden.id));
        }

        Ok(())
    }

    /// Deletes an OrdenVenta. Restricted while line items reference it.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        let result = execute_in_transaction(
            &self.pool,
            sqlx::query("DELETE FROM ordenes_venta WHERE id = ?1").bind(id),
        )
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(TABLE, id));
        }

        debug!(id, "Deleted orden de venta");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use inventario_core::EstadoOrden;

    use crate::repository::fixtures;

    use super::*;

    #[tokio::test]
    async fn test_crud() {
        let db = fixtures::db().await;
        let cliente = db.clientes().insert(&fixtures::contacto("Ana")).await.unwrap();
        let repo = db.ordenes_venta();

        let mut orden = repo.insert(&fixtures::orden_venta(cliente.id)).await.unwrap();
        assert_eq!(repo.list().await.unwrap(), vec![orden.clone()]);

        orden.estado = EstadoOrden::Cancelado;
        orden.fecha_final = fixtures::date(2024, 3, 1);
        repo.update(&orden).await.unwrap();
        assert_eq!(repo.get_by_id(orden.id).await.unwrap(), Some(orden.clone()));

        repo.delete(orden.id).await.unwrap();
        assert_eq!(repo.get_by_id(orden.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_schema_rejects_unknown_estado() {
        let db = fixtures::db().await;
        let cliente = db.clientes().insert(&fixtures::contacto("Ana")).await.unwrap();

        let result = sqlx::query(
            "INSERT INTO ordenes_venta (fecha_inicio, fecha_final, estado, id_cliente) \
             VALUES ('2024-01-01', '2024-01-02', 'enviado', ?1)",
        )
        .bind(cliente.id)
        .execute(db.pool())
        .await;

        assert!(matches!(
            result.map_err(DbError::from),
            Err(DbError::QueryFailed(_))
        ));
    }
}
