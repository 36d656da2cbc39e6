//! # OrdenCompra Service
//!
//! Purchase orders placed with a Proveedor.
//!
//! ## Create Checks (in order)
//! 1. every field present
//! 2. `id_proveedor` resolves
//! 3. `fecha_final >= fecha_inicio`
//!
//! `estado` needs no check here: [`EstadoOrden`](inventario_core::EstadoOrden)
//! only admits the three known values.

use inventario_core::validation::{validate_date_range, validate_patch_dates};
use inventario_core::{Entity, OrdenCompra, OrdenCompraInput, OrdenCompraPatch, ValidationError};
use inventario_db::Database;
use tracing::info;

use super::{ServiceError, ServiceResult};

async fn require_proveedor(db: &Database, id_proveedor: i64) -> ServiceResult<()> {
    if db.proveedores().exists(id_proveedor).await? {
        Ok(())
    } else {
        Err(ValidationError::missing(Entity::Proveedor, id_proveedor).into())
    }
}

/// Creates a purchase order.
pub async fn create(db: &Database, input: OrdenCompraInput) -> ServiceResult<OrdenCompra> {
    let nueva = input.require()?;
    require_proveedor(db, nueva.id_proveedor).await?;
    validate_date_range(nueva.fecha_inicio, nueva.fecha_final)?;

    let orden = db.ordenes_compra().insert(&nueva).await?;

    info!(id = orden.id, id_proveedor = orden.id_proveedor, "Orden de compra created");
    Ok(orden)
}

pub async fn get_all(db: &Database) -> ServiceResult<Vec<OrdenCompra>> {
    Ok(db.ordenes_compra().list().await?)
}

/// Applies a partial update.
///
/// A new `id_proveedor` must resolve. Dates are only compared when the
/// patch carries both of them.
pub async fn update(db: &Database, id: i64, patch: OrdenCompraPatch) -> ServiceResult<OrdenCompra> {
    let repo = db.ordenes_compra();
    let mut orden = repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(Entity::OrdenCompra, id))?;

    if let Some(id_proveedor) = patch.id_proveedor {
        require_proveedor(db, id_proveedor).await?;
    }
    validate_patch_dates(patch.fecha_inicio, patch.fecha_final)?;

    orden.apply(patch);
    repo.update(&orden).await?;

    info!(id, "Orden de compra updated");
    Ok(orden)
}

/// Deletes a purchase order. Fails while it still has line items.
pub async fn delete(db: &Database, id: i64) -> ServiceResult<()> {
    let repo = db.ordenes_compra();
    if !repo.exists(id).await? {
        return Err(ServiceError::not_found(Entity::OrdenCompra, id));
    }

    repo.delete(id).await?;

    info!(id, "Orden de compra deleted");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use inventario_core::EstadoOrden;

    use super::*;
    use crate::services::{fixtures, proveedor};

    fn date(s: &str) -> Option<NaiveDate> {
        s.parse().ok()
    }

    #[tokio::test]
    async fn test_create_scenario() {
        let db = fixtures::db().await;
        let proveedor = proveedor::create(&db, fixtures::contacto("Acme")).await.unwrap();
        assert_eq!(proveedor.id, 1);

        let orden = create(&db, fixtures::orden_compra_input(1)).await.unwrap();
        assert_eq!(orden.id, 1);
        assert_eq!(orden.estado, EstadoOrden::Pendiente);

        let mut backwards = fixtures::orden_compra_input(1);
        backwards.fecha_final = date("2023-12-31");
        let err = create(&db, backwards).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ValidationError::DateRange)));

        let err = create(&db, fixtures::orden_compra_input(999)).await.unwrap_err();
        assert_eq!(err.to_string(), "El proveedor especificado no existe.");

        assert_eq!(get_all(&db).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_same_day_order() {
        let db = fixtures::db().await;
        let proveedor = fixtures::proveedor(&db).await;

        let mut input = fixtures::orden_compra_input(proveedor.id);
        input.fecha_final = input.fecha_inicio;
        assert!(create(&db, input).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_missing_field() {
        let db = fixtures::db().await;
        let mut input = fixtures::orden_compra_input(1);
        input.estado = None;

        let err = create(&db, input).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::Required { .. })
        ));
    }

    #[tokio::test]
    async fn test_update_checks_new_proveedor() {
        let db = fixtures::db().await;
        let orden = fixtures::orden_compra(&db).await;

        let patch = OrdenCompraPatch {
            id_proveedor: Some(999),
            ..Default::default()
        };
        let err = update(&db, orden.id, patch).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::ReferenceNotFound { id: 999, .. })
        ));
        assert_eq!(get_all(&db).await.unwrap(), vec![orden]);
    }

    #[tokio::test]
    async fn test_update_dates() {
        let db = fixtures::db().await;
        let orden = fixtures::orden_compra(&db).await;

        let both_backwards = OrdenCompraPatch {
            fecha_inicio: date("2024-05-10"),
            fecha_final: date("2024-05-01"),
            ..Default::default()
        };
        assert!(matches!(
            update(&db, orden.id, both_backwards).await,
            Err(ServiceError::Validation(ValidationError::DateRange))
        ));

        // A lone fecha_final is not compared with the stored fecha_inicio.
        let lone = OrdenCompraPatch {
            fecha_final: date("2023-06-01"),
            estado: Some(EstadoOrden::Cancelado),
            ..Default::default()
        };
        let updated = update(&db, orden.id, lone).await.unwrap();
        assert_eq!(updated.fecha_final, NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());
        assert_eq!(updated.estado, EstadoOrden::Cancelado);
    }

    #[tokio::test]
    async fn test_update_is_idempotent() {
        let db = fixtures::db().await;
        let orden = fixtures::orden_compra(&db).await;
        let patch = OrdenCompraPatch {
            estado: Some(EstadoOrden::Completado),
            ..Default::default()
        };

        let once = update(&db, orden.id, patch.clone()).await.unwrap();
        let twice = update(&db, orden.id, patch).await.unwrap();
        assert_eq!(once, twice);
    }

    #[tokio::test]
    async fn test_delete() {
        let db = fixtures::db().await;
        let orden = fixtures::orden_compra(&db).await;

        delete(&db, orden.id).await.unwrap();
        let err = delete(&db, orden.id).await.unwrap_err();
        assert_eq!(err.to_string(), "Orden de compra no encontrada");
    }
}
