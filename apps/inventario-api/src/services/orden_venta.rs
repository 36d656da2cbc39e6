//! # OrdenVenta Service
//!
//! Sales orders placed by a Cliente. Mirrors the purchase side, with
//! `id_cliente` as the required reference.

use inventario_core::validation::{validate_date_range, validate_patch_dates};
use inventario_core::{Entity, OrdenVenta, OrdenVentaInput, OrdenVentaPatch, ValidationError};
use inventario_db::Database;
use tracing::info;

use super::{ServiceError, ServiceResult};

async fn require_cliente(db: &Database, id_cliente: i64) -> ServiceResult<()> {
    if db.clientes().exists(id_cliente).await? {
        Ok(())
    } else {
        Err(ValidationError::missing(Entity::Cliente, id_cliente).into())
    }
}

pub async fn create(db: &Database, input: OrdenVentaInput) -> ServiceResult<OrdenVenta> {
    let nueva = input.require()?;
    require_cliente(db, nueva.id_cliente).await?;
    validate_date_range(nueva.fecha_inicio, nueva.fecha_final)?;

    let orden = db.ordenes_venta().insert(&nueva).await?;

    info!(id = orden.id, id_cliente = orden.id_cliente, "Orden de venta created");
    Ok(orden)
}

pub async fn get_all(db: &Database) -> ServiceResult<Vec<OrdenVenta>> {
    Ok(db.ordenes_venta().list().await?)
}

pub async fn update(db: &Database, id: i64, patch: OrdenVentaPatch) -> ServiceResult<OrdenVenta> {
    let repo = db.ordenes_venta();
    let mut orden = repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(Entity::OrdenVenta, id))?;

    if let Some(id_cliente) = patch.id_cliente {
        require_cliente(db, id_cliente).await?;
    }
    validate_patch_dates(patch.fecha_inicio, patch.fecha_final)?;

    orden.apply(patch);
    repo.update(&orden).await?;

    info!(id, "Orden de venta updated");
    Ok(orden)
}

pub async fn delete(db: &Database, id: i64) -> ServiceResult<()> {
    let repo = db.ordenes_venta();
    if !repo.exists(id).await? {
        return Err(ServiceError::not_found(Entity::OrdenVenta, id));
    }

    repo.delete(id).await?;

    info!(id, "Orden de venta deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use inventario_core::EstadoOrden;

    use super::*;
    use crate::services::fixtures;

    #[tokio::test]
    async fn test_create_requires_existing_cliente() {
        let db = fixtures::db().await;

        let err = create(&db, fixtures::orden_venta_input(42)).await.unwrap_err();
        assert_eq!(err.to_string(), "El cliente especificado no existe.");
        assert!(get_all(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_backwards_dates() {
        let db = fixtures::db().await;
        let cliente = fixtures::cliente(&db).await;

        let mut input = fixtures::orden_venta_input(cliente.id);
        input.fecha_inicio = "2024-03-01".parse().ok();

        let err = create(&db, input).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ValidationError::DateRange)));
    }

    #[tokio::test]
    async fn test_update_moves_to_other_cliente() {
        let db = fixtures::db().await;
        let orden = fixtures::orden_venta(&db).await;
        let otro = crate::services::cliente::create(&db, fixtures::contacto("Beto"))
            .await
            .unwrap();

        let patch = OrdenVentaPatch {
            id_cliente: Some(otro.id),
            estado: Some(EstadoOrden::Pendiente),
            ..Default::default()
        };
        let updated = update(&db, orden.id, patch).await.unwrap();

        assert_eq!(updated.id_cliente, otro.id);
        assert_eq!(updated.fecha_inicio, orden.fecha_inicio);
        assert_eq!(get_all(&db).await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn test_not_found() {
        let db = fixtures::db().await;

        let err = update(&db, 3, OrdenVentaPatch::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "Orden de venta no encontrada");
        assert!(matches!(delete(&db, 3).await, Err(ServiceError::NotFound { .. })));
    }
}
