//! # DetalleOrdenVenta Service
//!
//! Line items of sales orders. Same reference checks as the purchase side:
//! an update that changes `id_producto` or `id_orden_venta` re-checks it.

use inventario_core::{
    DetalleOrdenVenta, DetalleOrdenVentaPatch, Entity, NuevoDetalleOrdenVenta, ValidationError,
};
use inventario_db::Database;
use tracing::info;

use super::{ServiceError, ServiceResult};

async fn require_orden(db: &Database, id_orden_venta: i64) -> ServiceResult<()> {
    if db.ordenes_venta().exists(id_orden_venta).await? {
        Ok(())
    } else {
        Err(ValidationError::missing(Entity::OrdenVenta, id_orden_venta).into())
    }
}

async fn require_producto(db: &Database, id_producto: i64) -> ServiceResult<()> {
    if db.productos().exists(id_producto).await? {
        Ok(())
    } else {
        Err(ValidationError::missing(Entity::Producto, id_producto).into())
    }
}

pub async fn create(db: &Database, nuevo: NuevoDetalleOrdenVenta) -> ServiceResult<DetalleOrdenVenta> {
    require_orden(db, nuevo.id_orden_venta).await?;
    require_producto(db, nuevo.id_producto).await?;

    let detalle = db.detalles_venta().insert(&nuevo).await?;

    info!(
        id = detalle.id,
        id_orden_venta = detalle.id_orden_venta,
        "Detalle de orden de venta created"
    );
    Ok(detalle)
}

pub async fn get_by_order(db: &Database, id_orden_venta: i64) -> ServiceResult<Vec<DetalleOrdenVenta>> {
    Ok(db.detalles_venta().list_by_order(id_orden_venta).await?)
}

pub async fn get_all(db: &Database) -> ServiceResult<Vec<DetalleOrdenVenta>> {
    Ok(db.detalles_venta().list().await?)
}

pub async fn update(
    db: &Database,
    id: i64,
    patch: DetalleOrdenVentaPatch,
) -> ServiceResult<DetalleOrdenVenta> {
    let repo = db.detalles_venta();
    let mut detalle = repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(Entity::DetalleOrdenVenta, id))?;

    if let Some(id_orden_venta) = patch.id_orden_venta {
        require_orden(db, id_orden_venta).await?;
    }
    if let Some(id_producto) = patch.id_producto {
        if !db.productos().exists(id_producto).await? {
            return Err(ServiceError::missing_reference(Entity::Producto, id_producto));
        }
    }

    detalle.apply(patch);
    repo.update(&detalle).await?;

    info!(id, "Detalle de orden de venta updated");
    Ok(detalle)
}

pub async fn delete(db: &Database, id: i64) -> ServiceResult<()> {
    let repo = db.detalles_venta();
    if repo.get_by_id(id).await?.is_none() {
        return Err(ServiceError::not_found(Entity::DetalleOrdenVenta, id));
    }

    repo.delete(id).await?;

    info!(id, "Detalle de orden de venta deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fixtures;

    #[tokio::test]
    async fn test_create_checks_order_then_producto() {
        let db = fixtures::db().await;
        let orden = fixtures::orden_venta(&db).await;

        // Both missing: the order is reported first.
        let err = create(
            &db,
            NuevoDetalleOrdenVenta {
                id_orden_venta: 999,
                id_producto: 999,
                cantidad: 1,
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "La orden de venta especificada no existe.");

        let err = create(
            &db,
            NuevoDetalleOrdenVenta {
                id_orden_venta: orden.id,
                id_producto: 999,
                cantidad: 1,
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "El producto especificado no existe.");
        assert!(get_all(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_with_unknown_producto_is_not_found() {
        let db = fixtures::db().await;
        let orden = fixtures::orden_venta(&db).await;
        let producto = fixtures::producto(&db).await;
        let detalle = create(
            &db,
            NuevoDetalleOrdenVenta {
                id_orden_venta: orden.id,
                id_producto: producto.id,
                cantidad: 2,
            },
        )
        .await
        .unwrap();

        let patch = DetalleOrdenVentaPatch {
            id_producto: Some(999),
            ..Default::default()
        };
        let err = update(&db, detalle.id, patch).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::MissingReference {
                entity: Entity::Producto,
                ..
            }
        ));
        assert_eq!(err.to_string(), "El producto especificado no existe.");
        assert_eq!(get_by_order(&db, orden.id).await.unwrap(), vec![detalle.clone()]);

        delete(&db, detalle.id).await.unwrap();
        let err = delete(&db, detalle.id).await.unwrap_err();
        assert_eq!(err.to_string(), "El detalle de orden de venta no existe.");
    }
}
