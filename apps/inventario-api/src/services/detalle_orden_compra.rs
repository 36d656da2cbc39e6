//! # DetalleOrdenCompra Service
//!
//! Line items of purchase orders.
//!
//! ## Reference Checks
//! ```text
//! create:  id_orden_compra must resolve, then id_producto must resolve
//! update:  whichever of the two the patch carries must resolve;
//!          a missing producto is a not-found, a missing orden a validation error
//! ```
//!
//! `cantidad` is stored as given and never moves product stock.

use inventario_core::{
    DetalleOrdenCompra, DetalleOrdenCompraPatch, Entity, NuevoDetalleOrdenCompra, ValidationError,
};
use inventario_db::Database;
use tracing::info;

use super::{ServiceError, ServiceResult};

async fn require_orden(db: &Database, id_orden_compra: i64) -> ServiceResult<()> {
    if db.ordenes_compra().exists(id_orden_compra).await? {
        Ok(())
    } else {
        Err(ValidationError::missing(Entity::OrdenCompra, id_orden_compra).into())
    }
}

async fn require_producto(db: &Database, id_producto: i64) -> ServiceResult<()> {
    if db.productos().exists(id_producto).await? {
        Ok(())
    } else {
        Err(ValidationError::missing(Entity::Producto, id_producto).into())
    }
}

/// Adds a line item to a purchase order.
pub async fn create(
    db: &Database,
    nuevo: NuevoDetalleOrdenCompra,
) -> ServiceResult<DetalleOrdenCompra> {
    require_orden(db, nuevo.id_orden_compra).await?;
    require_producto(db, nuevo.id_producto).await?;

    let detalle = db.detalles_compra().insert(&nuevo).await?;

    info!(
        id = detalle.id,
        id_orden_compra = detalle.id_orden_compra,
        "Detalle de orden de compra created"
    );
    Ok(detalle)
}

/// Line items of one purchase order. Unknown orders yield an empty list.
pub async fn get_by_order(
    db: &Database,
    id_orden_compra: i64,
) -> ServiceResult<Vec<DetalleOrdenCompra>> {
    Ok(db.detalles_compra().list_by_order(id_orden_compra).await?)
}

pub async fn get_all(db: &Database) -> ServiceResult<Vec<DetalleOrdenCompra>> {
    Ok(db.detalles_compra().list().await?)
}

/// Applies a partial update after checking the references it changes.
pub async fn update(
    db: &Database,
    id: i64,
    patch: DetalleOrdenCompraPatch,
) -> ServiceResult<DetalleOrdenCompra> {
    let repo = db.detalles_compra();
    let mut detalle = repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(Entity::DetalleOrdenCompra, id))?;

    if let Some(id_orden_compra) = patch.id_orden_compra {
        require_orden(db, id_orden_compra).await?;
    }
    if let Some(id_producto) = patch.id_producto {
        if !db.productos().exists(id_producto).await? {
            return Err(ServiceError::missing_reference(Entity::Producto, id_producto));
        }
    }

    detalle.apply(patch);
    repo.update(&detalle).await?;

    info!(id, "Detalle de orden de compra updated");
    Ok(detalle)
}

pub async fn delete(db: &Database, id: i64) -> ServiceResult<()> {
    let repo = db.detalles_compra();
    if repo.get_by_id(id).await?.is_none() {
        return Err(ServiceError::not_found(Entity::DetalleOrdenCompra, id));
    }

    repo.delete(id).await?;

    info!(id, "Detalle de orden de compra deleted");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use inventario_core::{Money, NuevoProducto};

    use super::*;
    use crate::services::{fixtures, producto};

    fn nuevo(id_orden_compra: i64, id_producto: i64, cantidad: i64) -> NuevoDetalleOrdenCompra {
        NuevoDetalleOrdenCompra {
            id_orden_compra,
            id_producto,
            cantidad,
        }
    }

    #[tokio::test]
    async fn test_create_scenario() {
        let db = fixtures::db().await;
        let orden = fixtures::orden_compra(&db).await;
        let widget = producto::create(
            &db,
            NuevoProducto {
                nombre: Some("Widget".to_string()),
                costo: Some(Money::from_cents(150)),
                precio_venta: Some(Money::from_cents(200)),
                cantidad: Some(10),
            },
        )
        .await
        .unwrap();
        assert_eq!(widget.id, 1);

        let detalle = create(&db, nuevo(orden.id, 1, 5)).await.unwrap();
        assert_eq!(detalle.cantidad, 5);

        let err = create(&db, nuevo(999, 1, 5)).await.unwrap_err();
        assert_eq!(err.to_string(), "La orden de compra especificada no existe.");

        let err = create(&db, nuevo(orden.id, 999, 5)).await.unwrap_err();
        assert_eq!(err.to_string(), "El producto especificado no existe.");

        assert_eq!(get_all(&db).await.unwrap(), vec![detalle]);
        let stock = producto::get_all(&db).await.unwrap()[0].cantidad;
        assert_eq!(stock, Some(10));
    }

    #[tokio::test]
    async fn test_get_by_order() {
        let db = fixtures::db().await;
        let a = fixtures::orden_compra(&db).await;
        let b = fixtures::orden_compra(&db).await;
        let p = fixtures::producto(&db).await;

        create(&db, nuevo(a.id, p.id, 1)).await.unwrap();
        create(&db, nuevo(b.id, p.id, 2)).await.unwrap();

        let detalles = get_by_order(&db, b.id).await.unwrap();
        assert_eq!(detalles.len(), 1);
        assert_eq!(detalles[0].cantidad, 2);
        assert!(get_by_order(&db, 999).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_rechecks_references() {
        let db = fixtures::db().await;
        let orden = fixtures::orden_compra(&db).await;
        let p = fixtures::producto(&db).await;
        let detalle = create(&db, nuevo(orden.id, p.id, 1)).await.unwrap();

        let patch = DetalleOrdenCompraPatch {
            id_producto: Some(999),
            cantidad: Some(4),
            ..Default::default()
        };
        let err = update(&db, detalle.id, patch).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::MissingReference {
                entity: Entity::Producto,
                id: 999
            }
        ));
        assert_eq!(err.to_string(), "El producto especificado no existe.");

        let patch = DetalleOrdenCompraPatch {
            id_orden_compra: Some(999),
            ..Default::default()
        };
        assert!(update(&db, detalle.id, patch).await.is_err());

        let patch = DetalleOrdenCompraPatch {
            cantidad: Some(4),
            ..Default::default()
        };
        let updated = update(&db, detalle.id, patch).await.unwrap();
        assert_eq!(updated.cantidad, 4);
        assert_eq!(updated.id_producto, p.id);
    }

    #[tokio::test]
    async fn test_missing_detalle() {
        let db = fixtures::db().await;

        let err = update(&db, 8, DetalleOrdenCompraPatch::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "El detalle de orden de compra no existe.");
        assert!(matches!(delete(&db, 8).await, Err(ServiceError::NotFound { .. })));
    }
}
