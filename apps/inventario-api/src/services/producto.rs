//! # Producto Service
//!
//! Products are created exactly as sent: no field is required, so a
//! Producto with every attribute null is valid. Stock (`cantidad`) is
//! never adjusted by order line items.

use inventario_core::{Entity, NuevoProducto, Producto, ProductoPatch};
use inventario_db::Database;
use tracing::info;

use super::{ServiceError, ServiceResult};

/// Creates a Producto without validation.
pub async fn create(db: &Database, nuevo: NuevoProducto) -> ServiceResult<Producto> {
    let producto = db.productos().insert(&nuevo).await?;

    info!(id = producto.id, "Producto created");
    Ok(producto)
}

pub async fn get_all(db: &Database) -> ServiceResult<Vec<Producto>> {
    Ok(db.productos().list().await?)
}

/// Merges `patch` into the stored Producto.
pub async fn update(db: &Database, id: i64, patch: ProductoPatch) -> ServiceResult<Producto> {
    let repo = db.productos();
    let mut producto = repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(Entity::Producto, id))?;

    producto.apply(patch);
    repo.update(&producto).await?;

    info!(id, "Producto updated");
    Ok(producto)
}

/// Deletes a Producto. Fails while any line item references it.
pub async fn delete(db: &Database, id: i64) -> ServiceResult<()> {
    let repo = db.productos();
    if !repo.exists(id).await? {
        return Err(ServiceError::not_found(Entity::Producto, id));
    }

    repo.delete(id).await?;

    info!(id, "Producto deleted");
    Ok(())
}
