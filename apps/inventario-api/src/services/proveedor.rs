//! # Proveedor Service
//!
//! Suppliers. Same rules as Clientes.

use inventario_core::{ContactoInput, ContactoPatch, Entity, Proveedor};
use inventario_db::Database;
use tracing::info;

use super::{ServiceError, ServiceResult};

pub async fn create(db: &Database, input: ContactoInput) -> ServiceResult<Proveedor> {
    let nuevo = input.require()?;
    let proveedor = db.proveedores().insert(&nuevo).await?;

    info!(id = proveedor.id, "Proveedor created");
    Ok(proveedor)
}

pub async fn get_all(db: &Database) -> ServiceResult<Vec<Proveedor>> {
    Ok(db.proveedores().list().await?)
}

pub async fn update(db: &Database, id: i64, patch: ContactoPatch) -> ServiceResult<Proveedor> {
    let repo = db.proveedores();
    let mut proveedor = repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(Entity::Proveedor, id))?;

    proveedor.apply(patch);
    repo.update(&proveedor).await?;

    info!(id, "Proveedor updated");
    Ok(proveedor)
}

/// Deletes a Proveedor. Fails while purchase orders still reference it.
pub async fn delete(db: &Database, id: i64) -> ServiceResult<()> {
    let repo = db.proveedores();
    if !repo.exists(id).await? {
        return Err(ServiceError::not_found(Entity::Proveedor, id));
    }

    repo.delete(id).await?;

    info!(id, "Proveedor deleted");
    Ok(())
}
