//! # Cliente Service
//!
//! Customers. All four text fields are required on create; updates merge
//! whatever the patch carries without re-checking presence.

use inventario_core::{Cliente, ContactoInput, ContactoPatch, Entity};
use inventario_db::Database;
use tracing::info;

use super::{ServiceError, ServiceResult};

/// Creates a Cliente after checking that every field is present.
pub async fn create(db: &Database, input: ContactoInput) -> ServiceResult<Cliente> {
    let nuevo = input.require()?;
    let cliente = db.clientes().insert(&nuevo).await?;

    info!(id = cliente.id, "Cliente created");
    Ok(cliente)
}

/// Returns every Cliente in insertion order.
pub async fn get_all(db: &Database) -> ServiceResult<Vec<Cliente>> {
    Ok(db.clientes().list().await?)
}

/// Merges `patch` into the stored Cliente.
pub async fn update(db: &Database, id: i64, patch: ContactoPatch) -> ServiceResult<Cliente> {
    let repo = db.clientes();
    let mut cliente = repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(Entity::Cliente, id))?;

    cliente.apply(patch);
    repo.update(&cliente).await?;

    info!(id, "Cliente updated");
    Ok(cliente)
}

/// Deletes a Cliente. Fails while sales orders still reference it.
pub async fn delete(db: &Database, id: i64) -> ServiceResult<()> {
    let repo = db.clientes();
    if !repo.exists(id).await? {
        return Err(ServiceError::not_found(Entity::Cliente, id));
    }

    repo.delete(id).await?;

    info!(id, "Cliente deleted");
    Ok(())
}
