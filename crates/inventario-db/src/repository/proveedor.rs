//! # Proveedor Repository
//!
//! Database operations for the `proveedores` table.
//!
//! A Proveedor is referenced by `ordenes_compra.id_proveedor`; deleting one that
//! still has orders fails with [`DbError::ForeignKeyViolation`].

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::{execute_in_transaction, row_exists};
use inventario_core::{NuevoContacto, Proveedor};

const TABLE: &str = "proveedores";

/// Repository for Proveedor database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProveedorRepository::new(pool);
/// let proveedor = repo.insert(&nuevo).await?;
/// let all = repo.list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProveedorRepository {
    pool: SqlitePool,
}

impl ProveedorRepository {
    /// Creates a new ProveedorRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProveedorRepository { pool }
    }

    /// Lists every Proveedor in insertion order.
    pub async fn list(&self) -> DbResult<Vec<Proveedor>> {
        let proveedores = sqlx::query_as::<_, Proveedor>(
            r#"
            SELECT id, nombre, contacto, telefono, direccion
            FROM proveedores
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = proveedores.len(), "Listed proveedores");
        Ok(proveedores)
    }

    /// Gets a Proveedor by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Proveedor))` - Proveedor found
    /// * `Ok(None)` - Proveedor not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Proveedor>> {
        let proveedor = sqlx::query_as::<_, Proveedor>(
            r#"
            SELECT id, nombre, contacto, telefono, direccion
            FROM proveedores
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(proveedor)
    }

    /// Returns whether a Proveedor with this ID exists.
    pub async fn exists(&self, id: i64) -> DbResult<bool> {
        row_exists(&self.pool, TABLE, id).await
    }

    /// Inserts a new Proveedor and returns it with its assigned ID.
    pub async fn insert(&self, nuevo: &NuevoContacto) -> DbResult<Proveedor> {
        let result = execute_in_transaction(
            &self.pool,
            sqlx::query(
                r#"
                INSERT INTO proveedores (nombre, contacto, telefono, direccion)
                VALUES (?1, ?2, ?3, ?4)
                "#,
            )
            .bind(&nuevo.nombre)
            .bind(&nuevo.contacto)
            .bind(&nuevo.telefono)
            .bind(&nuevo.direccion),
        )
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, "Inserted proveedor");

        Ok(Proveedor {
            id,
            nombre: nuevo.nombre.clone(),
            contacto: nuevo.contacto.clone(),
            telefono: nuevo.telefono.clone(),
            direccion: nuevo.direccion.clone(),
        })
    }

    /// Writes every field of `proveedor` to its row.
    pub async fn update(&self, proveedor: &Proveedor) -> DbResult<()> {
        let result = execute_in_transaction(
            &self.pool,
            sqlx::query(
                r#"
                UPDATE proveedores SET
                    nombre = ?2,
                    contacto = ?3,
                    telefono = ?4,
                    direccion = ?5
                WHERE id = ?1
                "#,
            )
            .bind(proveedor.id)
            .bind(&proveedor.nombre)
            .bind(&proveedor.contacto)
            .bind(&proveedor.telefono)
            .bind(&proveedor.direccion),
        )
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(TABLE, proveedor.id));
        }

        Ok(())
    }

    /// Deletes a Proveedor.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - no row with this ID
    /// * `DbError::ForeignKeyViolation` - the Proveedor still has purchase orders
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        let result = execute_in_transaction(
            &self.pool,
            sqlx::query("DELETE FROM proveedores WHERE id = ?1").bind(id),
        )
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(TABLE, id));
        }

        debug!(id, "Deleted proveedor");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
