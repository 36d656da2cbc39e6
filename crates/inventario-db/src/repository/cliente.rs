//! # Cliente Repository
//!
//! Database operations for the `clientes` table.
//!
//! A Cliente is referenced by `ordenes_venta.id_cliente`; deleting one that
//! still has orders fails with [`DbError::ForeignKeyViolation`].

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::{execute_in_transaction, row_exists};
use inventario_core::{Cliente, NuevoContacto};

const TABLE: &str = "clientes";

/// Repository for Cliente database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ClienteRepository::new(pool);
/// let cliente = repo.insert(&nuevo).await?;
/// let all = repo.list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ClienteRepository {
    pool: SqlitePool,
}

impl ClienteRepository {
    /// Creates a new ClienteRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ClienteRepository { pool }
    }

    /// Lists every Cliente in insertion order.
    pub async fn list(&self) -> DbResult<Vec<Cliente>> {
        let clientes = sqlx::query_as::<_, Cliente>(
            r#"
            SELECT id, nombre, contacto, telefono, direccion
            FROM clientes
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = clientes.len(), "Listed clientes");
        Ok(clientes)
    }

    /// Gets a Cliente by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Cliente))` - Cliente found
    /// * `Ok(None)` - Cliente not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Cliente>> {
        let cliente = sqlx::query_as::<_, Cliente>(
            r#"
            SELECT id, nombre, contacto, telefono, direccion
            FROM clientes
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(cliente)
    }

    /// Returns whether a Cliente with this ID exists.
    pub async fn exists(&self, id: i64) -> DbResult<bool> {
        row_exists(&self.pool, TABLE, id).await
    }

    /// Inserts a new Cliente and returns it with its assigned ID.
    pub async fn insert(&self, nuevo: &NuevoContacto) -> DbResult<Cliente> {
        let result = execute_in_transaction(
            &self.pool,
            sqlx::query(
                r#"
                INSERT INTO clientes (nombre, contacto, telefono, direccion)
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
        debug!(id, "Inserted cliente");

        Ok(Cliente {
            id,
            nombre: nuevo.nombre.clone(),
            contacto: nuevo.contacto.clone(),
            telefono: nuevo.telefono.clone(),
            direccion: nuevo.direccion.clone(),
        })
    }

    /// Writes every field of `cliente` to its row.
    pub async fn update(&self, cliente: &Cliente) -> DbResult<()> {
        let result = execute_in_transaction(
            &self.pool,
            sqlx::query(
                r#"
                UPDATE clientes SET
                    nombre = ?2,
                    contacto = ?3,
                    telefono = ?4,
                    direccion = ?5
                WHERE id = ?1
                "#,
            )
            .bind(cliente.id)
            .bind(&cliente.nombre)
            .bind(&cliente.contacto)
            .bind(&cliente.telefono)
            .bind(&cliente.direccion),
        )
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(TABLE, cliente.id));
        }

        Ok(())
    }

    /// Deletes a Cliente.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - no row with this ID
    /// * `DbError::ForeignKeyViolation` - the Cliente still has orders
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        let result = execute_in_transaction(
            &self.pool,
            sqlx::query("DELETE FROM clientes WHERE id = ?1").bind(id),
        )
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(TABLE, id));
        }

        debug!(id, "Deleted cliente");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
