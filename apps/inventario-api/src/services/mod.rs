//! # Service Layer
//!
//! One module per entity. Every operation takes the storage handle
//! explicitly and returns a [`ServiceResult`].
//!
//! ## Operation Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  create(db, input)                                                      │
//! │    1. required fields     → ValidationError::Required                   │
//! │    2. foreign keys exist  → ValidationError::ReferenceNotFound          │
//! │    3. date order          → ValidationError::DateRange                  │
//! │    4. insert (one transaction)                                          │
//! │                                                                         │
//! │  update(db, id, patch)                                                  │
//! │    1. load row            → ServiceError::NotFound                      │
//! │    2. checks on the fields the patch carries                            │
//! │       (detalle → producto missing: ServiceError::MissingReference)     │
//! │    3. merge patch, write the row (one transaction)                      │
//! │                                                                         │
//! │  delete(db, id)                                                         │
//! │    1. load row            → ServiceError::NotFound                      │
//! │    2. delete              → DbError::ForeignKeyViolation if referenced  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is written when a step fails. Reads and the write are not one
//! atomic unit: a referenced row deleted in between is caught by the
//! foreign key constraint instead.

use inventario_core::{Entity, ValidationError};
use inventario_db::DbError;
use thiserror::Error;

pub mod cliente;
pub mod detalle_orden_compra;
pub mod detalle_orden_venta;
pub mod orden_compra;
pub mod orden_venta;
pub mod producto;
pub mod proveedor;

/// Errors returned by service operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input failed a precondition. Nothing was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The addressed entity does not exist.
    #[error("{}", .entity.not_found())]
    NotFound { entity: Entity, id: i64 },

    /// An update points an existing row at a row that does not exist.
    #[error("{}", .entity.missing_reference())]
    MissingReference { entity: Entity, id: i64 },

    /// The store failed or rejected the write.
    #[error(transparent)]
    Storage(#[from] DbError),
}

impl ServiceError {
    pub fn not_found(entity: Entity, id: i64) -> Self {
        ServiceError::NotFound { entity, id }
    }

    pub fn missing_reference(entity: Entity, id: i64) -> Self {
        ServiceError::MissingReference { entity, id }
    }
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

// =============================================================================
// Test Fixtures
// =============================================================================
