//! # Error Types
//!
//! Domain-specific error types for inventario-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  inventario-core errors (this file)                                    │
//! │  └── ValidationError  - Input fails a precondition                     │
//! │                                                                         │
//! │  inventario-db errors (separate crate)                                 │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  inventario-api errors (in app)                                        │
//! │  ├── ServiceError     - Validation | NotFound | Storage                │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → ServiceError → ApiError → 400 response        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Messages are the exact Spanish texts clients of the inventory API
//! already parse, so they are part of the wire contract.

use thiserror::Error;

use crate::types::Entity;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any write. Never retried and never recovered internally:
/// the boundary layer turns every variant into a 400-equivalent response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required fields are missing or empty.
    #[error("Todos los campos son obligatorios. Faltan: {}", .fields.join(", "))]
    Required { fields: Vec<&'static str> },

    /// A foreign key points at a row that does not exist.
    ///
    /// ## When This Occurs
    /// - OrdenCompra with an unknown `id_proveedor`
    /// - OrdenVenta with an unknown `id_cliente`
    /// - Detalle with an unknown order or product
    #[error("{}", .entity.missing_reference())]
    ReferenceNotFound { entity: Entity, id: i64 },

    /// `fecha_final` is earlier than `fecha_inicio`.
    #[error("La fecha final no puede ser anterior a la fecha de inicio.")]
    DateRange,

    /// Invalid format (e.g., a decimal amount that cannot be parsed).
    #[error("{field} tiene un formato inválido: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates a ReferenceNotFound error.
    pub fn missing(entity: Entity, id: i64) -> Self {
        ValidationError::ReferenceNotFound { entity, id }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
