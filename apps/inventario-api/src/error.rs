//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Inventario                             │
//! │                                                                         │
//! │  Handler → Result<T, ApiError>                                         │
//! │                                                                         │
//! │  JSON decoding failed ─────────────────────────► VALIDATION_ERROR 400  │
//! │  ServiceError::Validation ─────────────────────► VALIDATION_ERROR 400  │
//! │  ServiceError::NotFound ───────────────────────► NOT_FOUND        404  │
//! │  ServiceError::MissingReference ───────────────► NOT_FOUND        404  │
//! │  ServiceError::Storage(DbError)                                        │
//! │     ├── ForeignKeyViolation ───────────────────► CONFLICT         409  │
//! │     ├── ConnectionFailed / PoolExhausted ──────► UNAVAILABLE      503  │
//! │     └── anything else (logged, generic text) ──► DATABASE_ERROR   500  │
//! │                                                                         │
//! │  Body: { "code": "NOT_FOUND", "message": "Cliente no encontrado" }     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use inventario_db::DbError;
use serde::Serialize;

use crate::services::ServiceError;

/// Error returned from HTTP handlers.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "La fecha final no puede ser anterior a la fecha de inicio."
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Row still referenced by other rows (409)
    Conflict,

    /// Database operation failed (500)
    DatabaseError,

    /// Internal server error (500)
    Internal,

    /// Database unreachable or saturated (503)
    Unavailable,
}

impl ErrorCode {
    /// HTTP status for this code.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::Conflict => StatusCode::CONFLICT,
            ErrorCode::DatabaseError | ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Unavailable, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status(), Json(self)).into_response()
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => {
                ApiError::new(ErrorCode::NotFound, format!("{} no encontrado: {}", entity, id))
            }
            DbError::ForeignKeyViolation { message } => {
                tracing::warn!("Foreign key violation: {}", message);
                ApiError::new(
                    ErrorCode::Conflict,
                    "El registro está referenciado por otros registros.",
                )
            }
            DbError::ConnectionFailed(e) => {
                tracing::error!("Database connection failed: {}", e);
                ApiError::unavailable("Database connection failed")
            }
            DbError::PoolExhausted => ApiError::unavailable("Database pool exhausted"),
            DbError::MigrationFailed(e) => {
                tracing::error!("Migration failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::QueryFailed(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Database query failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::TransactionFailed(e) => {
                tracing::error!("Transaction failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database transaction failed")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                ApiError::new(ErrorCode::Internal, "Database operation failed")
            }
        }
    }
}

/// Converts service errors to API errors.
impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(e) => {
                tracing::warn!(error = %e, "Request rejected");
                ApiError::validation(e.to_string())
            }
            ServiceError::NotFound { entity, id } => {
                tracing::debug!(%entity, id, "Entity not found");
                ApiError::new(ErrorCode::NotFound, entity.not_found())
            }
            ServiceError::MissingReference { entity, id } => {
                tracing::debug!(%entity, id, "Referenced entity not found");
                ApiError::new(ErrorCode::NotFound, entity.missing_reference())
            }
            ServiceError::Storage(e) => e.into(),
        }
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
