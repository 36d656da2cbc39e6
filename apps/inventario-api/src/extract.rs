//! Request extractors.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;

use crate::error::ApiError;

/// `Json<T>` whose rejection is a 400 [`ApiError`].
///
/// Malformed JSON, wrong field types, bad dates, unknown `estado` values
/// and unknown patch fields all surface as `VALIDATION_ERROR` instead of
/// axum's plain-text rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                tracing::warn!(status = %rejection.status(), "Rejected request body");
                Err(ApiError::validation(rejection.body_text()))
            }
        }
    }
}

/// `Path<T>` whose rejection is a 400 [`ApiError`].
///
/// `/clientes/abc` answers with the usual `{ code, message }` body.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathParam<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParam<T>
where
    Path<T>: FromRequestParts<S, Rejection = PathRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(PathParam(value)),
            Err(rejection) => {
                tracing::warn!(status = %rejection.status(), "Rejected path parameter");
                Err(ApiError::validation(rejection.body_text()))
            }
        }
    }
}
