//! `/proveedores`

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{post, put};
use axum::Router;
use inventario_core::{ContactoInput, ContactoPatch};

use super::{list, message, with_entity, Envelope};
use crate::error::ApiResult;
use crate::extract::{JsonBody, PathParam};
use crate::services::proveedor;
use crate::AppState;

pub(super) fn routes() -> Router<AppState> {
    Router::new()
        .route("/proveedores", post(create).get(get_all))
        .route("/proveedores/{id}", put(update).delete(delete))
}

async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ContactoInput>,
) -> ApiResult<Envelope> {
    let proveedor = proveedor::create(&state.db, input).await?;
    with_entity(StatusCode::CREATED, "Proveedor creado con éxito", "proveedor", &proveedor)
}

async fn get_all(State(state): State<AppState>) -> ApiResult<Envelope> {
    list("proveedores", &proveedor::get_all(&state.db).await?)
}

async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
    JsonBody(patch): JsonBody<ContactoPatch>,
) -> ApiResult<Envelope> {
    let proveedor = proveedor::update(&state.db, id, patch).await?;
    with_entity(StatusCode::OK, "Proveedor actualizado con éxito", "proveedor", &proveedor)
}

async fn delete(State(state): State<AppState>, PathParam(id): PathParam<i64>) -> ApiResult<Envelope> {
    proveedor::delete(&state.db, id).await?;
    Ok(message("Proveedor eliminado con éxito"))
}
