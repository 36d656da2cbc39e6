//! `/clientes`

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{post, put};
use axum::Router;
use inventario_core::{ContactoInput, ContactoPatch};

use super::{list, message, with_entity, Envelope};
use crate::error::ApiResult;
use crate::extract::{JsonBody, PathParam};
use crate::services::cliente;
use crate::AppState;

pub(super) fn routes() -> Router<AppState> {
    Router::new()
        .route("/clientes", post(create).get(get_all))
        .route("/clientes/{id}", put(update).delete(delete))
}

async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ContactoInput>,
) -> ApiResult<Envelope> {
    let cliente = cliente::create(&state.db, input).await?;
    with_entity(StatusCode::CREATED, "Cliente creado con éxito", "cliente", &cliente)
}

async fn get_all(State(state): State<AppState>) -> ApiResult<Envelope> {
    list("clientes", &cliente::get_all(&state.db).await?)
}

async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
    JsonBody(patch): JsonBody<ContactoPatch>,
) -> ApiResult<Envelope> {
    let cliente = cliente::update(&state.db, id, patch).await?;
    with_entity(StatusCode::OK, "Cliente actualizado con éxito", "cliente", &cliente)
}

async fn delete(State(state): State<AppState>, PathParam(id): PathParam<i64>) -> ApiResult<Envelope> {
    cliente::delete(&state.db, id).await?;
    Ok(message("Cliente eliminado con éxito"))
}
