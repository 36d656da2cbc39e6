//! `/productos`

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{post, put};
use axum::Router;
use inventario_core::{NuevoProducto, ProductoPatch};

use super::{list, message, with_entity, Envelope};
use crate::error::ApiResult;
use crate::extract::{JsonBody, PathParam};
use crate::services::producto;
use crate::AppState;

pub(super) fn routes() -> Router<AppState> {
    Router::new()
        .route("/productos", post(create).get(get_all))
        .route("/productos/{id}", put(update).delete(delete))
}

async fn create(
    State(state): State<AppState>,
    JsonBody(nuevo): JsonBody<NuevoProducto>,
) -> ApiResult<Envelope> {
    let producto = producto::create(&state.db, nuevo).await?;
    with_entity(StatusCode::CREATED, "Producto creado con éxito", "producto", &producto)
}

async fn get_all(State(state): State<AppState>) -> ApiResult<Envelope> {
    list("productos", &producto::get_all(&state.db).await?)
}

async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
    JsonBody(patch): JsonBody<ProductoPatch>,
) -> ApiResult<Envelope> {
    let producto = producto::update(&state.db, id, patch).await?;
    with_entity(StatusCode::OK, "Producto actualizado con éxito", "producto", &producto)
}

async fn delete(State(state): State<AppState>, PathParam(id): PathParam<i64>) -> ApiResult<Envelope> {
    producto::delete(&state.db, id).await?;
    Ok(message("Producto eliminado con éxito"))
}
