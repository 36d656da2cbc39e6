//! `/detalles-orden-compra` and `/detalles-orden-venta`

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{post, put};
use axum::Router;
use inventario_core::{
    DetalleOrdenCompraPatch, DetalleOrdenVentaPatch, NuevoDetalleOrdenCompra,
    NuevoDetalleOrdenVenta,
};

use super::{list, message, with_entity, Envelope};
use crate::error::ApiResult;
use crate::extract::{JsonBody, PathParam};
use crate::services::{detalle_orden_compra, detalle_orden_venta};
use crate::AppState;

pub(super) fn routes() -> Router<AppState> {
    Router::new()
        .route("/detalles-orden-compra", post(create_compra).get(get_all_compra))
        .route("/detalles-orden-compra/{id}", put(update_compra).delete(delete_compra))
        .route("/detalles-orden-venta", post(create_venta).get(get_all_venta))
        .route("/detalles-orden-venta/{id}", put(update_venta).delete(delete_venta))
}

async fn create_compra(
    State(state): State<AppState>,
    JsonBody(nuevo): JsonBody<NuevoDetalleOrdenCompra>,
) -> ApiResult<Envelope> {
    let detalle = detalle_orden_compra::create(&state.db, nuevo).await?;
    with_entity(
        StatusCode::CREATED,
        "Detalle de orden de compra creado con éxito",
        "detalle",
        &detalle,
    )
}

async fn get_all_compra(State(state): State<AppState>) -> ApiResult<Envelope> {
    list("detalles_orden_compra", &detalle_orden_compra::get_all(&state.db).await?)
}

async fn update_compra(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
    JsonBody(patch): JsonBody<DetalleOrdenCompraPatch>,
) -> ApiResult<Envelope> {
    let detalle = detalle_orden_compra::update(&state.db, id, patch).await?;
    with_entity(
        StatusCode::OK,
        "Detalle de orden de compra actualizado con éxito",
        "detalle",
        &detalle,
    )
}

async fn delete_compra(State(state): State<AppState>, PathParam(id): PathParam<i64>) -> ApiResult<Envelope> {
    detalle_orden_compra::delete(&state.db, id).await?;
    Ok(message("Detalle de orden de compra eliminado con éxito"))
}

async fn create_venta(
    State(state): State<AppState>,
    JsonBody(nuevo): JsonBody<NuevoDetalleOrdenVenta>,
) -> ApiResult<Envelope> {
    let detalle = detalle_orden_venta::create(&state.db, nuevo).await?;
    with_entity(
        StatusCode::CREATED,
        "Detalle de orden de venta creado con éxito",
        "detalle",
        &detalle,
    )
}

async fn get_all_venta(State(state): State<AppState>) -> ApiResult<Envelope> {
    list("detalles_orden_venta", &detalle_orden_venta::get_all(&state.db).await?)
}

async fn update_venta(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
    JsonBody(patch): JsonBody<DetalleOrdenVentaPatch>,
) -> ApiResult<Envelope> {
    let detalle = detalle_orden_venta::update(&state.db, id, patch).await?;
    with_entity(
        StatusCode::OK,
        "Detalle de orden de venta actualizado con éxito",
        "detalle",
        &detalle,
    )
}

async fn delete_venta(State(state): State<AppState>, PathParam(id): PathParam<i64>) -> ApiResult<Envelope> {
    detalle_orden_venta::delete(&state.db, id).await?;
    Ok(message("Detalle de orden de venta eliminado con éxito"))
}
