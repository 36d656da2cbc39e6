//! `/ordenes-compra` and `/ordenes-venta`, including the per-order
//! line item listings.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::Router;
use inventario_core::{OrdenCompraInput, OrdenCompraPatch, OrdenVentaInput, OrdenVentaPatch};

use super::{list, message, with_entity, Envelope};
use crate::error::ApiResult;
use crate::extract::{JsonBody, PathParam};
use crate::services::{detalle_orden_compra, detalle_orden_venta, orden_compra, orden_venta};
use crate::AppState;

pub(super) fn routes() -> Router<AppState> {
    Router::new()
        .route("/ordenes-compra", post(create_compra).get(get_all_compra))
        .route("/ordenes-compra/{id}", put(update_compra).delete(delete_compra))
        .route("/ordenes-compra/{id}/detalles", get(detalles_compra))
        .route("/ordenes-venta", post(create_venta).get(get_all_venta))
        .route("/ordenes-venta/{id}", put(update_venta).delete(delete_venta))
        .route("/ordenes-venta/{id}/detalles", get(detalles_venta))
}

// =============================================================================
// Ordenes de compra
// =============================================================================

async fn create_compra(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<OrdenCompraInput>,
) -> ApiResult<Envelope> {
    let orden = orden_compra::create(&state.db, input).await?;
    with_entity(StatusCode::CREATED, "Orden de compra creada con éxito", "orden_compra", &orden)
}

async fn get_all_compra(State(state): State<AppState>) -> ApiResult<Envelope> {
    list("ordenes_compra", &orden_compra::get_all(&state.db).await?)
}

async fn update_compra(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
    JsonBody(patch): JsonBody<OrdenCompraPatch>,
) -> ApiResult<Envelope> {
    let orden = orden_compra::update(&state.db, id, patch).await?;
    with_entity(StatusCode::OK, "Orden de compra actualizada con éxito", "orden_compra", &orden)
}

async fn delete_compra(State(state): State<AppState>, PathParam(id): PathParam<i64>) -> ApiResult<Envelope> {
    orden_compra::delete(&state.db, id).await?;
    Ok(message("Orden de compra eliminada con éxito"))
}

async fn detalles_compra(State(state): State<AppState>, PathParam(id): PathParam<i64>) -> ApiResult<Envelope> {
    list("detalles", &detalle_orden_compra::get_by_order(&state.db, id).await?)
}

// =============================================================================
// Ordenes de venta
// =============================================================================

async fn create_venta(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<OrdenVentaInput>,
) -> ApiResult<Envelope> {
    let orden = orden_venta::create(&state.db, input).await?;
    with_entity(StatusCode::CREATED, "Orden de venta creada con éxito", "orden_venta", &orden)
}

async fn get_all_venta(State(state): State<AppState>) -> ApiResult<Envelope> {
    list("ordenes_venta", &orden_venta::get_all(&state.db).await?)
}

async fn update_venta(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
    JsonBody(patch): JsonBody<OrdenVentaPatch>,
) -> ApiResult<Envelope> {
    let orden = orden_venta::update(&state.db, id, patch).await?;
    with_entity(StatusCode::OK, "Orden de venta actualizada con éxito", "orden_venta", &orden)
}

async fn delete_venta(State(state): State<AppState>, PathParam(id): PathParam<i64>) -> ApiResult<Envelope> {
    orden_venta::delete(&state.db, id).await?;
    Ok(message("Orden de venta eliminada con éxito"))
}

async fn detalles_venta(State(state): State<AppState>, PathParam(id): PathParam<i64>) -> ApiResult<Envelope> {
    list("detalles", &detalle_orden_venta::get_by_order(&state.db, id).await?)
}
