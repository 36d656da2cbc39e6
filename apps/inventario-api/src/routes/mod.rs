//! # HTTP Routes
//!
//! ```text
//! GET    /health
//! POST   /clientes                 GET /clientes
//! PUT    /clientes/{id}            DELETE /clientes/{id}
//! ...    /proveedores, /productos  (same shape)
//! ...    /ordenes-compra           + GET /ordenes-compra/{id}/detalles
//! ...    /ordenes-venta            + GET /ordenes-venta/{id}/detalles
//! ...    /detalles-orden-compra, /detalles-orden-venta
//! ```
//!
//! ## Envelopes
//! - list:   `{ "clientes": [ ... ] }`
//! - create: `201 { "message": "Cliente creado con éxito", "cliente": { ... } }`
//! - update: `200 { "message": "...", "cliente": { ... } }`
//! - delete: `200 { "message": "..." }`
//! - error:  `{ "code": "...", "message": "..." }`

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::error::{ApiError, ApiResult, ErrorCode};
use crate::AppState;

mod clientes;
mod detalles;
mod health;
mod ordenes;
mod productos;
mod proveedores;

#[cfg(test)]
mod tests;

/// All resource routes, without state or layers.
pub fn routes() -> axum::Router<AppState> {
    axum::Router::new()
        .merge(health::routes())
        .merge(clientes::routes())
        .merge(proveedores::routes())
        .merge(productos::routes())
        .merge(ordenes::routes())
        .merge(detalles::routes())
}

type Envelope = (StatusCode, Json<Value>);

/// `{ "message": .., key: entity }` with the given status.
fn with_entity<T: Serialize>(
    status: StatusCode,
    message: &str,
    key: &str,
    entity: &T,
) -> ApiResult<Envelope> {
    let entity = serde_json::to_value(entity)
        .map_err(|e| ApiError::new(ErrorCode::Internal, e.to_string()))?;

    let mut body = Map::new();
    body.insert("message".to_string(), Value::from(message));
    body.insert(key.to_string(), entity);
    Ok((status, Json(Value::Object(body))))
}

/// `{ key: [ ... ] }`
fn list<T: Serialize>(key: &str, items: &[T]) -> ApiResult<Envelope> {
    let items = serde_json::to_value(items)
        .map_err(|e| ApiError::new(ErrorCode::Internal, e.to_string()))?;

    let mut body = Map::new();
    body.insert(key.to_string(), items);
    Ok((StatusCode::OK, Json(Value::Object(body))))
}

fn message(message: &str) -> Envelope {
    (StatusCode::OK, Json(json!({ "message": message })))
}
