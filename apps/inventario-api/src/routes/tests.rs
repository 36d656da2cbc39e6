//! Router tests over an in-memory database.

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use inventario_db::{Database, DbConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::router;

async fn app() -> Router {
    router(Database::new(DbConfig::in_memory()).await.unwrap())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn contacto(nombre: &str) -> Value {
    json!({
        "nombre": nombre,
        "contacto": "Jon",
        "telefono": "555",
        "direccion": "1 Main St"
    })
}

fn orden_compra(id_proveedor: i64) -> Value {
    json!({
        "fecha_inicio": "2024-01-01",
        "fecha_final": "2024-01-10",
        "estado": "pendiente",
        "id_proveedor": id_proveedor
    })
}

async fn create_proveedor(app: &Router) -> i64 {
    let (status, body) = send(app, Method::POST, "/proveedores", Some(contacto("Acme"))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["proveedor"]["id"].as_i64().unwrap()
}

async fn create_orden_compra(app: &Router) -> i64 {
    let id_proveedor = create_proveedor(app).await;
    let (status, body) =
        send(app, Method::POST, "/ordenes-compra", Some(orden_compra(id_proveedor))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["orden_compra"]["id"].as_i64().unwrap()
}

async fn create_producto(app: &Router) -> i64 {
    let producto = json!({ "nombre": "Tornillo", "costo": 1.5, "precio_venta": 2.25, "cantidad": 10 });
    let (status, body) = send(app, Method::POST, "/productos", Some(producto)).await;
    assert_eq!(status, StatusCode::CREATED);
    body["producto"]["id"].as_i64().unwrap()
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_reports_migrations() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["migrations"]["total"], body["migrations"]["applied"]);
}

// =============================================================================
// Clientes / Proveedores
// =============================================================================

#[tokio::test]
async fn test_create_cliente_envelope() {
    let app = app().await;

    let (status, body) = send(&app, Method::POST, "/clientes", Some(contacto("Ana"))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Cliente creado con éxito");
    assert_eq!(body["cliente"]["nombre"], "Ana");
    assert!(body["cliente"]["id"].is_i64());
}

#[tokio::test]
async fn test_list_clientes_envelope() {
    let app = app().await;
    send(&app, Method::POST, "/clientes", Some(contacto("Ana"))).await;
    send(&app, Method::POST, "/clientes", Some(contacto("Luis"))).await;

    let (status, body) = send(&app, Method::GET, "/clientes", None).await;

    assert_eq!(status, StatusCode::OK);
    let clientes = body["clientes"].as_array().unwrap();
    assert_eq!(clientes.len(), 2);
    assert_eq!(clientes[1]["nombre"], "Luis");
}

#[tokio::test]
async fn test_create_cliente_missing_field() {
    let app = app().await;

    let (status, body) =
        send(&app, Method::POST, "/clientes", Some(json!({ "nombre": "Ana" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Todos los campos son obligatorios"));
}

#[tokio::test]
async fn test_cliente_text_stored_as_sent() {
    let app = app().await;
    let padded = json!({
        "nombre": " Acme ",
        "contacto": "Jon",
        "telefono": " 555",
        "direccion": "   "
    });

    let (status, _) = send(&app, Method::POST, "/clientes", Some(padded.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(&app, Method::GET, "/clientes", None).await;
    let cliente = &body["clientes"][0];
    assert_eq!(cliente["nombre"], padded["nombre"]);
    assert_eq!(cliente["telefono"], padded["telefono"]);
    assert_eq!(cliente["direccion"], padded["direccion"]);
}

#[tokio::test]
async fn test_non_numeric_id_is_validation_error() {
    let app = app().await;

    let (status, body) = send(&app, Method::DELETE, "/clientes/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_malformed_json_is_validation_error() {
    let app = app().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/proveedores")
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_update_proveedor_partial() {
    let app = app().await;
    let id = create_proveedor(&app).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/proveedores/{id}"),
        Some(json!({ "telefono": "999" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Proveedor actualizado con éxito");
    assert_eq!(body["proveedor"]["telefono"], "999");
    assert_eq!(body["proveedor"]["nombre"], "Acme");
}

#[tokio::test]
async fn test_patch_rejects_unknown_field() {
    let app = app().await;
    let id = create_proveedor(&app).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/proveedores/{id}"),
        Some(json!({ "email": "a@b.c" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_update_missing_cliente_is_not_found() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/clientes/42",
        Some(json!({ "nombre": "Nadie" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["message"], "Cliente no encontrado");
}

#[tokio::test]
async fn test_delete_referenced_proveedor_conflicts() {
    let app = app().await;
    let orden = create_orden_compra(&app).await;
    assert!(orden > 0);

    let (status, body) = send(&app, Method::DELETE, "/proveedores/1", None).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");
}

#[tokio::test]
async fn test_delete_cliente_then_missing() {
    let app = app().await;
    send(&app, Method::POST, "/clientes", Some(contacto("Ana"))).await;

    let (status, body) = send(&app, Method::DELETE, "/clientes/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Cliente eliminado con éxito" }));

    let (status, _) = send(&app, Method::DELETE, "/clientes/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Productos
// =============================================================================

#[tokio::test]
async fn test_producto_money_as_decimal() {
    let app = app().await;
    create_producto(&app).await;

    let (status, body) = send(&app, Method::GET, "/productos", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["productos"][0]["costo"], 1.5);
    assert_eq!(body["productos"][0]["precio_venta"], 2.25);
}

#[tokio::test]
async fn test_producto_bad_amount_names_field() {
    let app = app().await;

    let producto = json!({ "nombre": "Tornillo", "costo": 1, "precio_venta": "dos" });
    let (status, body) = send(&app, Method::POST, "/productos", Some(producto)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("precio_venta"));
    assert!(message.contains("formato inválido"));
}

#[tokio::test]
async fn test_producto_float_amount_rounds_half_away() {
    let app = app().await;

    let producto = json!({ "costo": 1.005, "precio_venta": "1.005" });
    let (_, body) = send(&app, Method::POST, "/productos", Some(producto)).await;

    assert_eq!(body["producto"]["costo"], 1.01);
    assert_eq!(body["producto"]["precio_venta"], 1.01);
}

#[tokio::test]
async fn test_producto_without_fields_is_accepted() {
    let app = app().await;

    let (status, body) = send(&app, Method::POST, "/productos", Some(json!({}))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["producto"]["nombre"].is_null());
}

// =============================================================================
// Ordenes
// =============================================================================

#[tokio::test]
async fn test_create_orden_compra_envelope() {
    let app = app().await;
    let id_proveedor = create_proveedor(&app).await;

    let (status, body) =
        send(&app, Method::POST, "/ordenes-compra", Some(orden_compra(id_proveedor))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Orden de compra creada con éxito");
    assert_eq!(body["orden_compra"]["fecha_inicio"], "2024-01-01");
    assert_eq!(body["orden_compra"]["estado"], "pendiente");
}

#[tokio::test]
async fn test_orden_compra_unknown_proveedor() {
    let app = app().await;

    let (status, body) = send(&app, Method::POST, "/ordenes-compra", Some(orden_compra(999))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "El proveedor especificado no existe.");
}

#[tokio::test]
async fn test_orden_venta_invalid_estado() {
    let app = app().await;
    send(&app, Method::POST, "/clientes", Some(contacto("Ana"))).await;

    let orden = json!({
        "fecha_inicio": "2024-02-01",
        "fecha_final": "2024-02-03",
        "estado": "enviado",
        "id_cliente": 1
    });
    let (status, body) = send(&app, Method::POST, "/ordenes-venta", Some(orden)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_orden_venta_backwards_dates() {
    let app = app().await;
    send(&app, Method::POST, "/clientes", Some(contacto("Ana"))).await;

    let orden = json!({
        "fecha_inicio": "2024-02-10",
        "fecha_final": "2024-02-01",
        "estado": "pendiente",
        "id_cliente": 1
    });
    let (status, body) = send(&app, Method::POST, "/ordenes-venta", Some(orden)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "La fecha final no puede ser anterior a la fecha de inicio."
    );
}

#[tokio::test]
async fn test_delete_missing_orden_venta() {
    let app = app().await;

    let (status, body) = send(&app, Method::DELETE, "/ordenes-venta/7", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Orden de venta no encontrada");
}

// =============================================================================
// Detalles
// =============================================================================

#[tokio::test]
async fn test_detalles_by_order() {
    let app = app().await;
    let id_orden = create_orden_compra(&app).await;
    let id_producto = create_producto(&app).await;

    let detalle = json!({ "id_orden_compra": id_orden, "id_producto": id_producto, "cantidad": 4 });
    let (status, body) = send(&app, Method::POST, "/detalles-orden-compra", Some(detalle)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Detalle de orden de compra creado con éxito");
    assert_eq!(body["detalle"]["cantidad"], 4);

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/ordenes-compra/{id_orden}/detalles"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["detalles"].as_array().unwrap().len(), 1);

    let (status, body) = send(&app, Method::GET, "/ordenes-compra/999/detalles", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["detalles"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_detalle_unknown_producto() {
    let app = app().await;
    let id_orden = create_orden_compra(&app).await;

    let detalle = json!({ "id_orden_compra": id_orden, "id_producto": 999, "cantidad": 1 });
    let (status, body) = send(&app, Method::POST, "/detalles-orden-compra", Some(detalle)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "El producto especificado no existe.");
}

#[tokio::test]
async fn test_update_detalle_unknown_producto_is_not_found() {
    let app = app().await;
    let id_orden = create_orden_compra(&app).await;
    let id_producto = create_producto(&app).await;
    let detalle = json!({ "id_orden_compra": id_orden, "id_producto": id_producto, "cantidad": 2 });
    let (_, body) = send(&app, Method::POST, "/detalles-orden-compra", Some(detalle)).await;
    let id = body["detalle"]["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/detalles-orden-compra/{id}"),
        Some(json!({ "id_producto": 999, "cantidad": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["message"], "El producto especificado no existe.");

    let (_, body) = send(&app, Method::GET, "/detalles-orden-compra", None).await;
    assert_eq!(body["detalles_orden_compra"][0]["cantidad"], 2);
}

#[tokio::test]
async fn test_delete_missing_detalle_venta() {
    let app = app().await;

    let (status, body) = send(&app, Method::DELETE, "/detalles-orden-venta/3", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "El detalle de orden de venta no existe.");
}

#[tokio::test]
async fn test_list_detalles_orden_venta_envelope() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/detalles-orden-venta", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "detalles_orden_venta": [] }));
}
