//! # Partial Updates
//!
//! One patch type per entity, enumerating exactly the mutable fields.
//!
//! ## Merge Semantics
//! ```text
//! stored:  { nombre: "Acme", telefono: "555" }
//! patch:   { telefono: "556" }
//! result:  { nombre: "Acme", telefono: "556" }
//! ```
//! - An absent key leaves the stored value untouched.
//! - An unknown key fails decoding (`deny_unknown_fields`), it is never
//!   silently dropped.
//! - Applying the same patch twice yields the same state as applying it
//!   once.
//!
//! Nullable Producto fields cannot be cleared through a patch; `null`
//! and an absent key both mean "leave unchanged".

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{
    Cliente, DetalleOrdenCompra, DetalleOrdenVenta, EstadoOrden, OrdenCompra, OrdenVenta,
    Producto, Proveedor,
};

// =============================================================================
// Cliente / Proveedor
// =============================================================================

/// Patch shared by Cliente and Proveedor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactoPatch {
    pub nombre: Option<String>,
    pub contacto: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
}

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl Cliente {
    /// Merges the fields present in `patch`.
    pub fn apply(&mut self, patch: ContactoPatch) {
        merge(&mut self.nombre, patch.nombre);
        merge(&mut self.contacto, patch.contacto);
        merge(&mut self.telefono, patch.telefono);
        merge(&mut self.direccion, patch.direccion);
    }
}

impl Proveedor {
    /// Merges the fields present in `patch`.
    pub fn apply(&mut self, patch: ContactoPatch) {
        merge(&mut self.nombre, patch.nombre);
        merge(&mut self.contacto, patch.contacto);
        merge(&mut self.telefono, patch.telefono);
        merge(&mut self.direccion, patch.direccion);
    }
}

// =============================================================================
// Producto
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductoPatch {
    pub nombre: Option<String>,
    pub costo: Option<Money>,
    pub precio_venta: Option<Money>,
    pub cantidad: Option<i64>,
}

impl Producto {
    /// Merges the fields present in `patch`.
    pub fn apply(&mut self, patch: ProductoPatch) {
        if patch.nombre.is_some() {
            self.nombre = patch.nombre;
        }
        if patch.costo.is_some() {
            self.costo = patch.costo;
        }
        if patch.precio_venta.is_some() {
            self.precio_venta = patch.precio_venta;
        }
        if patch.cantidad.is_some() {
            self.cantidad = patch.cantidad;
        }
    }
}

// =============================================================================
// Orders
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrdenCompraPatch {
    pub fecha_inicio: Option<NaiveDate>,
    pub fecha_final: Option<NaiveDate>,
    pub estado: Option<EstadoOrden>,
    pub id_proveedor: Option<i64>,
}

impl OrdenCompra {
    /// Merges the fields present in `patch`. Checks are the caller's job.
    pub fn apply(&mut self, patch: OrdenCompraPatch) {
        merge(&mut self.fecha_inicio, patch.fecha_inicio);
        merge(&mut self.fecha_final, patch.fecha_final);
        merge(&mut self.estado, patch.estado);
        merge(&mut self.id_proveedor, patch.id_proveedor);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrdenVentaPatch {
    pub fecha_inicio: Option<NaiveDate>,
    pub fecha_final: Option<NaiveDate>,
    pub estado: Option<EstadoOrden>,
    pub id_cliente: Option<i64>,
}

impl OrdenVenta {
    /// Merges the fields present in `patch`. Checks are the caller's job.
    pub fn apply(&mut self, patch: OrdenVentaPatch) {
        merge(&mut self.fecha_inicio, patch.fecha_inicio);
        merge(&mut self.fecha_final, patch.fecha_final);
        merge(&mut self.estado, patch.estado);
        merge(&mut self.id_cliente, patch.id_cliente);
    }
}

// =============================================================================
// Line Items
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DetalleOrdenCompraPatch {
    pub id_orden_compra: Option<i64>,
    pub id_producto: Option<i64>,
    pub cantidad: Option<i64>,
}

impl DetalleOrdenCompra {
    /// Merges the fields present in `patch`. Checks are the caller's job.
    pub fn apply(&mut self, patch: DetalleOrdenCompraPatch) {
        merge(&mut self.id_orden_compra, patch.id_orden_compra);
        merge(&mut self.id_producto, patch.id_producto);
        merge(&mut self.cantidad, patch.cantidad);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DetalleOrdenVentaPatch {
    pub id_orden_venta: Option<i64>,
    pub id_producto: Option<i64>,
    pub cantidad: Option<i64>,
}

impl DetalleOrdenVenta {
    /// Merges the fields present in `patch`. Checks are the caller's job.
    pub fn apply(&mut self, patch: DetalleOrdenVentaPatch) {
        merge(&mut self.id_orden_venta, patch.id_orden_venta);
        merge(&mut self.id_producto, patch.id_producto);
        merge(&mut self.cantidad, patch.cantidad);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
