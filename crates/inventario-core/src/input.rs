//! # Create Inputs
//!
//! Typed payloads for the create operations.
//!
//! Each `*Input` is what a client sends. Fields the service must
//! check for presence are `Option` so an absent key reaches validation
//! instead of failing the JSON decoder. Validation turns an input into
//! its `Nuevo*` counterpart, which is what the repositories insert.
//!
//! ```text
//! ContactoInput ──require()──► NuevoContacto ──insert──► Cliente / Proveedor
//! OrdenCompraInput ──require()──► NuevaOrdenCompra ──(FK, dates)──► insert
//! NuevoProducto ───────────────────────────────────────────────► insert
//! NuevoDetalle* ─────────────────────────(FK)──────────────────► insert
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::EstadoOrden;
use crate::validation::{require, require_text, ValidationResult};

// =============================================================================
// Cliente / Proveedor
// =============================================================================

/// Create payload shared by Cliente and Proveedor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContactoInput {
    pub nombre: Option<String>,
    pub contacto: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
}

/// A Cliente or Proveedor with all four fields present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NuevoContacto {
    pub nombre: String,
    pub contacto: String,
    pub telefono: String,
    pub direccion: String,
}

impl ContactoInput {
    /// Checks that every field is present and non-empty.
    ///
    /// ## Example
    /// ```rust
    /// use inventario_core::input::ContactoInput;
    ///
    /// let input = ContactoInput {
    ///     nombre: Some("Acme".into()),
    ///     contacto: Some("Jon".into()),
    ///     telefono: Some("555".into()),
    ///     direccion: None,
    /// };
    /// assert!(input.require().is_err());
    /// ```
    pub fn require(self) -> ValidationResult<NuevoContacto> {
        let mut missing = Vec::new();
        let nombre = require_text("nombre", self.nombre, &mut missing);
        let contacto = require_text("contacto", self.contacto, &mut missing);
        let telefono = require_text("telefono", self.telefono, &mut missing);
        let direccion = require_text("direccion", self.direccion, &mut missing);

        match (nombre, contacto, telefono, direccion) {
            (Some(nombre), Some(contacto), Some(telefono), Some(direccion)) => Ok(NuevoContacto {
                nombre,
                contacto,
                telefono,
                direccion,
            }),
            _ => Err(ValidationError::Required { fields: missing }),
        }
    }
}

// =============================================================================
// Producto
// =============================================================================

/// Create payload for a Producto. Inserted as-is, nulls included.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NuevoProducto {
    pub nombre: Option<String>,
    #[ts(as = "Option<f64>")]
    pub costo: Option<Money>,
    #[ts(as = "Option<f64>")]
    pub precio_venta: Option<Money>,
    pub cantidad: Option<i64>,
}

// =============================================================================
// Orders
// =============================================================================

/// Create payload for an OrdenCompra.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrdenCompraInput {
    #[ts(as = "Option<String>")]
    pub fecha_inicio: Option<NaiveDate>,
    #[ts(as = "Option<String>")]
    pub fecha_final: Option<NaiveDate>,
    pub estado: Option<EstadoOrden>,
    pub id_proveedor: Option<i64>,
}

/// An OrdenCompra with every field present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NuevaOrdenCompra {
    pub fecha_inicio: NaiveDate,
    pub fecha_final: NaiveDate,
    pub estado: EstadoOrden,
    pub id_proveedor: i64,
}

impl OrdenCompraInput {
    /// Checks that every field is present.
    pub fn require(self) -> ValidationResult<NuevaOrdenCompra> {
        let mut missing = Vec::new();
        let fecha_inicio = require("fecha_inicio", self.fecha_inicio, &mut missing);
        let fecha_final = require("fecha_final", self.fecha_final, &mut missing);
        let estado = require("estado", self.estado, &mut missing);
        let id_proveedor = require("id_proveedor", self.id_proveedor, &mut missing);

        match (fecha_inicio, fecha_final, estado, id_proveedor) {
            (Some(fecha_inicio), Some(fecha_final), Some(estado), Some(id_proveedor)) => {
                Ok(NuevaOrdenCompra {
                    fecha_inicio,
                    fecha_final,
                    estado,
                    id_proveedor,
                })
            }
            _ => Err(ValidationError::Required { fields: missing }),
        }
    }
}

/// Create payload for an OrdenVenta.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrdenVentaInput {
    #[ts(as = "Option<String>")]
    pub fecha_inicio: Option<NaiveDate>,
    #[ts(as = "Option<String>")]
    pub fecha_final: Option<NaiveDate>,
    pub estado: Option<EstadoOrden>,
    pub id_cliente: Option<i64>,
}

/// An OrdenVenta with every field present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NuevaOrdenVenta {
    pub fecha_inicio: NaiveDate,
    pub fecha_final: NaiveDate,
    pub estado: EstadoOrden,
    pub id_cliente: i64,
}

impl OrdenVentaInput {
    /// Checks that every field is present.
    pub fn require(self) -> ValidationResult<NuevaOrdenVenta> {
        let mut missing = Vec::new();
        let fecha_inicio = require("fecha_inicio", self.fecha_inicio, &mut missing);
        let fecha_final = require("fecha_final", self.fecha_final, &mut missing);
        let estado = require("estado", self.estado, &mut missing);
        let id_cliente = require("id_cliente", self.id_cliente, &mut missing);

        match (fecha_inicio, fecha_final, estado, id_cliente) {
            (Some(fecha_inicio), Some(fecha_final), Some(estado), Some(id_cliente)) => {
                Ok(NuevaOrdenVenta {
                    fecha_inicio,
                    fecha_final,
                    estado,
                    id_cliente,
                })
            }
            _ => Err(ValidationError::Required { fields: missing }),
        }
    }
}

// =============================================================================
// Line Items
// =============================================================================

/// Create payload for a DetalleOrdenCompra.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NuevoDetalleOrdenCompra {
    pub id_orden_compra: i64,
    pub id_producto: i64,
    pub cantidad: i64,
}

/// Create payload for a DetalleOrdenVenta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NuevoDetalleOrdenVenta {
    pub id_orden_venta: i64,
    pub id_producto: i64,
    pub cantidad: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================
