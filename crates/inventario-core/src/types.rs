//! # Domain Types
//!
//! Persisted entities of the inventory system.
//!
//! ## Entity Relationships
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────┐         ┌─────────────┐         ┌─────────────┐       │
//! │  │  Proveedor  │◄────────│ OrdenCompra │◄────────│  Detalle    │       │
//! │  │             │   1..*  │  estado     │   1..*  │ OrdenCompra │──┐    │
//! │  └─────────────┘         └─────────────┘         └─────────────┘  │    │
//! │                                                                   ▼    │
//! │                                                          ┌─────────────┐│
//! │                                                          │  Producto   ││
//! │                                                          └─────────────┘│
//! │                                                                   ▲    │
//! │  ┌─────────────┐         ┌─────────────┐         ┌─────────────┐  │    │
//! │  │   Cliente   │◄────────│ OrdenVenta  │◄────────│  Detalle    │──┘    │
//! │  │             │   1..*  │  estado     │   1..*  │ OrdenVenta  │       │
//! │  └─────────────┘         └─────────────┘         └─────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every entity carries a store-generated integer `id`. Entities own no
//! state between calls; the database is the only authority.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Entity Kind
// =============================================================================

/// Names each entity type, for error messages and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Cliente,
    Proveedor,
    Producto,
    OrdenCompra,
    OrdenVenta,
    DetalleOrdenCompra,
    DetalleOrdenVenta,
}

impl Entity {
    /// Human-readable name, capitalised.
    pub const fn name(&self) -> &'static str {
        match self {
            Entity::Cliente => "Cliente",
            Entity::Proveedor => "Proveedor",
            Entity::Producto => "Producto",
            Entity::OrdenCompra => "Orden de compra",
            Entity::OrdenVenta => "Orden de venta",
            Entity::DetalleOrdenCompra => "Detalle de orden de compra",
            Entity::DetalleOrdenVenta => "Detalle de orden de venta",
        }
    }

    const fn is_feminine(&self) -> bool {
        matches!(self, Entity::OrdenCompra | Entity::OrdenVenta)
    }

    /// Message for an update/delete that addresses a missing id.
    pub fn not_found(&self) -> String {
        match self {
            Entity::DetalleOrdenCompra | Entity::DetalleOrdenVenta => {
                format!("El {} no existe.", self.name().to_lowercase())
            }
            _ => {
                let suffix = if self.is_feminine() { "encontrada" } else { "encontrado" };
                format!("{} no {}", self.name(), suffix)
            }
        }
    }

    /// Message for a foreign key that does not resolve.
    pub fn missing_reference(&self) -> String {
        let (article, adjective) = if self.is_feminine() {
            ("La", "especificada")
        } else {
            ("El", "especificado")
        };
        format!(
            "{} {} {} no existe.",
            article,
            self.name().to_lowercase(),
            adjective
        )
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// The status of a purchase or sales order.
///
/// Closed set: any other value is rejected while decoding the request,
/// so services never see an unknown status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum EstadoOrden {
    Completado,
    Pendiente,
    Cancelado,
}

impl EstadoOrden {
    /// Wire and storage form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            EstadoOrden::Completado => "completado",
            EstadoOrden::Pendiente => "pendiente",
            EstadoOrden::Cancelado => "cancelado",
        }
    }
}

impl fmt::Display for EstadoOrden {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Cliente / Proveedor
// =============================================================================

/// A customer that sales orders are placed for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Cliente {
    pub id: i64,
    pub nombre: String,
    /// Name of the contact person.
    pub contacto: String,
    pub telefono: String,
    pub direccion: String,
}

/// A supplier that purchase orders are placed with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Proveedor {
    pub id: i64,
    pub nombre: String,
    /// Name of the contact person.
    pub contacto: String,
    pub telefono: String,
    pub direccion: String,
}

// =============================================================================
// Producto
// =============================================================================

/// A product that can appear on purchase and sales orders.
///
/// Every attribute is nullable: product creation performs no
/// required-field check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Producto {
    pub id: i64,
    pub nombre: Option<String>,

    /// Unit cost.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "costo_cents"))]
    #[ts(as = "Option<f64>")]
    pub costo: Option<Money>,

    /// Unit sale price.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "precio_venta_cents"))]
    #[ts(as = "Option<f64>")]
    pub precio_venta: Option<Money>,

    /// Units on hand. Not adjusted by order line items.
    pub cantidad: Option<i64>,
}

// =============================================================================
// Orders
// =============================================================================

/// A purchase order placed with a supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct OrdenCompra {
    pub id: i64,
    #[ts(as = "String")]
    pub fecha_inicio: NaiveDate,
    #[ts(as = "String")]
    pub fecha_final: NaiveDate,
    pub estado: EstadoOrden,
    pub id_proveedor: i64,
}

/// A sales order placed by a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct OrdenVenta {
    pub id: i64,
    #[ts(as = "String")]
    pub fecha_inicio: NaiveDate,
    #[ts(as = "String")]
    pub fecha_final: NaiveDate,
    pub estado: EstadoOrden,
    pub id_cliente: i64,
}

// =============================================================================
// Line Items
// =============================================================================

/// One product line on a purchase order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct DetalleOrdenCompra {
    pub id: i64,
    pub id_orden_compra: i64,
    pub id_producto: i64,
    pub cantidad: i64,
}

/// One product line on a sales order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct DetalleOrdenVenta {
    pub id: i64,
    pub id_orden_venta: i64,
    pub id_producto: i64,
    pub cantidad: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================
