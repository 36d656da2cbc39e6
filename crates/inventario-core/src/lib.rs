//! # inventario-core: Pure Domain Logic for Inventario
//!
//! This crate holds the entities, inputs, patches and validation rules of
//! the inventory API as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Inventario Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP clients (JSON)                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              inventario-api (routes + services)                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ inventario-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   input   │  │   patch   │  │ validation│  │   │
//! │  │   │  Cliente  │  │ Contacto  │  │ Contacto  │  │ required  │  │   │
//! │  │   │  Orden*   │  │ Orden*    │  │ Orden*    │  │ dates     │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 inventario-db (Database Layer)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Persisted entities and `EstadoOrden`
//! - [`input`] - Create payloads and their validated forms
//! - [`patch`] - Per-entity partial update types
//! - [`money`] - Fixed-point amounts (integer cents)
//! - [`validation`] - Required-field and date-range rules
//! - [`error`] - `ValidationError`
//!
//! ## Example Usage
//!
//! ```rust
//! use inventario_core::input::ContactoInput;
//!
//! let input = ContactoInput {
//!     nombre: Some("Acme".into()),
//!     contacto: Some("Jon".into()),
//!     telefono: Some("555".into()),
//!     direccion: Some("1 Main St".into()),
//! };
//! let nuevo = input.require().unwrap();
//! assert_eq!(nuevo.nombre, "Acme");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod input;
pub mod money;
pub mod patch;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use input::*;
pub use money::Money;
pub use patch::*;
pub use types::*;
