//! # Validation Module
//!
//! Pure validation rules for inventory writes.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: JSON decoding (API boundary)                                 │
//! │  ├── Types, date format, EstadoOrden membership                        │
//! │  └── Unknown patch fields                                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (pure)                                           │
//! │  ├── Required fields                                                   │
//! │  └── fecha_final >= fecha_inicio                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Services (need the store)                                    │
//! │  └── Foreign keys resolve to existing rows                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 4: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── Foreign key constraints (ON DELETE RESTRICT)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use chrono::NaiveDate;
//! use inventario_core::validation::validate_date_range;
//!
//! let inicio = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let fin = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
//! assert!(validate_date_range(inicio, fin).is_err());
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Required Fields
// =============================================================================

/// Returns the text unchanged if present and non-empty, otherwise records
/// `field` as missing. Whitespace counts as content.
pub fn require_text(
    field: &'static str,
    value: Option<String>,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    match value {
        Some(text) if !text.is_empty() => Some(text),
        _ => {
            missing.push(field);
            None
        }
    }
}

/// Returns the value if present, otherwise records `field` as missing.
pub fn require<T>(field: &'static str, value: Option<T>, missing: &mut Vec<&'static str>) -> Option<T> {
    if value.is_none() {
        missing.push(field);
    }
    value
}

// =============================================================================
// Date Validators
// =============================================================================

/// Validates that an order does not end before it starts.
///
/// ## Rules
/// - `fecha_final` may equal `fecha_inicio` (same-day order)
/// - `fecha_final` earlier than `fecha_inicio` is rejected
pub fn validate_date_range(fecha_inicio: NaiveDate, fecha_final: NaiveDate) -> ValidationResult<()> {
    if fecha_final < fecha_inicio {
        return Err(ValidationError::DateRange);
    }

    Ok(())
}

/// Date check for partial order updates.
///
/// Only cross-checks when the patch carries both dates. A single date is
/// not compared against the stored value of the other one.
pub fn validate_patch_dates(
    fecha_inicio: Option<NaiveDate>,
    fecha_final: Option<NaiveDate>,
) -> ValidationResult<()> {
    match (fecha_inicio, fecha_final) {
        (Some(inicio), Some(fin)) => validate_date_range(inicio, fin),
        _ => Ok(()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_require_text() {
        let mut missing = Vec::new();
        assert_eq!(
            require_text("nombre", Some("  Acme ".to_string()), &mut missing),
            Some("  Acme ".to_string())
        );
        assert_eq!(
            require_text("direccion", Some("   ".to_string()), &mut missing),
            Some("   ".to_string())
        );
        assert!(missing.is_empty());

        assert_eq!(require_text("nombre", Some(String::new()), &mut missing), None);
        assert_eq!(require_text("contacto", None, &mut missing), None);
        assert_eq!(missing, vec!["nombre", "contacto"]);
    }

    #[test]
    fn test_require() {
        let mut missing = Vec::new();
        assert_eq!(require("id_proveedor", Some(0_i64), &mut missing), Some(0));
        assert_eq!(require::<i64>("id_cliente", None, &mut missing), None);
        assert_eq!(missing, vec!["id_cliente"]);
    }

    #[test]
    fn test_validate_date_range() {
        assert!(validate_date_range(date(2024, 1, 1), date(2024, 1, 10)).is_ok());
        assert!(validate_date_range(date(2024, 1, 1), date(2024, 1, 1)).is_ok());
        assert_eq!(
            validate_date_range(date(2024, 1, 1), date(2023, 12, 31)),
            Err(ValidationError::DateRange)
        );
    }

    #[test]
    fn test_validate_patch_dates_single_date_passes() {
        assert!(validate_patch_dates(Some(date(2030, 1, 1)), None).is_ok());
        assert!(validate_patch_dates(None, Some(date(1990, 1, 1))).is_ok());
        assert!(validate_patch_dates(None, None).is_ok());
        assert!(validate_patch_dates(Some(date(2024, 2, 1)), Some(date(2024, 1, 1))).is_err());
    }
}
