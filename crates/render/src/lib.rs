#![deny(unsafe_code)]
//! Field registry and CPU-side rendering for flowlic.
//!
//! This crate sits between `flowlic-core` (which defines the `VectorField`
//! trait and the convolution building blocks) and the CLI. It provides the
//! [`LicRenderer`] convolution pass, string-based field construction via
//! [`FieldKind`], and PNG snapshot output.

pub mod lic;
pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

use flowlic_core::error::LicError;
use flowlic_core::field::{Charge, ChargeField, FlowVector, VectorField, WaveField};
use glam::DVec2;
use serde_json::Value;

pub use lic::LicRenderer;

/// All available field names.
const FIELD_NAMES: &[&str] = &["dipole", "charges", "wave"];

/// Enumeration of all available vector fields.
///
/// Wraps each field implementation and delegates `VectorField` sampling.
/// Use [`FieldKind::from_name`] for string-based construction (CLI).
pub enum FieldKind {
    /// Point-charge superposition.
    Charges(ChargeField),
    /// Closed-form trigonometric field.
    Wave(WaveField),
}

impl FieldKind {
    /// Constructs a field by name.
    ///
    /// `"dipole"` is the built-in two-charge configuration and ignores
    /// `params`; `"charges"` reads a `charges` array of
    /// `{x, y, magnitude}` objects from `params`; `"wave"` takes no
    /// parameters. Returns `LicError::UnknownField` if the name is not
    /// recognized and `LicError::InvalidFieldParams` if `params` does not
    /// match the field's expectations.
    pub fn from_name(name: &str, params: &Value) -> Result<Self, LicError> {
        match name {
            "dipole" => Ok(FieldKind::Charges(ChargeField::dipole())),
            "charges" => {
                let raw = params.get("charges").ok_or_else(|| {
                    LicError::InvalidFieldParams(
                        "charges field requires a `charges` array".to_string(),
                    )
                })?;
                let charges: Vec<Charge> = serde_json::from_value(raw.clone())
                    .map_err(|e| LicError::InvalidFieldParams(e.to_string()))?;
                if charges.is_empty() {
                    return Err(LicError::InvalidFieldParams(
                        "charges field requires at least one charge".to_string(),
                    ));
                }
                Ok(FieldKind::Charges(ChargeField::new(charges)))
            }
            "wave" => Ok(FieldKind::Wave(WaveField)),
            _ => Err(LicError::UnknownField(name.to_string())),
        }
    }

    /// Returns a slice of all recognized field names.
    pub fn list_fields() -> &'static [&'static str] {
        FIELD_NAMES
    }
}

impl VectorField for FieldKind {
    fn sample(&self, at: DVec2) -> FlowVector {
        match self {
            FieldKind::Charges(f) => f.sample(at),
            FieldKind::Wave(f) => f.sample(at),
        }
    }
}
