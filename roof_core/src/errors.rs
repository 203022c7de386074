//! # Error Types
//!
//! Structured error types for roof_core. Estimation itself never fails hard:
//! missing or unusable input is reported as [`CalcError::InsufficientInput`] or
//! [`CalcError::MaterialNotFound`], which callers usually collapse into a
//! "not applicable" outcome. Catalog loading has its own variants.
//!
//! ## Example
//!
//! ```rust
//! use roof_core::errors::{CalcError, CalcResult};
//!
//! fn validate_area(area_sqft: f64) -> CalcResult<()> {
//!     if area_sqft <= 0.0 {
//!         return Err(CalcError::insufficient_input(
//!             "area_sqft",
//!             "Roof area must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_area(0.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for roof_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for estimation and catalog operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Required input is absent or not usable for an estimate (zero area, blank material)
    #[error("Insufficient input for '{field}': {reason}")]
    InsufficientInput { field: String, reason: String },

    /// An input value is invalid (out of range, malformed, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Material code is not offered for the requested category
    #[error("Material not found: '{material}' is not offered for {category} roofs")]
    MaterialNotFound { category: String, material: String },

    /// A pricing catalog file could not be read or parsed
    #[error("Catalog load failed: '{source_name}' - {reason}")]
    CatalogLoad { source_name: String, reason: String },
}

impl CalcError {
    /// Create an InsufficientInput error
    pub fn insufficient_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InsufficientInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(category: impl Into<String>, material: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            category: category.into(),
            material: material.into(),
        }
    }

    /// Create a CatalogLoad error
    pub fn catalog_load(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::CatalogLoad {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// True for the "not applicable" outcomes of an estimate.
    ///
    /// These are expected while a caller is still collecting input and should
    /// be shown as a prompt for more data rather than as a failure.
    pub fn is_not_applicable(&self) -> bool {
        matches!(
            self,
            CalcError::InsufficientInput { .. } | CalcError::MaterialNotFound { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InsufficientInput { .. } => "INSUFFICIENT_INPUT",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::CatalogLoad { .. } => "CATALOG_LOAD",
        }
    }
}
