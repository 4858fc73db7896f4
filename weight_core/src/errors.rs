//! # Error Types
//!
//! Structured error types for weight_core. The weight calculation itself never
//! fails: malformed numbers normalize to zero and missing fields simply
//! withhold a result. These errors cover the edges of the crate instead:
//! parsing identifiers and unit symbols, validating CLI input, and loading
//! settings files.
//!
//! ## Example
//!
//! ```rust
//! use weight_core::errors::{CalcError, CalcResult};
//!
//! fn validate_quantity(qty: i64) -> CalcResult<u32> {
//!     if qty < 0 {
//!         return Err(CalcError::invalid_input(
//!             "quantity",
//!             qty.to_string(),
//!             "Quantity cannot be negative",
//!         ));
//!     }
//!     Ok(qty as u32)
//! }
//!
//! assert!(validate_quantity(-1).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for weight_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for parsing and configuration operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Profile formula identifier is not part of the catalog
    #[error("Unknown formula: {id}")]
    UnknownFormula { id: String },

    /// Length or density unit symbol could not be recognized
    #[error("Unknown unit: {unit}")]
    UnknownUnit { unit: String },

    /// Dimension key is not one of the known short keys
    #[error("Unknown dimension key: {key}")]
    UnknownDimension { key: String },

    /// Material not found in the density catalog
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
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

    /// Create an UnknownFormula error
    pub fn unknown_formula(id: impl Into<String>) -> Self {
        CalcError::UnknownFormula { id: id.into() }
    }

    /// Create an UnknownUnit error
    pub fn unknown_unit(unit: impl Into<String>) -> Self {
        CalcError::UnknownUnit { unit: unit.into() }
    }

    /// Create an UnknownDimension error
    pub fn unknown_dimension(key: impl Into<String>) -> Self {
        CalcError::UnknownDimension { key: key.into() }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::UnknownFormula { .. } => "UNKNOWN_FORMULA",
            CalcError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            CalcError::UnknownDimension { .. } => "UNKNOWN_DIMENSION",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}
