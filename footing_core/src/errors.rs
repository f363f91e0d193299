//! # Error Types
//!
//! Structured error types for footing_core. Every error is fatal to the
//! design run that raised it: no partial results are returned. Each variant
//! carries enough context for a caller to tell the user which input to
//! change before running again.
//!
//! ## Example
//!
//! ```rust
//! use footing_core::errors::{CalcError, CalcResult};
//!
//! fn validate_cover(cover_cm: f64) -> CalcResult<()> {
//!     if cover_cm < 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "cover_cm",
//!             cover_cm.to_string(),
//!             "Cover cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_cover(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for footing_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for footing design runs.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is outside its domain (negative load, zero strength, ...)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// No positive footing size satisfies the bearing equation
    #[error("Footing sizing infeasible: {reason}")]
    SizingInfeasible { reason: String },

    /// A root-finding stage ran out of iterations
    #[error("Solver did not converge in stage '{stage}' after {iterations} iterations")]
    SolverDivergence { stage: String, iterations: usize },

    /// The section cannot carry the demand with the adopted geometry
    #[error("Section infeasible in stage '{stage}': {reason}")]
    SectionInfeasible { stage: String, reason: String },

    /// File I/O error while loading a design configuration
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// TOML/JSON serialization or deserialization error
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

    /// Create a SizingInfeasible error
    pub fn sizing_infeasible(reason: impl Into<String>) -> Self {
        CalcError::SizingInfeasible {
            reason: reason.into(),
        }
    }

    /// Create a SolverDivergence error
    pub fn solver_divergence(stage: impl Into<String>, iterations: usize) -> Self {
        CalcError::SolverDivergence {
            stage: stage.into(),
            iterations,
        }
    }

    /// Create a SectionInfeasible error
    pub fn section_infeasible(stage: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::SectionInfeasible {
            stage: stage.into(),
            reason: reason.into(),
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

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// True when the run failed because of the design itself rather than bad input.
    ///
    /// The remedy for these is larger dimensions or a stronger material, not a typo fix.
    pub fn is_design_inadequacy(&self) -> bool {
        matches!(
            self,
            CalcError::SizingInfeasible { .. } | CalcError::SectionInfeasible { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::SizingInfeasible { .. } => "SIZING_INFEASIBLE",
            CalcError::SolverDivergence { .. } => "SOLVER_DIVERGENCE",
            CalcError::SectionInfeasible { .. } => "SECTION_INFEASIBLE",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<toml::de::Error> for CalcError {
    fn from(err: toml::de::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}
