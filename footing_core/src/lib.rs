//! # footing_core - Spread Footing Design Engine
//!
//! `footing_core` designs isolated, eccentrically loaded spread footings:
//! plan size from the allowable soil pressure, thickness from one-way shear,
//! required flexural steel and a bar spacing table. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Bracketed Solvers**: Every nonlinear stage is solved inside a sign-change bracket
//!
//! ## Quick Start
//!
//! ```rust
//! use footing_core::{calculate, FootingInput};
//!
//! let design = calculate(&FootingInput::default()).unwrap();
//! assert_eq!(design.sizing.width_cm, 350.0);
//! assert_eq!(design.shear.thickness_cm % 5.0, 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The design pipeline, stage by stage
//! - [`equations`] - Closed-form bearing, concrete and detailing relations
//! - [`solver`] - Safeguarded Newton-Raphson root finder
//! - [`loads`] - Load cases and ASD/USD combinations
//! - [`materials`] - Concrete/steel properties and the rebar catalog
//! - [`units`] - Type-safe unit wrappers and conversions
//! - [`config`] - TOML/JSON design files
//! - [`report`] - Text and JSON reports
//! - [`logging`] - `tracing` subscriber setup
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod config;
pub mod equations;
pub mod errors;
pub mod loads;
pub mod logging;
pub mod materials;
pub mod report;
pub mod solver;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, calculate_with, DesignWarning, FootingDesign, FootingInput};
pub use config::DesignConfig;
pub use errors::{CalcError, CalcResult};
pub use report::DesignReport;
pub use solver::SolverSettings;
