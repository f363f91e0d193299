//! # Footing Calculations
//!
//! The design pipeline for an isolated spread footing. Each stage follows the
//! pattern:
//!
//! - a result record (JSON-serializable, frozen once returned)
//! - a pure function taking earlier records and returning `CalcResult<record>`
//!
//! ## Stages
//!
//! - [`footing`] - Inputs, unit normalization and the end-to-end [`calculate`]
//! - [`sizing`] - Service-level plan sizing
//! - [`ultimate`] - Factored loads and pressures
//! - [`shear`] - One-way shear depth and thickness
//! - [`flexure`] - Compression block and required steel
//! - [`bar_spacing`] - Bar spacing table

pub mod bar_spacing;
pub mod flexure;
pub mod footing;
pub mod shear;
pub mod sizing;
pub mod ultimate;

// Re-export commonly used types
pub use bar_spacing::BarSpacingRow;
pub use flexure::FlexuralDesign;
pub use footing::{
    calculate, calculate_with, DesignWarning, FootingDesign, FootingInput, NormalizedInput,
    SectionGeometry, SoilGeometry,
};
pub use shear::ShearDesign;
pub use sizing::ServiceSizing;
pub use ultimate::UltimateState;
