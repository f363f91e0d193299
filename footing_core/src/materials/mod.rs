//! # Materials
//!
//! Concrete and reinforcing steel properties for footing design, plus the
//! bar catalog used for spacing tables.
//!
//! ## Example
//!
//! ```rust
//! use footing_core::materials::{MaterialProps, RebarSize};
//!
//! let props = MaterialProps::new(210.0, 4200.0, 0.05);
//! assert!(props.validate().is_ok());
//! assert_eq!(RebarSize::D16.area_cm2(), 2.01);
//! ```

pub mod rebar;

pub use rebar::RebarSize;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Material properties in working units (kgf/cm²).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProps {
    /// Specified concrete compressive strength f'c (kgf/cm²)
    pub concrete_strength: f64,

    /// Reinforcement yield strength fy (kgf/cm²)
    pub steel_yield_strength: f64,

    /// Surcharge pressure deducted from the allowable bearing (kgf/cm²)
    pub allowable_steel_stress: f64,
}

impl MaterialProps {
    /// Create material properties from working-unit values
    pub fn new(concrete_strength: f64, steel_yield_strength: f64, allowable_steel_stress: f64) -> Self {
        MaterialProps {
            concrete_strength,
            steel_yield_strength,
            allowable_steel_stress,
        }
    }

    /// Validate material properties.
    ///
    /// f'c sits under a square root and fy is a divisor, so both must be
    /// strictly positive. The surcharge only has to be non-negative.
    pub fn validate(&self) -> CalcResult<()> {
        self.check_concrete_strength()?;
        self.check_steel_yield_strength()?;
        if !self.allowable_steel_stress.is_finite() || self.allowable_steel_stress < 0.0 {
            return Err(CalcError::invalid_input(
                "allowable_steel_stress",
                self.allowable_steel_stress.to_string(),
                "Surcharge stress cannot be negative",
            ));
        }
        Ok(())
    }

    /// Guard for f'c, used again by the shear and flexure stages
    pub fn check_concrete_strength(&self) -> CalcResult<()> {
        if !self.concrete_strength.is_finite() || self.concrete_strength <= 0.0 {
            return Err(CalcError::invalid_input(
                "concrete_strength",
                self.concrete_strength.to_string(),
                "Concrete strength must be positive",
            ));
        }
        Ok(())
    }

    /// Guard for fy, used again by the flexure stage
    pub fn check_steel_yield_strength(&self) -> CalcResult<()> {
        if !self.steel_yield_strength.is_finite() || self.steel_yield_strength <= 0.0 {
            return Err(CalcError::invalid_input(
                "steel_yield_strength",
                self.steel_yield_strength.to_string(),
                "Steel yield strength must be positive",
            ));
        }
        Ok(())
    }
}
