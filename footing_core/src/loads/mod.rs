//! Column loads and load combinations
//!
//! # Overview
//!
//! - [`LoadType`] - Dead and live load categories
//! - [`LoadSet`] - The service column load, split by type, in kgf
//! - [`LoadCombination`] - Factors for the service and strength combinations
//! - [`DesignMethod`] - Allowable-stress vs strength design
//!
//! # Example
//!
//! ```
//! use footing_core::loads::{DesignMethod, LoadSet};
//!
//! let loads = LoadSet::new(180_000.0, 65_000.0);
//! assert_eq!(DesignMethod::AllowableStress.combination().apply(&loads), 245_000.0);
//! assert_eq!(DesignMethod::Strength.combination().apply(&loads), 320_000.0);
//! ```

pub mod load_types;
pub mod combinations;

pub use load_types::LoadType;
pub use combinations::{
    LoadCombination,
    service_combination,
    strength_combination,
    STRENGTH_DEAD_FACTOR,
    STRENGTH_LIVE_FACTOR,
};

use serde::{Deserialize, Serialize};
use crate::errors::{CalcError, CalcResult};

/// Design methodology selection
///
/// The footing plan is sized with service loads against an allowable soil
/// pressure; the concrete is designed with factored loads and φ factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DesignMethod {
    /// Allowable stress design - service loads
    AllowableStress,
    /// Strength (limit-state) design - factored loads
    Strength,
}

impl DesignMethod {
    /// Short abbreviation
    pub fn code(&self) -> &'static str {
        match self {
            DesignMethod::AllowableStress => "ASD",
            DesignMethod::Strength => "USD",
        }
    }

    /// The load combination used with this method
    pub fn combination(&self) -> LoadCombination {
        match self {
            DesignMethod::AllowableStress => service_combination(),
            DesignMethod::Strength => strength_combination(),
        }
    }
}

impl std::fmt::Display for DesignMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Service column load by type, in kgf.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadSet {
    /// Dead load (kgf)
    pub dead_kgf: f64,
    /// Live load (kgf)
    pub live_kgf: f64,
}

impl LoadSet {
    /// Create a load set from dead and live loads in kgf
    pub fn new(dead_kgf: f64, live_kgf: f64) -> Self {
        LoadSet { dead_kgf, live_kgf }
    }

    /// Get the load value for a type
    pub fn get(&self, load_type: LoadType) -> f64 {
        match load_type {
            LoadType::Dead => self.dead_kgf,
            LoadType::Live => self.live_kgf,
        }
    }

    /// Total unfactored load D + L
    pub fn total_service(&self) -> f64 {
        DesignMethod::AllowableStress.combination().apply(self)
    }

    /// Total factored load 1.2D + 1.6L
    pub fn total_factored(&self) -> f64 {
        DesignMethod::Strength.combination().apply(self)
    }

    /// Validate the load set
    ///
    /// Both loads must be finite and non-negative, and the footing must carry something.
    pub fn validate(&self) -> CalcResult<()> {
        for load_type in LoadType::ALL {
            let value = self.get(load_type);
            if !value.is_finite() || value < 0.0 {
                return Err(CalcError::invalid_input(
                    format!("load_{}", load_type.code()),
                    value.to_string(),
                    format!("{} cannot be negative", load_type.description()),
                ));
            }
        }
        if self.total_service() <= 0.0 {
            return Err(CalcError::invalid_input(
                "load_D+L",
                self.total_service().to_string(),
                "Total service load must be positive to size a footing",
            ));
        }
        Ok(())
    }
}
