//! # Ultimate-Load Evaluation
//!
//! Factors the column load with 1.2D + 1.6L and recomputes the edge pressures
//! under the adopted footing plan. No solving happens here.
//!
//! The factored moment reuses the service eccentricity: Mu = Pu·e. Dead and
//! live moments are not factored separately.

use serde::{Deserialize, Serialize};

use crate::equations::edge_pressures;
use crate::loads::LoadSet;
use crate::units::{Centimeters, Kgf};

use super::footing::SoilGeometry;
use super::sizing::ServiceSizing;

/// Factored loads and soil pressures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UltimateState {
    /// Factored axial load Pu = 1.2D + 1.6L (kgf)
    pub factored_load_kgf: f64,

    /// Factored moment Mu = Pu·e (kgf·cm)
    pub factored_moment_kgf_cm: f64,

    /// Minimum factored edge pressure qu1 (kgf/cm²)
    pub min_factored_pressure: f64,

    /// Maximum factored edge pressure qu2 (kgf/cm²)
    pub max_factored_pressure: f64,
}

impl UltimateState {
    /// True when qu1 < 0
    pub fn has_uplift(&self) -> bool {
        self.min_factored_pressure < 0.0
    }
}

/// Evaluate factored loads and pressures for the adopted plan size.
pub fn evaluate_ultimate(loads: &LoadSet, soil: &SoilGeometry, sizing: &ServiceSizing) -> UltimateState {
    let pu = loads.total_factored();
    let mu = (Kgf(pu) * Centimeters(soil.eccentricity_cm)).value();
    let (qu1, qu2) = edge_pressures(pu, mu, sizing.width_cm, sizing.length_cm);

    tracing::debug!(pu, mu, qu1, qu2, "ultimate pressures evaluated");

    UltimateState {
        factored_load_kgf: pu,
        factored_moment_kgf_cm: mu,
        min_factored_pressure: qu1,
        max_factored_pressure: qu2,
    }
}
