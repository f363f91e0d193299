//! Load combinations for footing design
//!
//! Two combinations drive the whole run:
//!
//! - **Service** (D + L): unfactored, used to size the footing plan against
//!   the allowable soil pressure.
//! - **Strength** (1.2D + 1.6L): factored, used for shear and flexural design
//!   of the concrete.
//!
//! The factors are fixed. They are not user-configurable.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use super::load_types::LoadType;
use super::LoadSet;

/// Dead load factor in the strength combination
pub const STRENGTH_DEAD_FACTOR: f64 = 1.2;

/// Live load factor in the strength combination
pub const STRENGTH_LIVE_FACTOR: f64 = 1.6;

/// A load combination with factors for each load type
///
/// # Example
/// ```
/// use footing_core::loads::{strength_combination, LoadSet};
///
/// let loads = LoadSet::new(180_000.0, 65_000.0);
/// assert_eq!(strength_combination().apply(&loads), 320_000.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadCombination {
    /// Combination identifier (e.g., "SERVICE", "STRENGTH")
    pub name: String,

    /// Human-readable equation for display (e.g., "1.2D + 1.6L")
    pub equation: String,

    /// Load factors keyed by load type
    pub factors: HashMap<LoadType, f64>,
}

impl LoadCombination {
    /// Create a new load combination
    pub fn new(name: impl Into<String>, equation: impl Into<String>) -> Self {
        LoadCombination {
            name: name.into(),
            equation: equation.into(),
            factors: HashMap::new(),
        }
    }

    /// Add a load factor (builder pattern)
    pub fn with_factor(mut self, load_type: LoadType, factor: f64) -> Self {
        self.factors.insert(load_type, factor);
        self
    }

    /// Apply this combination to a LoadSet, returning the total combined load
    ///
    /// Load types not in the combination are treated as having factor 0.
    pub fn apply(&self, loads: &LoadSet) -> f64 {
        LoadType::ALL
            .iter()
            .map(|load_type| self.get_factor(*load_type) * loads.get(*load_type))
            .sum()
    }

    /// Get the factor for a specific load type (0.0 if not in combination)
    pub fn get_factor(&self, load_type: LoadType) -> f64 {
        self.factors.get(&load_type).copied().unwrap_or(0.0)
    }
}

/// Unfactored service combination D + L
pub fn service_combination() -> LoadCombination {
    LoadCombination::new("SERVICE", "D + L")
        .with_factor(LoadType::Dead, 1.0)
        .with_factor(LoadType::Live, 1.0)
}

/// Strength-design combination 1.2D + 1.6L (ACI 318-19 Eq. 5.3.1b)
pub fn strength_combination() -> LoadCombination {
    LoadCombination::new("STRENGTH", "1.2D + 1.6L")
        .with_factor(LoadType::Dead, STRENGTH_DEAD_FACTOR)
        .with_factor(LoadType::Live, STRENGTH_LIVE_FACTOR)
}
