//! Design configuration files.
//!
//! A configuration holds one footing input and, optionally, solver settings.
//! TOML and JSON are both accepted; the format is picked from the extension.
//!
//! ```toml
//! [footing]
//! label = "Z-1"
//! dead_load_tonf = 180.0
//! live_load_tonf = 65.0
//! allowable_bearing_tonf_m2 = 38.0
//! concrete_strength_kgf_cm2 = 210.0
//! steel_yield_kgf_cm2 = 4200.0
//! allowable_steel_stress_tonf_m2 = 0.5
//! eccentricity_m = 0.25
//! soil_unit_weight_tonf_m3 = 2.1
//! foundation_depth_m = 1.7
//! cover_cm = 5.0
//! column_dim1_cm = 80.0
//! column_dim2_cm = 55.0
//!
//! [solver]
//! tolerance = 1e-6
//! max_iterations = 100
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::calculations::footing::FootingInput;
use crate::errors::{CalcError, CalcResult};
use crate::solver::SolverSettings;

/// A single design run, as read from disk
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DesignConfig {
    pub footing: FootingInput,

    #[serde(default)]
    pub solver: SolverSettings,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            footing: FootingInput::default(),
            solver: SolverSettings::default(),
        }
    }
}

impl DesignConfig {
    /// Load a configuration from a `.toml` or `.json` file
    pub fn load_from(path: &Path) -> CalcResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&contents)?,
            Some("toml") | None => Self::from_toml_str(&contents)?,
            Some(other) => {
                return Err(CalcError::file_error(
                    "read",
                    path.display().to_string(),
                    format!("unsupported extension '.{}', expected .toml or .json", other),
                ))
            }
        };

        tracing::info!("Loaded design config from {:?}", path);
        Ok(config)
    }

    /// Parse a TOML configuration
    pub fn from_toml_str(contents: &str) -> CalcResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Parse a JSON configuration
    pub fn from_json_str(contents: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(contents)?)
    }
}
