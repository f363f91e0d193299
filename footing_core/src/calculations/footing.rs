//! # Spread Footing Design
//!
//! Runs the full design of an isolated square footing under axial load and an
//! eccentric moment, from service sizing through the bar spacing table.
//!
//! ## Pipeline
//!
//! ```text
//! FootingInput ──normalize──▶ NormalizedInput
//!     ──▶ sizing       (service, solve L, round to 50 cm)
//!     ──▶ ultimate     (1.2D + 1.6L pressures)
//!     ──▶ shear        (solve d, round h to 5 cm, re-derive d)
//!     ──▶ flexure      (solve y, Nc, As)
//!     ──▶ bar_spacing  (catalog table, round spacing down to 5 cm)
//! ```
//!
//! Data only flows forward. Every stage returns a frozen record and any error
//! aborts the whole run.
//!
//! ## Example
//!
//! ```rust
//! use footing_core::calculations::footing::{calculate, FootingInput};
//!
//! let input = FootingInput::default();
//! let design = calculate(&input).unwrap();
//!
//! assert_eq!(design.sizing.width_cm, 350.0);
//! assert_eq!(design.shear.thickness_cm, 60.0);
//! println!("As = {:.2} cm²", design.flexure.required_steel_area_cm2);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::loads::{DesignMethod, LoadSet};
use crate::materials::{MaterialProps, RebarSize};
use crate::solver::SolverSettings;
use crate::units::{
    Centimeters, Kgf, KgfPerCm2, KgfPerCm3, Meters, TonneForce, TonnePerM2, TonnePerM3,
};

use super::bar_spacing::{self, BarSpacingRow};
use super::flexure::{self, FlexuralDesign};
use super::shear::{self, ShearDesign};
use super::sizing::{self, ServiceSizing};
use super::ultimate::{self, UltimateState};

/// Input parameters for a spread footing, in entry units.
///
/// Loads are in tonne-force, soil pressures in Tn/m², unit weight in Tn/m³ and
/// soil lengths in metres. Material strengths and section dimensions are
/// already in kgf/cm² and cm and pass through unconverted.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Z-1",
///   "dead_load_tonf": 180.0,
///   "live_load_tonf": 65.0,
///   "allowable_bearing_tonf_m2": 38.0,
///   "concrete_strength_kgf_cm2": 210.0,
///   "steel_yield_kgf_cm2": 4200.0,
///   "allowable_steel_stress_tonf_m2": 0.5,
///   "eccentricity_m": 0.25,
///   "soil_unit_weight_tonf_m3": 2.1,
///   "foundation_depth_m": 1.7,
///   "cover_cm": 5.0,
///   "column_dim1_cm": 80.0,
///   "column_dim2_cm": 55.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootingInput {
    /// User label for this footing (e.g., "Z-1", "Footing at C-4")
    #[serde(default)]
    pub label: String,

    /// Service dead load (Tn)
    pub dead_load_tonf: f64,

    /// Service live load (Tn)
    pub live_load_tonf: f64,

    /// Allowable soil bearing pressure (Tn/m²)
    pub allowable_bearing_tonf_m2: f64,

    /// Concrete compressive strength f'c (kgf/cm²)
    pub concrete_strength_kgf_cm2: f64,

    /// Reinforcement yield strength fy (kgf/cm²)
    pub steel_yield_kgf_cm2: f64,

    /// Surcharge deducted from the allowable bearing (Tn/m²)
    pub allowable_steel_stress_tonf_m2: f64,

    /// Load eccentricity along the footing width (m)
    pub eccentricity_m: f64,

    /// Unit weight of soil and fill over the footing (Tn/m³)
    pub soil_unit_weight_tonf_m3: f64,

    /// Depth of the footing base below grade (m)
    pub foundation_depth_m: f64,

    /// Clear cover to the centroid of the bottom steel (cm)
    pub cover_cm: f64,

    /// Column dimension along the eccentricity direction t1 (cm)
    pub column_dim1_cm: f64,

    /// Column dimension perpendicular to t1 (cm)
    pub column_dim2_cm: f64,
}

impl Default for FootingInput {
    fn default() -> Self {
        FootingInput {
            label: "Z-1".to_string(),
            dead_load_tonf: 180.0,
            live_load_tonf: 65.0,
            allowable_bearing_tonf_m2: 38.0,
            concrete_strength_kgf_cm2: 210.0,
            steel_yield_kgf_cm2: 4200.0,
            allowable_steel_stress_tonf_m2: 0.5,
            eccentricity_m: 0.25,
            soil_unit_weight_tonf_m3: 2.1,
            foundation_depth_m: 1.7,
            cover_cm: 5.0,
            column_dim1_cm: 80.0,
            column_dim2_cm: 55.0,
        }
    }
}

fn require_non_negative(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Must be a non-negative number"));
    }
    Ok(())
}

fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Must be a positive number"));
    }
    Ok(())
}

impl FootingInput {
    /// Validate input parameters.
    ///
    /// Runs before any unit conversion or computation.
    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("dead_load_tonf", self.dead_load_tonf)?;
        require_non_negative("live_load_tonf", self.live_load_tonf)?;
        if self.dead_load_tonf + self.live_load_tonf <= 0.0 {
            return Err(CalcError::invalid_input(
                "dead_load_tonf",
                self.dead_load_tonf.to_string(),
                "Dead plus live load must be positive to size a footing",
            ));
        }
        require_non_negative("allowable_bearing_tonf_m2", self.allowable_bearing_tonf_m2)?;
        require_positive("concrete_strength_kgf_cm2", self.concrete_strength_kgf_cm2)?;
        require_positive("steel_yield_kgf_cm2", self.steel_yield_kgf_cm2)?;
        require_non_negative("allowable_steel_stress_tonf_m2", self.allowable_steel_stress_tonf_m2)?;
        require_non_negative("eccentricity_m", self.eccentricity_m)?;
        require_non_negative("soil_unit_weight_tonf_m3", self.soil_unit_weight_tonf_m3)?;
        require_non_negative("foundation_depth_m", self.foundation_depth_m)?;
        require_non_negative("cover_cm", self.cover_cm)?;
        require_positive("column_dim1_cm", self.column_dim1_cm)?;
        require_positive("column_dim2_cm", self.column_dim2_cm)?;
        Ok(())
    }

    /// Validate and convert to working units (kgf, cm).
    pub fn normalize(&self) -> CalcResult<NormalizedInput> {
        self.validate()?;

        let dead: Kgf = TonneForce(self.dead_load_tonf).into();
        let live: Kgf = TonneForce(self.live_load_tonf).into();
        let allowable: KgfPerCm2 = TonnePerM2(self.allowable_bearing_tonf_m2).into();
        let surcharge: KgfPerCm2 = TonnePerM2(self.allowable_steel_stress_tonf_m2).into();
        let gamma: KgfPerCm3 = TonnePerM3(self.soil_unit_weight_tonf_m3).into();
        let depth: Centimeters = Meters(self.foundation_depth_m).into();
        let eccentricity: Centimeters = Meters(self.eccentricity_m).into();

        let normalized = NormalizedInput {
            loads: LoadSet::new(dead.value(), live.value()),
            soil: SoilGeometry {
                allowable_bearing: allowable.value(),
                soil_unit_weight: gamma.value(),
                foundation_depth_cm: depth.value(),
                eccentricity_cm: eccentricity.value(),
            },
            materials: MaterialProps::new(
                self.concrete_strength_kgf_cm2,
                self.steel_yield_kgf_cm2,
                surcharge.value(),
            ),
            section: SectionGeometry {
                column_dim1_cm: self.column_dim1_cm,
                column_dim2_cm: self.column_dim2_cm,
                cover_cm: self.cover_cm,
            },
        };

        normalized.loads.validate()?;
        normalized.materials.validate()?;
        Ok(normalized)
    }
}

/// Soil and load-position data in working units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilGeometry {
    /// Allowable bearing pressure qa (kgf/cm²)
    pub allowable_bearing: f64,

    /// Soil unit weight γ (kgf/cm³)
    pub soil_unit_weight: f64,

    /// Foundation depth Df (cm)
    pub foundation_depth_cm: f64,

    /// Load eccentricity e (cm)
    pub eccentricity_cm: f64,
}

/// Column footprint and cover in cm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionGeometry {
    /// Column dimension along the footing width t1 (cm)
    pub column_dim1_cm: f64,

    /// Column dimension along the footing length t2 (cm)
    pub column_dim2_cm: f64,

    /// Cover to the steel centroid (cm)
    pub cover_cm: f64,
}

/// All inputs converted once into working units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedInput {
    pub loads: LoadSet,
    pub soil: SoilGeometry,
    pub materials: MaterialProps,
    pub section: SectionGeometry,
}

/// Non-fatal findings worth showing next to the results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DesignWarning {
    /// The minimum edge pressure is negative (tension under the footing)
    Uplift {
        method: DesignMethod,
        pressure: f64,
    },
    /// A bar's theoretical spacing is tighter than the 5 cm modulus
    SpacingBelowModulus {
        bar: RebarSize,
        theoretical_spacing_cm: f64,
    },
}

impl DesignWarning {
    /// Human-readable message
    pub fn message(&self) -> String {
        match self {
            DesignWarning::Uplift { method, pressure } => format!(
                "{}: minimum edge pressure {:.3} kgf/cm² is negative (uplift at one edge)",
                method.code(),
                pressure
            ),
            DesignWarning::SpacingBelowModulus { bar, theoretical_spacing_cm } => format!(
                "{}: theoretical spacing {:.2} cm is below the 5 cm modulus; use a larger bar",
                bar, theoretical_spacing_cm
            ),
        }
    }
}

impl std::fmt::Display for DesignWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Complete design results, one record per stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootingDesign {
    /// Service sizing: P, M, qn, B, L, q1, q2
    pub sizing: ServiceSizing,

    /// Factored state: Pu, Mu, qu1, qu2
    pub ultimate: UltimateState,

    /// Shear design: h, d, bo, Vu
    pub shear: ShearDesign,

    /// Flexural design: Nc, As
    pub flexure: FlexuralDesign,

    /// Bar spacing table in catalog order
    pub bar_spacing: Vec<BarSpacingRow>,

    /// Diagnostics that did not stop the run
    pub warnings: Vec<DesignWarning>,
}

impl FootingDesign {
    /// Look up the spacing row for a bar size
    pub fn spacing_for(&self, bar: RebarSize) -> Option<&BarSpacingRow> {
        self.bar_spacing.iter().find(|row| row.bar == bar)
    }
}

/// Design a footing with default solver settings.
///
/// # Errors
///
/// Any [`CalcError`]; no partial results are returned.
pub fn calculate(input: &FootingInput) -> CalcResult<FootingDesign> {
    calculate_with(input, &SolverSettings::default())
}

/// Design a footing with explicit solver settings.
pub fn calculate_with(input: &FootingInput, settings: &SolverSettings) -> CalcResult<FootingDesign> {
    let span = tracing::info_span!("footing_design", label = %input.label);
    let _guard = span.enter();

    settings.validate()?;
    let NormalizedInput { loads, soil, materials, section } = input.normalize()?;

    let sizing = sizing::size_footing(&loads, &soil, &materials, settings)?;
    let ultimate = ultimate::evaluate_ultimate(&loads, &soil, &sizing);
    let shear = shear::design_shear(&sizing, &ultimate, &section, &materials, settings)?;
    let flexure = flexure::design_flexure(&sizing, &ultimate, &section, &shear, &materials, settings)?;
    let bar_spacing = bar_spacing::tabulate(flexure.required_steel_area_cm2, sizing.width_cm);

    let warnings = collect_warnings(&sizing, &ultimate, &bar_spacing);
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    tracing::info!(
        side_cm = sizing.width_cm,
        thickness_cm = shear.thickness_cm,
        steel_area_cm2 = flexure.required_steel_area_cm2,
        "footing design complete"
    );

    Ok(FootingDesign {
        sizing,
        ultimate,
        shear,
        flexure,
        bar_spacing,
        warnings,
    })
}

fn collect_warnings(sizing: &ServiceSizing, ultimate: &UltimateState, rows: &[BarSpacingRow]) -> Vec<DesignWarning> {
    let mut warnings = Vec::new();
    if sizing.has_uplift() {
        warnings.push(DesignWarning::Uplift {
            method: DesignMethod::AllowableStress,
            pressure: sizing.min_edge_pressure,
        });
    }
    if ultimate.has_uplift() {
        warnings.push(DesignWarning::Uplift {
            method: DesignMethod::Strength,
            pressure: ultimate.min_factored_pressure,
        });
    }
    warnings.extend(rows.iter().filter(|row| row.is_below_modulus()).map(|row| {
        DesignWarning::SpacingBelowModulus {
            bar: row.bar,
            theoretical_spacing_cm: row.theoretical_spacing_cm,
        }
    }));
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_normalize_reference_input() {
        let n = FootingInput::default().normalize().unwrap();
        assert_eq!(n.loads.dead_kgf, 180_000.0);
        assert_eq!(n.loads.live_kgf, 65_000.0);
        assert!(approx_eq(n.soil.allowable_bearing, 3.8, 1e-12));
        assert!(approx_eq(n.soil.soil_unit_weight, 0.0021, 1e-15));
        assert!(approx_eq(n.soil.foundation_depth_cm, 170.0, 1e-9));
        assert_eq!(n.soil.eccentricity_cm, 25.0);
        assert!(approx_eq(n.materials.allowable_steel_stress, 0.05, 1e-12));
        // Strengths and section dimensions pass through untouched
        assert_eq!(n.materials.concrete_strength, 210.0);
        assert_eq!(n.section.cover_cm, 5.0);
    }

    #[test]
    fn test_reference_design() {
        let design = calculate(&FootingInput::default()).unwrap();

        assert_eq!(design.sizing.service_load_kgf, 245_000.0);
        assert_eq!(design.sizing.service_moment_kgf_cm, 6_125_000.0);
        assert_eq!(design.sizing.width_cm, 350.0);
        assert_eq!(design.ultimate.factored_load_kgf, 320_000.0);
        assert_eq!(design.shear.thickness_cm, 60.0);
        assert_eq!(design.shear.effective_depth_cm, 55.0);
        assert_eq!(design.shear.punching_perimeter_cm, 490.0);
        assert!(approx_eq(design.flexure.required_steel_area_cm2, 53.739, 0.01));
        assert_eq!(design.bar_spacing.len(), 5);
        assert!(design.warnings.is_empty());
    }

    #[test]
    fn test_zero_concrete_strength_rejected_before_solving() {
        let input = FootingInput {
            concrete_strength_kgf_cm2: 0.0,
            ..FootingInput::default()
        };
        match calculate(&input).unwrap_err() {
            CalcError::InvalidInput { field, .. } => assert_eq!(field, "concrete_strength_kgf_cm2"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_negative_live_load_rejected() {
        let input = FootingInput {
            live_load_tonf: -5.0,
            ..FootingInput::default()
        };
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_nan_input_rejected() {
        let input = FootingInput {
            eccentricity_m: f64::NAN,
            ..FootingInput::default()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_uplift_is_a_warning_not_an_error() {
        // e = 0.7 m > B/6 for the adopted plan
        let input = FootingInput {
            eccentricity_m: 0.7,
            ..FootingInput::default()
        };
        let design = calculate(&input).unwrap();
        assert!(design
            .warnings
            .iter()
            .any(|w| matches!(w, DesignWarning::Uplift { .. })));
    }

    #[test]
    fn test_spacing_lookup() {
        let design = calculate(&FootingInput::default()).unwrap();
        let row = design.spacing_for(RebarSize::D20).unwrap();
        assert_eq!(row.adopted_spacing_cm, 20.0);
    }

    #[test]
    fn test_input_json_roundtrip() {
        let input = FootingInput::default();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: FootingInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
