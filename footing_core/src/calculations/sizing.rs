//! # Service-Level Footing Sizing
//!
//! Sizes a square footing (B = L) so that the maximum soil pressure under the
//! service load equals the net allowable pressure, then rounds the side up to
//! the 50 cm plan modulus.
//!
//! ## Procedure
//!
//! 1. P = D + L, M = P·e
//! 2. qn = qa − γ·Df − s/c
//! 3. Solve q2(L) = P/L² + 6M/L³ = qn for L, as q2/qn − 1 = 0
//! 4. L = ⌈L/50⌉·50, B = L
//! 5. Re-evaluate q1 and q2 at the adopted size
//!
//! q2(L) is strictly decreasing for L > 0, so the root is unique once it is
//! bracketed. Since q2(L) ≥ P/L², the root lies above √(P/qn); half of that
//! is the lower end of the bracket, where q2 ≥ 4·qn.

use serde::{Deserialize, Serialize};

use crate::equations::{
    edge_pressures, net_allowable_pressure, overburden_pressure, round_up_to,
    square_max_edge_pressure, square_max_edge_pressure_slope, PLAN_MODULUS_CM,
};
use crate::errors::{CalcError, CalcResult};
use crate::loads::LoadSet;
use crate::materials::MaterialProps;
use crate::solver::{expand_upper_bracket, solve_bracketed, SolverSettings};
use crate::units::{Centimeters, Kgf};

use super::footing::SoilGeometry;

/// Stage name used in solver diagnostics
pub const STAGE: &str = "service sizing";

/// Starting guess for the side length (cm)
pub const SIZING_SEED_CM: f64 = 1000.0;

/// Results of the service-level sizing stage.
///
/// ## JSON Example
///
/// ```json
/// {
///   "service_load_kgf": 245000.0,
///   "service_moment_kgf_cm": 6125000.0,
///   "overburden_pressure": 0.357,
///   "net_allowable_pressure": 3.393,
///   "raw_side_length_cm": 324.88,
///   "width_cm": 350.0,
///   "length_cm": 350.0,
///   "min_edge_pressure": 1.14,
///   "max_edge_pressure": 2.86
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServiceSizing {
    /// Service axial load P = D + L (kgf)
    pub service_load_kgf: f64,

    /// Service moment M = P·e (kgf·cm)
    pub service_moment_kgf_cm: f64,

    /// Overburden pressure γ·Df (kgf/cm²)
    pub overburden_pressure: f64,

    /// Net allowable pressure qn (kgf/cm²)
    pub net_allowable_pressure: f64,

    /// Side length straight from the solver, before rounding (cm)
    pub raw_side_length_cm: f64,

    /// Adopted width B (cm)
    pub width_cm: f64,

    /// Adopted length L (cm), equal to B
    pub length_cm: f64,

    /// Minimum edge pressure q1 at the adopted size (kgf/cm²)
    pub min_edge_pressure: f64,

    /// Maximum edge pressure q2 at the adopted size (kgf/cm²)
    pub max_edge_pressure: f64,
}

impl ServiceSizing {
    /// True when q1 < 0, i.e. the linear pressure formula predicts tension at one edge
    pub fn has_uplift(&self) -> bool {
        self.min_edge_pressure < 0.0
    }
}

/// Size the footing plan for service loads.
///
/// # Errors
///
/// - [`CalcError::SizingInfeasible`] if qn ≤ 0 or no side length within the
///   bracket search satisfies the bearing equation
/// - [`CalcError::SolverDivergence`] if the root finder runs out of iterations
pub fn size_footing(
    loads: &LoadSet,
    soil: &SoilGeometry,
    materials: &MaterialProps,
    settings: &SolverSettings,
) -> CalcResult<ServiceSizing> {
    let p = loads.total_service();
    let m = (Kgf(p) * Centimeters(soil.eccentricity_cm)).value();

    let q = overburden_pressure(soil.soil_unit_weight, soil.foundation_depth_cm);
    let qn = net_allowable_pressure(soil.allowable_bearing, q, materials.allowable_steel_stress);

    if qn <= 0.0 {
        return Err(CalcError::sizing_infeasible(format!(
            "net allowable pressure qn = {:.4} kgf/cm² is not positive; overburden ({:.4}) and surcharge ({:.4}) consume the allowable bearing ({:.4})",
            qn, q, materials.allowable_steel_stress, soil.allowable_bearing
        )));
    }

    // Scaled by qn so the tolerance is relative to the soil capacity
    let residual = |l: f64| square_max_edge_pressure(p, m, l) / qn - 1.0;
    let slope = |l: f64| square_max_edge_pressure_slope(p, m, l) / qn;

    let lo = 0.5 * (p / qn).sqrt();
    let start = SIZING_SEED_CM.max(lo);
    let hi = expand_upper_bracket(residual, lo, start, settings).ok_or_else(|| {
        CalcError::sizing_infeasible(format!(
            "no side length up to {:.0} cm brings the edge pressure down to qn = {:.4} kgf/cm²",
            start * 2f64.powi(settings.max_bracket_expansions as i32),
            qn
        ))
    })?;

    let root = solve_bracketed(STAGE, residual, slope, (lo, hi), SIZING_SEED_CM, settings)?;
    let raw = root.value;

    let side = round_up_to(raw, PLAN_MODULUS_CM);
    let (q1, q2) = edge_pressures(p, m, side, side);

    tracing::debug!(
        p, m, qn, raw_side_cm = raw, side_cm = side, q1, q2,
        iterations = root.iterations,
        "service sizing complete"
    );

    Ok(ServiceSizing {
        service_load_kgf: p,
        service_moment_kgf_cm: m,
        overburden_pressure: q,
        net_allowable_pressure: qn,
        raw_side_length_cm: raw,
        width_cm: side,
        length_cm: side,
        min_edge_pressure: q1,
        max_edge_pressure: q2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    fn reference_soil() -> SoilGeometry {
        SoilGeometry {
            allowable_bearing: 3.8,
            soil_unit_weight: 0.0021,
            foundation_depth_cm: 170.0,
            eccentricity_cm: 25.0,
        }
    }

    fn reference_materials() -> MaterialProps {
        MaterialProps::new(210.0, 4200.0, 0.05)
    }

    #[test]
    fn test_reference_sizing() {
        let loads = LoadSet::new(180_000.0, 65_000.0);
        let sizing = size_footing(&loads, &reference_soil(), &reference_materials(), &SolverSettings::default())
            .unwrap();

        assert_eq!(sizing.service_load_kgf, 245_000.0);
        assert_eq!(sizing.service_moment_kgf_cm, 6_125_000.0);
        assert!(approx_eq(sizing.net_allowable_pressure, 3.393, 1e-9));

        // Raw root near 324.88 cm, adopted 350 cm
        assert!(approx_eq(sizing.raw_side_length_cm, 324.879, 0.01));
        assert_eq!(sizing.width_cm, 350.0);
        assert_eq!(sizing.length_cm, 350.0);

        // q1 = 2.0 - 0.857, q2 = 2.0 + 0.857
        assert!(approx_eq(sizing.min_edge_pressure, 1.142_857, 1e-5));
        assert!(approx_eq(sizing.max_edge_pressure, 2.857_143, 1e-5));
        assert!(!sizing.has_uplift());
    }

    #[test]
    fn test_raw_root_satisfies_bearing_equation() {
        let loads = LoadSet::new(180_000.0, 65_000.0);
        let settings = SolverSettings::default();
        let sizing = size_footing(&loads, &reference_soil(), &reference_materials(), &settings).unwrap();
        let q2_raw = square_max_edge_pressure(
            sizing.service_load_kgf,
            sizing.service_moment_kgf_cm,
            sizing.raw_side_length_cm,
        );
        assert!(approx_eq(q2_raw, sizing.net_allowable_pressure, 1e-4));
    }

    #[test]
    fn test_concentric_load() {
        let mut soil = reference_soil();
        soil.eccentricity_cm = 0.0;
        let loads = LoadSet::new(180_000.0, 65_000.0);
        let sizing = size_footing(&loads, &soil, &reference_materials(), &SolverSettings::default()).unwrap();

        // L = sqrt(245000 / 3.393) = 268.7 cm -> 300 cm
        assert!(approx_eq(sizing.raw_side_length_cm, (245_000.0f64 / 3.393).sqrt(), 0.01));
        assert_eq!(sizing.width_cm, 300.0);
        assert_eq!(sizing.min_edge_pressure, sizing.max_edge_pressure);
    }

    #[test]
    fn test_exhausted_bearing_is_infeasible() {
        let mut soil = reference_soil();
        soil.allowable_bearing = 0.3; // below overburden 0.357
        let loads = LoadSet::new(180_000.0, 65_000.0);
        let err = size_footing(&loads, &soil, &reference_materials(), &SolverSettings::default()).unwrap_err();
        assert_eq!(err.error_code(), "SIZING_INFEASIBLE");
    }

    #[test]
    fn test_qn_exactly_zero_is_infeasible() {
        let soil = SoilGeometry {
            allowable_bearing: 0.5,
            soil_unit_weight: 0.0,
            foundation_depth_cm: 0.0,
            eccentricity_cm: 0.0,
        };
        let materials = MaterialProps::new(210.0, 4200.0, 0.5);
        let loads = LoadSet::new(1000.0, 0.0);
        assert!(matches!(
            size_footing(&loads, &soil, &materials, &SolverSettings::default()),
            Err(CalcError::SizingInfeasible { .. })
        ));
    }

    #[test]
    fn test_tiny_load_sizes_to_one_modulus() {
        let mut soil = reference_soil();
        soil.eccentricity_cm = 0.0;
        // 1e-9 Tn: the exact side is about 5.4e-4 cm
        let loads = LoadSet::new(1e-6, 0.0);
        let sizing = size_footing(&loads, &soil, &reference_materials(), &SolverSettings::default()).unwrap();

        let exact = (1e-6f64 / 3.393).sqrt();
        assert!(approx_eq(sizing.raw_side_length_cm, exact, 1e-5));
        assert!(sizing.raw_side_length_cm > 0.0);
        assert_eq!(sizing.width_cm, PLAN_MODULUS_CM);
    }

    #[test]
    fn test_small_net_pressure_still_solves() {
        let soil = SoilGeometry {
            allowable_bearing: 1e-9,
            soil_unit_weight: 0.0,
            foundation_depth_cm: 0.0,
            eccentricity_cm: 0.0,
        };
        let materials = MaterialProps::new(210.0, 4200.0, 0.0);
        let loads = LoadSet::new(1000.0, 0.0);
        let sizing = size_footing(&loads, &soil, &materials, &SolverSettings::default()).unwrap();
        assert!(approx_eq(sizing.raw_side_length_cm / 1e6, 1.0, 1e-5));
    }

    #[test]
    fn test_bracket_search_limit_is_infeasible() {
        // M dominates: the side is near ∛(6M/qn) ≈ 1817 cm, beyond the first trial at 1000 cm
        let soil = SoilGeometry {
            allowable_bearing: 1.0,
            soil_unit_weight: 0.0,
            foundation_depth_cm: 0.0,
            eccentricity_cm: 1e6,
        };
        let materials = MaterialProps::new(210.0, 4200.0, 0.0);
        let settings = SolverSettings {
            max_bracket_expansions: 0,
            ..SolverSettings::default()
        };
        let loads = LoadSet::new(1000.0, 0.0);
        let err = size_footing(&loads, &soil, &materials, &settings).unwrap_err();
        assert_eq!(err.error_code(), "SIZING_INFEASIBLE");
    }
}
