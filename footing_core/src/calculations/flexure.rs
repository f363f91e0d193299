//! # Flexural Reinforcement Design
//!
//! Designs the bottom steel for the cantilever moment about the column face.
//!
//! ## Procedure
//!
//! 1. qu6 = quy(B/2 + t1/2 + d/2)
//! 2. Mu = (qu6 + qu2)/2 · (B/2 − t1/2)² · L / 2
//! 3. Solve 0.9 · 0.85 · f'c · B · y · (d − y/2) = Mu for the block depth y
//! 4. Nc = 0.9 · 0.85 · f'c · B · y
//! 5. As = Nc / (0.9 · fy)
//!
//! The left side of step 3 rises monotonically on 0 ≤ y ≤ d and peaks at
//! y = d. If Mu exceeds that peak no real block depth exists and the section
//! is reported as infeasible rather than accepted with a complex root.

use serde::{Deserialize, Serialize};

use crate::equations::{
    compression_block_moment, compression_block_moment_slope, compression_force, linear_pressure_at,
    required_steel_area,
};
use crate::errors::{CalcError, CalcResult};
use crate::materials::MaterialProps;
use crate::solver::{solve_bracketed, SolverSettings};

use super::footing::SectionGeometry;
use super::shear::ShearDesign;
use super::sizing::ServiceSizing;
use super::ultimate::UltimateState;

/// Stage name used in solver diagnostics
pub const STAGE: &str = "flexure";

/// Starting guess for the compression block depth (cm)
pub const FLEXURE_SEED_CM: f64 = 5.0;

/// Results of the flexural design stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlexuralDesign {
    /// Pressure qu6 at B/2 + t1/2 + d/2 (kgf/cm²)
    pub section_pressure: f64,

    /// Factored cantilever moment Mu (kgf·cm)
    pub factored_moment_kgf_cm: f64,

    /// Compression block depth y (cm)
    pub compression_depth_cm: f64,

    /// Factored compressive force Nc (kgf)
    pub compressive_force_kgf: f64,

    /// Required steel area As across the full width (cm²)
    pub required_steel_area_cm2: f64,
}

/// Design the flexural reinforcement.
///
/// # Errors
///
/// - [`CalcError::InvalidInput`] if f'c ≤ 0 or fy ≤ 0
/// - [`CalcError::SectionInfeasible`] if no block depth in (0, h − cover)
///   balances the factored moment
/// - [`CalcError::SolverDivergence`] if the root finder runs out of iterations
pub fn design_flexure(
    sizing: &ServiceSizing,
    ultimate: &UltimateState,
    section: &SectionGeometry,
    shear: &ShearDesign,
    materials: &MaterialProps,
    settings: &SolverSettings,
) -> CalcResult<FlexuralDesign> {
    materials.check_concrete_strength()?;
    materials.check_steel_yield_strength()?;

    let width = sizing.width_cm;
    let length = sizing.length_cm;
    let t1 = section.column_dim1_cm;
    let d = shear.thickness_cm - section.cover_cm;
    let fc = materials.concrete_strength;
    let qu1 = ultimate.min_factored_pressure;
    let qu2 = ultimate.max_factored_pressure;

    let cantilever = width / 2.0 - t1 / 2.0;
    let qu6 = linear_pressure_at(qu1, qu2, width, width / 2.0 + t1 / 2.0 + d / 2.0);
    let mu = (qu6 + qu2) / 2.0 * cantilever.powi(2) * length / 2.0;

    if d <= 0.0 {
        return Err(CalcError::section_infeasible(
            STAGE,
            format!("effective depth h - cover = {:.2} cm leaves no room for a compression block", d),
        ));
    }
    if mu <= 0.0 {
        return Err(CalcError::section_infeasible(
            STAGE,
            format!("factored moment Mu = {:.2} kgf·cm gives a non-positive compression depth", mu),
        ));
    }

    let peak = compression_block_moment(fc, width, d, d);
    if peak < mu {
        return Err(CalcError::section_infeasible(
            STAGE,
            format!(
                "Mu = {:.0} kgf·cm exceeds the largest stress block moment {:.0} kgf·cm for d = {:.1} cm; increase footing thickness or plan size",
                mu, peak, d
            ),
        ));
    }

    let residual = |y: f64| compression_block_moment(fc, width, d, y) - mu;
    let slope = |y: f64| compression_block_moment_slope(fc, width, d, y);
    let root = solve_bracketed(STAGE, residual, slope, (0.0, d), FLEXURE_SEED_CM, settings)?;
    let y = root.value;

    if !(y > 0.0 && y < d) {
        return Err(CalcError::section_infeasible(
            STAGE,
            format!("compression depth y = {:.3} cm falls outside (0, {:.2}) cm", y, d),
        ));
    }

    let nc = compression_force(fc, width, y);
    let steel_area = required_steel_area(nc, materials.steel_yield_strength);

    tracing::debug!(
        qu6,
        mu,
        y,
        nc,
        steel_area_cm2 = steel_area,
        iterations = root.iterations,
        "flexural design complete"
    );

    Ok(FlexuralDesign {
        section_pressure: qu6,
        factored_moment_kgf_cm: mu,
        compression_depth_cm: y,
        compressive_force_kgf: nc,
        required_steel_area_cm2: steel_area,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    fn sizing() -> ServiceSizing {
        ServiceSizing {
            service_load_kgf: 245_000.0,
            service_moment_kgf_cm: 6_125_000.0,
            overburden_pressure: 0.357,
            net_allowable_pressure: 3.393,
            raw_side_length_cm: 324.88,
            width_cm: 350.0,
            length_cm: 350.0,
            min_edge_pressure: 1.142_857,
            max_edge_pressure: 2.857_143,
        }
    }

    fn ultimate(pu: f64) -> UltimateState {
        let mu = pu * 25.0;
        let axial = pu / 122_500.0;
        let bending = 6.0 * mu / 42_875_000.0;
        UltimateState {
            factored_load_kgf: pu,
            factored_moment_kgf_cm: mu,
            min_factored_pressure: axial - bending,
            max_factored_pressure: axial + bending,
        }
    }

    fn section() -> SectionGeometry {
        SectionGeometry {
            column_dim1_cm: 80.0,
            column_dim2_cm: 55.0,
            cover_cm: 5.0,
        }
    }

    fn shear(thickness_cm: f64) -> ShearDesign {
        ShearDesign {
            raw_effective_depth_cm: 50.68,
            thickness_cm,
            effective_depth_cm: thickness_cm - 5.0,
            punching_perimeter_cm: 490.0,
            critical_pressure: 3.22,
            factored_shear_kgf: 97_324.8,
            shear_capacity_kgf: 110_886.0,
        }
    }

    fn materials() -> MaterialProps {
        MaterialProps::new(210.0, 4200.0, 0.05)
    }

    #[test]
    fn test_reference_flexure() {
        let flexure = design_flexure(
            &sizing(),
            &ultimate(320_000.0),
            &section(),
            &shear(60.0),
            &materials(),
            &SolverSettings::default(),
        )
        .unwrap();

        assert!(approx_eq(flexure.section_pressure, 3.0441, 1e-3));
        assert!(approx_eq(flexure.factored_moment_kgf_cm, 10_805_353.0, 5.0));
        assert!(approx_eq(flexure.compression_depth_cm, 3.6127, 1e-3));
        assert!(approx_eq(flexure.compressive_force_kgf, 203_132.0, 50.0));
        assert!(approx_eq(flexure.required_steel_area_cm2, 53.739, 0.01));
    }

    #[test]
    fn test_steel_area_grows_with_load() {
        let run = |pu: f64| {
            design_flexure(&sizing(), &ultimate(pu), &section(), &shear(60.0), &materials(), &SolverSettings::default())
                .unwrap()
                .required_steel_area_cm2
        };
        let areas: Vec<f64> = [250_000.0, 300_000.0, 350_000.0, 400_000.0].iter().map(|&pu| run(pu)).collect();
        assert!(areas.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_thin_section_is_infeasible() {
        // d = 1 cm cannot develop the reference moment
        let err = design_flexure(
            &sizing(),
            &ultimate(320_000.0),
            &section(),
            &shear(6.0),
            &materials(),
            &SolverSettings::default(),
        )
        .unwrap_err();
        assert!(err.is_design_inadequacy());
        assert_eq!(err.error_code(), "SECTION_INFEASIBLE");
    }

    #[test]
    fn test_zero_depth_is_infeasible() {
        let err = design_flexure(
            &sizing(),
            &ultimate(320_000.0),
            &section(),
            &shear(5.0),
            &materials(),
            &SolverSettings::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CalcError::SectionInfeasible { .. }));
    }

    #[test]
    fn test_zero_yield_strength_rejected() {
        let bad = MaterialProps::new(210.0, 0.0, 0.05);
        let err = design_flexure(&sizing(), &ultimate(320_000.0), &section(), &shear(60.0), &bad, &SolverSettings::default())
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }
}
