//! # One-Way Shear Design
//!
//! Finds the effective depth at which the factored one-way shear at the
//! critical section equals the design shear strength of the concrete, then
//! rounds the footing thickness up to the 5 cm modulus.
//!
//! ## Model
//!
//! ```text
//!              column t1
//!             ┌───────┐
//!     ┌───────┴───────┴──────┬──────────┐
//!     │                      │← d →│    │
//!     └──────────────────────┴─────┴────┘
//!  qu1 ▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲ qu2
//!     x = 0          x = B/2 + t1/2 + d  x = B
//! ```
//!
//! - quy(x) = qu1 + (qu2 − qu1)·x/B
//! - qu3 = quy(B/2 + t1/2 + d)
//! - Vu(d) = (qu2 + qu3)/2 · (B/2 − t1/2 − d) · L
//! - φVc(d) = 0.75 · 0.53 · √f'c · L · d
//!
//! Vu(d) − φVc(d) is positive at d = 0 and negative at the footing edge, so the
//! solve is bracketed by the cantilever length. After solving:
//!
//! 1. h = ⌈(d + cover)/5⌉·5
//! 2. d = h − cover (adopted depth)
//! 3. qu3 and Vu are re-evaluated at the adopted depth
//!
//! The rounding happens once. There is no fixed-point loop.

use serde::{Deserialize, Serialize};

use crate::equations::{
    linear_pressure_at, one_way_shear_capacity, one_way_shear_capacity_slope, punching_perimeter,
    round_up_to, THICKNESS_MODULUS_CM,
};
use crate::errors::{CalcError, CalcResult};
use crate::materials::MaterialProps;
use crate::solver::{solve_bracketed, SolverSettings};

use super::footing::SectionGeometry;
use super::sizing::ServiceSizing;
use super::ultimate::UltimateState;

/// Stage name used in solver diagnostics
pub const STAGE: &str = "one-way shear";

/// Starting guess for the effective depth (cm)
pub const SHEAR_SEED_CM: f64 = 10.0;

/// Results of the shear design stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShearDesign {
    /// Effective depth straight from the solver, before rounding (cm)
    pub raw_effective_depth_cm: f64,

    /// Adopted footing thickness h (cm), a multiple of 5
    pub thickness_cm: f64,

    /// Adopted effective depth d = h − cover (cm)
    pub effective_depth_cm: f64,

    /// Two-way shear critical perimeter bo (cm)
    pub punching_perimeter_cm: f64,

    /// Pressure qu3 at the critical section for the adopted depth (kgf/cm²)
    pub critical_pressure: f64,

    /// Factored one-way shear Vu at the adopted depth (kgf)
    pub factored_shear_kgf: f64,

    /// Design shear strength φVc at the adopted depth (kgf)
    pub shear_capacity_kgf: f64,
}

impl ShearDesign {
    /// Vu / φVc at the adopted depth; ≤ 1.0 since the depth only ever rounds up
    pub fn shear_unity(&self) -> f64 {
        self.factored_shear_kgf / self.shear_capacity_kgf
    }
}

/// Pressure profile and shear demand for one footing, in one place so the
/// solve and the final re-evaluation share the same expressions.
struct ShearModel {
    qu1: f64,
    qu2: f64,
    width: f64,
    length: f64,
    column_face: f64,
    cantilever: f64,
}

impl ShearModel {
    fn pressure_at(&self, x: f64) -> f64 {
        linear_pressure_at(self.qu1, self.qu2, self.width, x)
    }

    fn critical_pressure(&self, d: f64) -> f64 {
        self.pressure_at(self.column_face + d)
    }

    fn demand(&self, d: f64) -> f64 {
        (self.qu2 + self.critical_pressure(d)) / 2.0 * (self.cantilever - d) * self.length
    }

    fn demand_slope(&self, d: f64) -> f64 {
        let gradient = (self.qu2 - self.qu1) / self.width;
        let average = (self.qu2 + self.critical_pressure(d)) / 2.0;
        self.length * (gradient / 2.0 * (self.cantilever - d) - average)
    }
}

/// Design the footing thickness for one-way shear.
///
/// # Errors
///
/// - [`CalcError::InvalidInput`] if f'c ≤ 0 (checked before any square root)
/// - [`CalcError::SectionInfeasible`] if the column is not narrower than the footing
/// - [`CalcError::SolverDivergence`] if the root finder runs out of iterations
pub fn design_shear(
    sizing: &ServiceSizing,
    ultimate: &UltimateState,
    section: &SectionGeometry,
    materials: &MaterialProps,
    settings: &SolverSettings,
) -> CalcResult<ShearDesign> {
    materials.check_concrete_strength()?;

    let width = sizing.width_cm;
    let length = sizing.length_cm;
    let t1 = section.column_dim1_cm;
    let cantilever = width / 2.0 - t1 / 2.0;

    if cantilever <= 0.0 {
        return Err(CalcError::section_infeasible(
            STAGE,
            format!(
                "column dimension t1 = {:.1} cm is not smaller than footing width B = {:.1} cm",
                t1, width
            ),
        ));
    }

    let model = ShearModel {
        qu1: ultimate.min_factored_pressure,
        qu2: ultimate.max_factored_pressure,
        width,
        length,
        column_face: width / 2.0 + t1 / 2.0,
        cantilever,
    };
    let fc = materials.concrete_strength;

    let residual = |d: f64| model.demand(d) - one_way_shear_capacity(fc, length, d);
    let slope = |d: f64| model.demand_slope(d) - one_way_shear_capacity_slope(fc, length);

    let raw = if residual(0.0) <= 0.0 {
        // Pressure on the cantilever nets to zero or less: no depth needed for shear
        tracing::debug!(stage = STAGE, "no positive shear demand at the column face");
        0.0
    } else {
        let root = solve_bracketed(STAGE, residual, slope, (0.0, cantilever), SHEAR_SEED_CM, settings)?;
        root.value
    };

    let thickness = round_up_to(raw + section.cover_cm, THICKNESS_MODULUS_CM);
    let d = thickness - section.cover_cm;

    let critical_pressure = model.critical_pressure(d);
    let factored_shear = model.demand(d);
    let capacity = one_way_shear_capacity(fc, length, d);
    let perimeter = punching_perimeter(t1, section.column_dim2_cm, d);

    tracing::debug!(
        raw_depth_cm = raw,
        thickness_cm = thickness,
        depth_cm = d,
        vu = factored_shear,
        phi_vc = capacity,
        bo = perimeter,
        "shear design complete"
    );

    Ok(ShearDesign {
        raw_effective_depth_cm: raw,
        thickness_cm: thickness,
        effective_depth_cm: d,
        punching_perimeter_cm: perimeter,
        critical_pressure,
        factored_shear_kgf: factored_shear,
        shear_capacity_kgf: capacity,
    })
}
