//! # Reinforced Concrete Strength Formulas
//!
//! Strength-design (limit-state) capacities for footing slabs, in kgf and cm.
//!
//! ## Notation
//!
//! - `f'c` = Specified concrete compressive strength (kgf/cm²)
//! - `fy` = Reinforcement yield strength (kgf/cm²)
//! - `b` = Width of the section resisting shear or flexure
//! - `d` = Effective depth
//! - `y` = Depth of the equivalent rectangular stress block
//! - `φ` = Strength reduction factor
//!
//! ## References
//!
//! - ACI 318-19 §22.5.5.1 (Vc = 0.53√f'c·b·d in kgf/cm² units)
//! - ACI 318-19 §22.2.2 (Whitney stress block, 0.85f'c)
//! - ACI 318-19 Table 21.2.1 (φ = 0.75 shear, φ = 0.90 flexure)

/// Strength reduction factor for shear
pub const PHI_SHEAR: f64 = 0.75;

/// Strength reduction factor for tension-controlled flexure
pub const PHI_FLEXURE: f64 = 0.9;

/// One-way shear coefficient in kgf/cm² units (0.53√f'c)
pub const SHEAR_COEFFICIENT: f64 = 0.53;

/// Equivalent stress block intensity factor (0.85f'c)
pub const STRESS_BLOCK_FACTOR: f64 = 0.85;

/// Design one-way shear strength of a concrete slab without stirrups.
///
/// # Formula
/// φVc = 0.75 · 0.53 · √f'c · b · d
///
/// # Example
/// ```rust
/// use footing_core::equations::concrete::one_way_shear_capacity;
///
/// let vc = one_way_shear_capacity(210.0, 350.0, 55.0);
/// assert!((vc - 110_886.0).abs() < 1.0);
/// ```
#[inline]
pub fn one_way_shear_capacity(fc: f64, b: f64, d: f64) -> f64 {
    PHI_SHEAR * SHEAR_COEFFICIENT * fc.sqrt() * b * d
}

/// Derivative of [`one_way_shear_capacity`] with respect to `d`.
#[inline]
pub fn one_way_shear_capacity_slope(fc: f64, b: f64) -> f64 {
    PHI_SHEAR * SHEAR_COEFFICIENT * fc.sqrt() * b
}

/// Critical perimeter for two-way (punching) shear around a rectangular column.
///
/// The critical section lies d/2 from each column face, so each side grows by d.
///
/// # Formula
/// bo = 2(t1 + d) + 2(t2 + d)
#[inline]
pub fn punching_perimeter(t1: f64, t2: f64, d: f64) -> f64 {
    2.0 * (t1 + d) + 2.0 * (t2 + d)
}

/// Design moment resisted by a compression block of depth `y`.
///
/// # Formula
/// φMn = 0.9 · 0.85 · f'c · b · y · (d − y/2)
#[inline]
pub fn compression_block_moment(fc: f64, b: f64, d: f64, y: f64) -> f64 {
    compression_force(fc, b, y) * (d - y / 2.0)
}

/// Derivative of [`compression_block_moment`] with respect to `y`.
///
/// # Formula
/// d(φMn)/dy = 0.9 · 0.85 · f'c · b · (d − y)
#[inline]
pub fn compression_block_moment_slope(fc: f64, b: f64, d: f64, y: f64) -> f64 {
    PHI_FLEXURE * STRESS_BLOCK_FACTOR * fc * b * (d - y)
}

/// Factored compressive force carried by the stress block.
///
/// # Formula
/// Nc = 0.9 · 0.85 · f'c · b · y
#[inline]
pub fn compression_force(fc: f64, b: f64, y: f64) -> f64 {
    PHI_FLEXURE * STRESS_BLOCK_FACTOR * fc * b * y
}

/// Steel area whose factored yield force balances `nc`.
///
/// # Formula
/// As = Nc / (0.9 · fy)
#[inline]
pub fn required_steel_area(nc: f64, fy: f64) -> f64 {
    nc / (PHI_FLEXURE * fy)
}
