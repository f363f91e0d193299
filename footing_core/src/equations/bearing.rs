//! # Soil Bearing Pressure Formulas
//!
//! Pressures under a rigid rectangular footing loaded by an axial force and a
//! moment about one plan axis (combined axial + bending stress).
//!
//! ## Notation
//!
//! - `P` = Axial load on the footing
//! - `M` = Moment about the axis parallel to `L` (M = P·e)
//! - `B` = Footing width, measured in the direction of the eccentricity
//! - `L` = Footing length
//! - `x` = Position across `B`, measured from the least-loaded edge
//! - `q1`, `q2` = Minimum and maximum edge pressures
//!
//! ```text
//!              P
//!              ↓  M ↻
//!     ┌────────┴────────┐
//!     │                 │
//!     └─────────────────┘
//!  q1 ▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲▲ q2
//!     x = 0 ──────── x = B
//! ```
//!
//! ## References
//!
//! - Das, Principles of Foundation Engineering, §6.2 (eccentrically loaded foundations)
//! - ACI 318-19 §13.3.1 (footing plan area from unfactored loads)

/// Minimum and maximum edge pressures under eccentric load.
///
/// # Formulas
/// - q1 = P/(BL) − 6M/(B²L)
/// - q2 = P/(BL) + 6M/(B²L)
///
/// A negative `q1` means the formula predicts tension (uplift) at that edge.
///
/// # Example
/// ```rust
/// use footing_core::equations::bearing::edge_pressures;
///
/// let (q1, q2) = edge_pressures(245_000.0, 6_125_000.0, 350.0, 350.0);
/// assert!((q1 - 1.142_857).abs() < 1e-6);
/// assert!((q2 - 2.857_143).abs() < 1e-6);
/// ```
#[inline]
pub fn edge_pressures(p: f64, m: f64, b: f64, l: f64) -> (f64, f64) {
    let axial = p / (b * l);
    let bending = 6.0 * m / (b * b * l);
    (axial - bending, axial + bending)
}

/// Maximum edge pressure for a square footing of side `l` (B = L).
///
/// # Formula
/// q2(L) = P/L² + 6M/L³
#[inline]
pub fn square_max_edge_pressure(p: f64, m: f64, l: f64) -> f64 {
    p / (l * l) + 6.0 * m / l.powi(3)
}

/// Derivative of [`square_max_edge_pressure`] with respect to `l`.
///
/// # Formula
/// dq2/dL = −2P/L³ − 18M/L⁴
#[inline]
pub fn square_max_edge_pressure_slope(p: f64, m: f64, l: f64) -> f64 {
    -2.0 * p / l.powi(3) - 18.0 * m / l.powi(4)
}

/// Pressure at position `x` for a linear distribution from `q1` (x = 0) to `q2` (x = B).
///
/// # Formula
/// q(x) = q1 + (q2 − q1)·x/B
#[inline]
pub fn linear_pressure_at(q1: f64, q2: f64, b: f64, x: f64) -> f64 {
    q1 + (q2 - q1) / b * x
}

/// Pressure of the soil (and fill) above the footing base.
///
/// # Formula
/// q = γ·Df
#[inline]
pub fn overburden_pressure(unit_weight: f64, depth: f64) -> f64 {
    unit_weight * depth
}

/// Net allowable pressure left for the column load.
///
/// # Formula
/// qn = qa − q − s/c
#[inline]
pub fn net_allowable_pressure(allowable: f64, overburden: f64, surcharge: f64) -> f64 {
    allowable - overburden - surcharge
}
