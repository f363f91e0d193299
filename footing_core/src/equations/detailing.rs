//! # Construction Moduli
//!
//! Solver outputs are continuous; drawings are not. These helpers snap a
//! computed dimension onto the construction grid in the safe direction:
//! plan sizes and thicknesses round up, bar spacings round down.

/// Plan dimension modulus (cm)
pub const PLAN_MODULUS_CM: f64 = 50.0;

/// Footing thickness modulus (cm)
pub const THICKNESS_MODULUS_CM: f64 = 5.0;

/// Bar spacing modulus (cm)
pub const SPACING_MODULUS_CM: f64 = 5.0;

/// Smallest multiple of `modulus` that is ≥ `value`.
///
/// ```rust
/// use footing_core::equations::detailing::round_up_to;
///
/// assert_eq!(round_up_to(324.88, 50.0), 350.0);
/// assert_eq!(round_up_to(350.0, 50.0), 350.0);
/// ```
#[inline]
pub fn round_up_to(value: f64, modulus: f64) -> f64 {
    (value / modulus).ceil() * modulus
}

/// Largest multiple of `modulus` that is ≤ `value`.
///
/// ```rust
/// use footing_core::equations::detailing::round_down_to;
///
/// assert_eq!(round_down_to(13.09, 5.0), 10.0);
/// assert_eq!(round_down_to(4.2, 5.0), 0.0);
/// ```
#[inline]
pub fn round_down_to(value: f64, modulus: f64) -> f64 {
    (value / modulus).floor() * modulus
}
