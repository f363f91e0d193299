//! # Bar Spacing Table
//!
//! For each bar in the catalog, the spacing that delivers the required steel
//! area across the footing width:
//!
//! - n = As / Ab
//! - s_theoretical = B / n
//! - s_adopted = ⌊s_theoretical / 5⌋·5
//!
//! Spacing rounds down, so the adopted layout never carries less steel than required.

use serde::{Deserialize, Serialize};

use crate::equations::{round_down_to, SPACING_MODULUS_CM};
use crate::materials::RebarSize;

/// One row of the spacing table.
///
/// ## JSON Example
///
/// ```json
/// {
///   "bar": "D16",
///   "diameter_mm": 16,
///   "area_cm2": 2.01,
///   "bar_count": 26.74,
///   "theoretical_spacing_cm": 13.09,
///   "adopted_spacing_cm": 10.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarSpacingRow {
    /// Bar size
    pub bar: RebarSize,

    /// Nominal diameter (mm)
    pub diameter_mm: u32,

    /// Bar area (cm²)
    pub area_cm2: f64,

    /// Number of bars needed, not rounded
    pub bar_count: f64,

    /// Spacing that exactly delivers As (cm)
    pub theoretical_spacing_cm: f64,

    /// Spacing rounded down to the 5 cm modulus (cm)
    pub adopted_spacing_cm: f64,
}

impl BarSpacingRow {
    /// True when the theoretical spacing is tighter than the spacing modulus,
    /// which leaves an adopted spacing of zero
    pub fn is_below_modulus(&self) -> bool {
        self.adopted_spacing_cm <= 0.0
    }
}

/// Build the spacing table for the standard catalog, in catalog order.
///
/// # Example
///
/// ```rust
/// use footing_core::calculations::bar_spacing::tabulate;
///
/// let rows = tabulate(53.74, 350.0);
/// assert_eq!(rows.len(), 5);
/// assert_eq!(rows[1].adopted_spacing_cm, 10.0);
/// ```
pub fn tabulate(required_area_cm2: f64, width_cm: f64) -> Vec<BarSpacingRow> {
    tabulate_catalog(required_area_cm2, width_cm, &RebarSize::ALL)
}

/// Build the spacing table for an arbitrary list of bars, preserving order.
pub fn tabulate_catalog(required_area_cm2: f64, width_cm: f64, catalog: &[RebarSize]) -> Vec<BarSpacingRow> {
    catalog
        .iter()
        .map(|&bar| {
            let area = bar.area_cm2();
            let count = required_area_cm2 / area;
            let theoretical = width_cm / count;
            BarSpacingRow {
                bar,
                diameter_mm: bar.diameter_mm(),
                area_cm2: area,
                bar_count: count,
                theoretical_spacing_cm: theoretical,
                adopted_spacing_cm: round_down_to(theoretical, SPACING_MODULUS_CM),
            }
        })
        .collect()
}
