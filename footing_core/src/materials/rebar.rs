//! Reinforcing Bar Catalog
//!
//! Metric deformed bars available for footing bottom mats, with nominal
//! diameters and the rounded areas used on drawings.

use serde::{Deserialize, Serialize};

/// Standard reinforcing bar size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RebarSize {
    /// Ø12 mm (1.13 cm²)
    D12,
    /// Ø16 mm (2.01 cm²)
    D16,
    /// Ø20 mm (3.14 cm²)
    D20,
    /// Ø25 mm (4.90 cm²)
    D25,
    /// Ø32 mm (8.04 cm²)
    D32,
}

impl RebarSize {
    /// Catalog in ascending size; spacing tables keep this order
    pub const ALL: [RebarSize; 5] = [
        RebarSize::D12,
        RebarSize::D16,
        RebarSize::D20,
        RebarSize::D25,
        RebarSize::D32,
    ];

    /// Nominal diameter (mm)
    pub fn diameter_mm(&self) -> u32 {
        match self {
            RebarSize::D12 => 12,
            RebarSize::D16 => 16,
            RebarSize::D20 => 20,
            RebarSize::D25 => 25,
            RebarSize::D32 => 32,
        }
    }

    /// Nominal cross-sectional area (cm²)
    pub fn area_cm2(&self) -> f64 {
        match self {
            RebarSize::D12 => 1.13,
            RebarSize::D16 => 2.01,
            RebarSize::D20 => 3.14,
            RebarSize::D25 => 4.90,
            RebarSize::D32 => 8.04,
        }
    }

    /// Display name (e.g., "Ø16")
    pub fn display_name(&self) -> String {
        format!("Ø{}", self.diameter_mm())
    }
}

impl std::fmt::Display for RebarSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
