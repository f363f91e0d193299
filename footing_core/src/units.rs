//! # Unit Types
//!
//! Type-safe wrappers for the units a footing design is entered and computed in.
//! These are plain f64 newtypes so JSON stays clean (just numbers).
//!
//! ## Working Units
//!
//! Every pipeline stage computes in one consistent system:
//! - Length: centimetres (cm)
//! - Force: kilogram-force (kgf)
//! - Pressure / stress: kgf/cm²
//! - Unit weight: kgf/cm³
//! - Moment: kgf·cm
//!
//! ## Entry Units
//!
//! Loads and soil data are usually quoted in tonne-force and metres. The
//! conversions below are applied exactly once, when a
//! [`FootingInput`](crate::calculations::footing::FootingInput) is normalized:
//!
//! | entry | working | factor |
//! |-------|---------|--------|
//! | Tn | kgf | ×1000 |
//! | Tn/m² | kgf/cm² | ×0.1 |
//! | Tn/m³ | kgf/cm³ | ×0.001 |
//! | m | cm | ×100 |
//!
//! ## Example
//!
//! ```rust
//! use footing_core::units::{Centimeters, KgfPerCm2, Kgf, Meters, TonneForce, TonnePerM2};
//!
//! let depth: Centimeters = Meters(1.7).into();
//! assert!((depth.0 - 170.0).abs() < 1e-9);
//!
//! let load: Kgf = TonneForce(180.0).into();
//! assert_eq!(load.0, 180_000.0);
//!
//! let qa: KgfPerCm2 = TonnePerM2(38.0).into();
//! assert!((qa.0 - 3.8).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// kgf per tonne-force
pub const KGF_PER_TONNE: f64 = 1000.0;

/// kgf/cm² per Tn/m²
pub const KGF_CM2_PER_TONNE_M2: f64 = 0.1;

/// kgf/cm³ per Tn/m³
pub const KGF_CM3_PER_TONNE_M3: f64 = 0.001;

/// cm per m
pub const CM_PER_M: f64 = 100.0;

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in centimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * CM_PER_M)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in tonne-force (Tn)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TonneForce(pub f64);

/// Force in kilogram-force
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kgf(pub f64);

impl From<TonneForce> for Kgf {
    fn from(t: TonneForce) -> Self {
        Kgf(t.0 * KGF_PER_TONNE)
    }
}

// ============================================================================
// Pressure Units
// ============================================================================

/// Pressure in tonne-force per square metre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TonnePerM2(pub f64);

/// Pressure (or stress) in kgf per square centimetre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgfPerCm2(pub f64);

impl From<TonnePerM2> for KgfPerCm2 {
    fn from(p: TonnePerM2) -> Self {
        KgfPerCm2(p.0 * KGF_CM2_PER_TONNE_M2)
    }
}

// ============================================================================
// Unit Weight
// ============================================================================

/// Unit weight in tonne-force per cubic metre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TonnePerM3(pub f64);

/// Unit weight in kgf per cubic centimetre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgfPerCm3(pub f64);

impl From<TonnePerM3> for KgfPerCm3 {
    fn from(w: TonnePerM3) -> Self {
        KgfPerCm3(w.0 * KGF_CM3_PER_TONNE_M3)
    }
}

// ============================================================================
// Moment
// ============================================================================

/// Moment in kgf·cm
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgfCm(pub f64);

/// Moment from a force and a lever arm: kgf × cm = kgf·cm
impl Mul<Centimeters> for Kgf {
    type Output = KgfCm;
    fn mul(self, rhs: Centimeters) -> KgfCm {
        KgfCm(self.0 * rhs.0)
    }
}

// ============================================================================
// Arithmetic Implementations
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Centimeters);
impl_arithmetic!(TonneForce);
impl_arithmetic!(Kgf);
impl_arithmetic!(TonnePerM2);
impl_arithmetic!(KgfPerCm2);
impl_arithmetic!(TonnePerM3);
impl_arithmetic!(KgfPerCm3);
impl_arithmetic!(KgfCm);
