//! # Footing Design Equations
//!
//! Closed-form formulas used by the design stages. Keeping them in one place
//! makes each one easy to check against its code reference, and lets the
//! stages read as "evaluate this, solve that".
//!
//! ## Modules
//!
//! - [`bearing`] - Soil pressures under eccentric load
//! - [`concrete`] - Shear and flexural strength of the footing slab
//! - [`detailing`] - Rounding onto construction moduli
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Soil pressure**: Positive in compression
//! - **Position x**: Measured across the footing width from the least-loaded edge
//!
//! ## References
//!
//! - ACI 318-19: Building Code Requirements for Structural Concrete
//! - Das, Principles of Foundation Engineering

pub mod bearing;
pub mod concrete;
pub mod detailing;

pub use bearing::{
    edge_pressures,
    linear_pressure_at,
    net_allowable_pressure,
    overburden_pressure,
    square_max_edge_pressure,
    square_max_edge_pressure_slope,
};

pub use concrete::{
    compression_block_moment,
    compression_block_moment_slope,
    compression_force,
    one_way_shear_capacity,
    one_way_shear_capacity_slope,
    punching_perimeter,
    required_steel_area,
};

pub use detailing::{
    round_down_to,
    round_up_to,
    PLAN_MODULUS_CM,
    SPACING_MODULUS_CM,
    THICKNESS_MODULUS_CM,
};
