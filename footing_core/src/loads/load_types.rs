//! Load type definitions
//!
//! A spread footing in this engine carries the gravity column reaction split
//! into its dead and live parts; those are the only load categories the load
//! factors distinguish.

use serde::{Deserialize, Serialize};

/// Load categories carried by the column.
///
/// # Example
/// ```
/// use footing_core::loads::LoadType;
///
/// assert_eq!(LoadType::Dead.code(), "D");
/// assert_eq!(LoadType::Live.description(), "Live load");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadType {
    /// D - Dead load (self-weight of structure and permanent attachments)
    Dead,
    /// L - Live load (occupancy)
    Live,
}

impl LoadType {
    /// All load types in standard order
    pub const ALL: [LoadType; 2] = [LoadType::Dead, LoadType::Live];

    /// Standard abbreviation code
    pub fn code(&self) -> &'static str {
        match self {
            LoadType::Dead => "D",
            LoadType::Live => "L",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            LoadType::Dead => "Dead load",
            LoadType::Live => "Live load",
        }
    }
}

impl std::fmt::Display for LoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
