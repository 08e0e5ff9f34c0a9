use serde::{Deserialize, Serialize};

/// Holds the cumulative water depths (cm) entering and leaving the surface
///
/// Every centimetre of rain ends up in exactly one of: the saturated bin, the unsaturated
/// bins (as wetted depth), or the ponded water. Thus:
///
/// ```text
/// rainfall = saturated + unsaturated + ponded
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MassBalance {
    /// Cumulative rainfall
    pub rainfall: f64,

    /// Cumulative infiltration through the saturated bin
    pub saturated: f64,

    /// Cumulative wetted depth added to the unsaturated bins
    pub unsaturated: f64,
}

impl MassBalance {
    /// Allocates a new instance with zero values
    pub fn new() -> Self {
        MassBalance {
            rainfall: 0.0,
            saturated: 0.0,
            unsaturated: 0.0,
        }
    }

    /// Returns the mass-balance residual given the current ponded water
    pub fn residual(&self, ponded: f64) -> f64 {
        self.rainfall - self.saturated - self.unsaturated - ponded
    }

    /// Returns the total infiltrated depth
    pub fn infiltrated(&self) -> f64 {
        self.saturated + self.unsaturated
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
