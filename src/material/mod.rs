//! Implements the soil model of the moisture content bins

mod characteristic_depth;
mod soil_bin;
mod soil_column;
pub use crate::material::characteristic_depth::*;
pub use crate::material::soil_bin::*;
pub use crate::material::soil_column::*;
