//! Implements the base structures for an infiltration simulation

mod config;
mod constants;
mod control;
mod parameters;
mod sample_params;
pub use crate::base::config::*;
pub use crate::base::constants::*;
pub use crate::base::control::*;
pub use crate::base::parameters::*;
pub use crate::base::sample_params::*;
