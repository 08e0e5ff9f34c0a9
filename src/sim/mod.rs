//! Implements the finite water content infiltration simulation

mod anomaly;
mod file_io;
mod fwc_state;
mod infiltration_simulator;
mod mass_balance;
mod moisture_profile;
mod plot_profile;
mod progress;
mod rainfall_schedule;
pub use crate::sim::anomaly::*;
pub use crate::sim::file_io::*;
pub use crate::sim::fwc_state::*;
pub use crate::sim::infiltration_simulator::*;
pub use crate::sim::mass_balance::*;
pub use crate::sim::moisture_profile::*;
pub use crate::sim::plot_profile::*;
pub(crate) use crate::sim::progress::*;
pub use crate::sim::rainfall_schedule::*;
