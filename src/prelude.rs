//! Makes available common structures needed to run a simulation
//!
//! You may write `use fwcsim::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{Config, Control, ParamRainfall, ParamSoil, SampleParams, DEFAULT_OUT_DIR, DEFAULT_TEST_DIR};
pub use crate::material::{SoilBin, SoilColumn};
pub use crate::sim::{
    plot_profile, Anomaly, FileIo, FwcState, FwcSummary, InfiltrationSimulator, MoistureProfile, StepStatus,
    Termination,
};
