//! Fwcsim -- Finite water content infiltration simulator
//!
//! Simulates one-dimensional infiltration of rainfall into a soil column whose moisture
//! content domain is discretized into bins (the finite water content method).
//!
//! # Example
//!
//! ```
//! use fwcsim::prelude::*;
//! use fwcsim::StrError;
//!
//! fn main() -> Result<(), StrError> {
//!     let mut config = Config::new();
//!     config.set_n_bin(40)?;
//!     let mut sim = InfiltrationSimulator::new(&config)?;
//!     let mut file_io = FileIo::new();
//!     sim.run(&mut file_io)?;
//!     let profile = sim.profile();
//!     assert_eq!(profile.ponded, 0.0);
//!     Ok(())
//! }
//! ```

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod material;
pub mod prelude;
pub mod sim;
