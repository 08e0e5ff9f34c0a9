use super::{SECONDS_PER_HOUR, TOL_MASS_BALANCE, ZD_N_MAX_ITERATIONS, ZD_TOL_ABS};
use serde::{Deserialize, Serialize};

/// Holds the (time-loop) options to control the simulation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Control {
    /// Time step Δt in seconds
    pub time_step: f64,

    /// Duration of the simulation in hours
    pub t_fin: f64,

    /// Number of moisture content bins
    pub n_bin: usize,

    /// Maximum number of fixed-point iterations for the characteristic depth
    pub zd_n_max_iterations: usize,

    /// Absolute tolerance on successive characteristic depth estimates (cm)
    pub zd_tol_abs: f64,

    /// Tolerance on the mass-balance residual at the end of the run (cm)
    pub tol_mass_balance: f64,

    /// Number of time steps between state snapshots (None means no snapshots)
    pub n_step_out: Option<usize>,

    /// Verbose mode during timesteps
    pub verbose_timesteps: bool,

    /// Prints anomalies (non-convergence, column exhaustion) as they are found
    pub verbose_anomalies: bool,
}

impl Control {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        Control {
            time_step: 2.5,
            t_fin: 3.0,
            n_bin: 400,
            zd_n_max_iterations: ZD_N_MAX_ITERATIONS,
            zd_tol_abs: ZD_TOL_ABS,
            tol_mass_balance: TOL_MASS_BALANCE,
            n_step_out: None,
            verbose_timesteps: false,
            verbose_anomalies: false,
        }
    }

    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        if !(self.time_step > 0.0 && self.time_step.is_finite()) {
            return Some(format!("time_step = {:?} is incorrect; it must be finite and > 0.0", self.time_step));
        }
        if !(self.t_fin >= 0.0 && self.t_fin.is_finite()) {
            return Some(format!("t_fin = {:?} is incorrect; it must be finite and ≥ 0.0", self.t_fin));
        }
        if self.n_bin < 2 {
            return Some(format!("n_bin = {:?} is incorrect; it must be ≥ 2", self.n_bin));
        }
        if self.zd_n_max_iterations < 1 {
            return Some(format!(
                "zd_n_max_iterations = {:?} is incorrect; it must be ≥ 1",
                self.zd_n_max_iterations
            ));
        }
        if !(self.zd_tol_abs > 0.0 && self.zd_tol_abs.is_finite()) {
            return Some(format!("zd_tol_abs = {:?} is incorrect; it must be finite and > 0.0", self.zd_tol_abs));
        }
        if !(self.tol_mass_balance > 0.0 && self.tol_mass_balance.is_finite()) {
            return Some(format!(
                "tol_mass_balance = {:?} is incorrect; it must be finite and > 0.0",
                self.tol_mass_balance
            ));
        }
        if let Some(n) = self.n_step_out {
            if n < 1 {
                return Some(format!("n_step_out = {:?} is incorrect; it must be ≥ 1", n));
            }
        }
        None // all good
    }

    /// Returns the time step in hours
    #[inline]
    pub fn dt(&self) -> f64 {
        self.time_step / SECONDS_PER_HOUR
    }

    /// Returns the number of time steps fitting in the simulation horizon
    pub fn n_time_steps(&self) -> usize {
        // f64 to usize casts saturate and truncate toward zero
        (self.t_fin / self.dt()) as usize
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
