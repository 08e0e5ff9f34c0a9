use super::{Control, ParamRainfall, ParamSoil, SampleParams};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds configuration data such as soil parameters, rainfall and time-loop options
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Parameters of the soil column
    pub soil: ParamSoil,

    /// Parameters of the rainfall pulse
    pub rainfall: ParamRainfall,

    /// Options to control the time loop
    pub control: Control,
}

impl Config {
    /// Allocates a new instance with the sand column, the rainfall pulse, and default control options
    pub fn new() -> Self {
        Config {
            soil: SampleParams::param_sand(),
            rainfall: SampleParams::param_rainfall_pulse(),
            control: Control::new(),
        }
    }

    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        if let Some(msg) = self.soil.validate() {
            return Some(msg);
        }
        if let Some(msg) = self.rainfall.validate() {
            return Some(msg);
        }
        self.control.validate()
    }

    /// Sets the soil parameters
    pub fn set_soil(&mut self, soil: ParamSoil) -> Result<&mut Self, StrError> {
        if soil.validate().is_some() {
            return Err("soil parameters are invalid");
        }
        self.soil = soil;
        Ok(self)
    }

    /// Sets the rainfall pulse
    pub fn set_rainfall(&mut self, rainfall: ParamRainfall) -> Result<&mut Self, StrError> {
        if rainfall.validate().is_some() {
            return Err("rainfall parameters are invalid");
        }
        self.rainfall = rainfall;
        Ok(self)
    }

    /// Sets the time step in seconds
    pub fn set_time_step(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if !(value > 0.0 && value.is_finite()) {
            return Err("time_step must be finite and > 0.0");
        }
        self.control.time_step = value;
        Ok(self)
    }

    /// Sets the duration of the simulation in hours
    pub fn set_t_fin(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if !(value >= 0.0 && value.is_finite()) {
            return Err("t_fin must be finite and ≥ 0.0");
        }
        self.control.t_fin = value;
        Ok(self)
    }

    /// Sets the number of moisture content bins
    pub fn set_n_bin(&mut self, value: usize) -> Result<&mut Self, StrError> {
        if value < 2 {
            return Err("n_bin must be ≥ 2");
        }
        self.control.n_bin = value;
        Ok(self)
    }

    /// Sets the iteration cap and tolerance of the characteristic depth solver
    pub fn set_zd_solver(&mut self, n_max_iterations: usize, tol_abs: f64) -> Result<&mut Self, StrError> {
        if n_max_iterations < 1 {
            return Err("zd_n_max_iterations must be ≥ 1");
        }
        if !(tol_abs > 0.0 && tol_abs.is_finite()) {
            return Err("zd_tol_abs must be finite and > 0.0");
        }
        self.control.zd_n_max_iterations = n_max_iterations;
        self.control.zd_tol_abs = tol_abs;
        Ok(self)
    }

    /// Sets the number of time steps between state snapshots (None disables snapshots)
    pub fn set_n_step_out(&mut self, value: Option<usize>) -> Result<&mut Self, StrError> {
        if value == Some(0) {
            return Err("n_step_out must be ≥ 1");
        }
        self.control.n_step_out = value;
        Ok(self)
    }

    /// Sets the verbose flags
    pub fn set_verbose(&mut self, timesteps: bool, anomalies: bool) -> &mut Self {
        self.control.verbose_timesteps = timesteps;
        self.control.verbose_anomalies = anomalies;
        self
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Soil column\n")?;
        write!(f, "===========\n")?;
        write!(f, "theta_e = {:?}\n", self.soil.theta_e)?;
        write!(f, "theta_r = {:?}\n", self.soil.theta_r)?;
        write!(f, "theta_w = {:?}\n", self.soil.theta_w)?;
        write!(f, "psi_b = {:?}\n", self.soil.psi_b)?;
        write!(f, "lambda = {:?}\n", self.soil.lambda)?;
        write!(f, "k_sat = {:?}\n", self.soil.k_sat)?;

        write!(f, "\nRainfall\n")?;
        write!(f, "========\n")?;
        write!(f, "t_start = {:?}\n", self.rainfall.t_start)?;
        write!(f, "duration = {:?}\n", self.rainfall.duration)?;
        write!(f, "intensity = {:?}\n", self.rainfall.intensity)?;

        write!(f, "\nControl\n")?;
        write!(f, "=======\n")?;
        write!(f, "time_step = {:?}\n", self.control.time_step)?;
        write!(f, "t_fin = {:?}\n", self.control.t_fin)?;
        write!(f, "n_bin = {:?}\n", self.control.n_bin)?;
        write!(f, "zd_n_max_iterations = {:?}\n", self.control.zd_n_max_iterations)?;
        write!(f, "zd_tol_abs = {:?}\n", self.control.zd_tol_abs)?;
        write!(f, "tol_mass_balance = {:?}\n", self.control.tol_mass_balance)?;
        write!(f, "n_step_out = {:?}\n", self.control.n_step_out)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
