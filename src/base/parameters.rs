use serde::{Deserialize, Serialize};

/// Holds the Brooks-Corey parameters of a homogeneous soil column
///
/// Lengths are given in cm and conductivities in cm/h.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParamSoil {
    /// Effective porosity θe (moisture content at saturation)
    pub theta_e: f64,

    /// Residual moisture content θr
    pub theta_r: f64,

    /// Wilting point moisture content θw
    ///
    /// The bin containing θw is taken as the initially (and permanently) saturated bin.
    pub theta_w: f64,

    /// Bubbling (air-entry) pressure head ψb (cm)
    pub psi_b: f64,

    /// Pore-size distribution index λ
    pub lambda: f64,

    /// Saturated hydraulic conductivity Ks (cm/h)
    pub k_sat: f64,
}

impl ParamSoil {
    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        if !(self.theta_r >= 0.0) {
            return Some(format!("theta_r = {:?} is incorrect; it must be ≥ 0.0", self.theta_r));
        }
        if !(self.theta_e > self.theta_r) {
            return Some(format!(
                "theta_e = {:?} is incorrect; it must be > theta_r = {:?}",
                self.theta_e, self.theta_r
            ));
        }
        if !(self.theta_e <= 1.0) {
            return Some(format!("theta_e = {:?} is incorrect; it must be ≤ 1.0", self.theta_e));
        }
        if !(self.theta_w >= self.theta_r && self.theta_w < self.theta_e) {
            return Some(format!(
                "theta_w = {:?} is incorrect; it must satisfy theta_r ≤ θw < theta_e",
                self.theta_w
            ));
        }
        if !(self.psi_b > 0.0 && self.psi_b.is_finite()) {
            return Some(format!("psi_b = {:?} is incorrect; it must be finite and > 0.0", self.psi_b));
        }
        if !(self.lambda > 0.0 && self.lambda.is_finite()) {
            return Some(format!("lambda = {:?} is incorrect; it must be finite and > 0.0", self.lambda));
        }
        if !(self.k_sat >= 0.0 && self.k_sat.is_finite()) {
            return Some(format!("k_sat = {:?} is incorrect; it must be finite and ≥ 0.0", self.k_sat));
        }
        None // all good
    }
}

/// Holds the parameters of a uniform-intensity rainfall pulse
///
/// Times are given in hours and the intensity in cm/h.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParamRainfall {
    /// Start of rainfall (h)
    pub t_start: f64,

    /// Duration of rainfall (h)
    pub duration: f64,

    /// Rainfall intensity (cm/h)
    pub intensity: f64,
}

impl ParamRainfall {
    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        if !(self.t_start >= 0.0 && self.t_start.is_finite()) {
            return Some(format!("t_start = {:?} is incorrect; it must be finite and ≥ 0.0", self.t_start));
        }
        if !(self.duration >= 0.0 && self.duration.is_finite()) {
            return Some(format!("duration = {:?} is incorrect; it must be finite and ≥ 0.0", self.duration));
        }
        if !(self.intensity >= 0.0 && self.intensity.is_finite()) {
            return Some(format!("intensity = {:?} is incorrect; it must be finite and ≥ 0.0", self.intensity));
        }
        None // all good
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
