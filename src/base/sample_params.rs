use super::{ParamRainfall, ParamSoil};

/// Holds samples of soil and rainfall parameters
pub struct SampleParams {}

impl SampleParams {
    /// Returns sample parameters for a sand column (cm and cm/h)
    pub fn param_sand() -> ParamSoil {
        ParamSoil {
            theta_e: 0.417, // [-]
            theta_r: 0.020, // [-]
            theta_w: 0.033, // [-]
            psi_b: 7.26,    // cm
            lambda: 0.694,  // [-]
            k_sat: 23.56,   // cm/h
        }
    }

    /// Returns sample parameters for a short and intense rainfall pulse starting at t = 0
    pub fn param_rainfall_pulse() -> ParamRainfall {
        ParamRainfall {
            t_start: 0.0,    // h
            duration: 0.25,  // h
            intensity: 50.0, // cm/h
        }
    }

    /// Returns parameters representing the absence of rain
    pub fn param_no_rain() -> ParamRainfall {
        ParamRainfall {
            t_start: 0.0,
            duration: 0.0,
            intensity: 0.0,
        }
    }
}
