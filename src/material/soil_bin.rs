use super::{solve_characteristic_depth, ZdSolution};
use crate::base::ParamSoil;
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds the hydraulic properties of one moisture content bin (Brooks-Corey model)
///
/// All properties are computed once by [SoilBin::new] and never change afterwards.
///
/// ```text
/// Θ   = (θ - θr) / (θe - θr)                 relative saturation
/// K   = Ks · Θ^(3 + 2/λ)                      conductivity
/// Hc  = -ψb · (2 + 3λ) / (1 + 3λ)             capillary head
/// ψ   = -Hc · Θ^(-1/λ)                        raw capillary potential
/// p   = 3 + 2/λ
/// Geff = -Hc · 2p / (p + 3)                   geometric drive estimate
/// G   = max(ψ, Geff)                          effective capillary drive
/// ```
///
/// # Reference
///
/// * Talbot CA and Ogden FL (2008) A method for computing infiltration and redistribution in a
///   discretized moisture content domain. Water Resources Research, 44(8), W08453.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SoilBin {
    theta: f64,
    relative_saturation: f64,
    conductivity: f64,
    capillary_head: f64,
    psi: f64,
    geff: f64,
    zd: ZdSolution,
}

impl SoilBin {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `theta` -- the moisture content of this bin
    /// * `param` -- the soil parameters (θr, θe, λ, Ks, ψb)
    /// * `delta_theta` -- the moisture content spacing between bins
    /// * `zd_n_max_iterations` -- maximum number of iterations to compute Zd
    /// * `zd_tol_abs` -- absolute tolerance to compute Zd
    pub fn new(
        theta: f64,
        param: &ParamSoil,
        delta_theta: f64,
        zd_n_max_iterations: usize,
        zd_tol_abs: f64,
    ) -> Result<Self, StrError> {
        if !(param.theta_e > param.theta_r) {
            return Err("theta_e must be greater than theta_r");
        }
        if !(param.lambda > 0.0) {
            return Err("lambda must be positive");
        }
        if !(delta_theta > 0.0) {
            return Err("delta_theta must be positive");
        }
        let relative_saturation = (theta - param.theta_r) / (param.theta_e - param.theta_r);
        if !(relative_saturation > 0.0 && relative_saturation <= 1.0) {
            return Err("relative saturation must be in (0, 1]; theta must be in (theta_r, theta_e]");
        }
        let lambda = param.lambda;
        let conductivity = param.k_sat * f64::powf(relative_saturation, 3.0 + 2.0 / lambda);
        let capillary_head = -param.psi_b * (2.0 + 3.0 * lambda) / (1.0 + 3.0 * lambda);
        let psi = -capillary_head * f64::powf(relative_saturation, -1.0 / lambda);
        let p = 3.0 + 2.0 / lambda;
        let geff = -capillary_head * 2.0 * p / (p + 3.0);
        let drive = effective_drive(psi, geff);
        let zd = solve_characteristic_depth(drive, psi, delta_theta, zd_n_max_iterations, zd_tol_abs)?;
        Ok(SoilBin {
            theta,
            relative_saturation,
            conductivity,
            capillary_head,
            psi,
            geff,
            zd,
        })
    }

    /// Returns the moisture content θ
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Returns the relative saturation Θ ∈ (0, 1]
    pub fn relative_saturation(&self) -> f64 {
        self.relative_saturation
    }

    /// Returns the unsaturated hydraulic conductivity K (cm/h)
    pub fn conductivity(&self) -> f64 {
        self.conductivity
    }

    /// Returns the capillary head Hc (negative; cm)
    pub fn capillary_head(&self) -> f64 {
        self.capillary_head
    }

    /// Returns the raw capillary potential ψ (cm)
    pub fn capillary_potential(&self) -> f64 {
        self.psi
    }

    /// Returns the geometric estimate of the capillary drive Geff (cm)
    pub fn geometric_drive(&self) -> f64 {
        self.geff
    }

    /// Returns the effective capillary drive G = max(ψ, Geff) (cm)
    pub fn capillary_drive(&self) -> f64 {
        effective_drive(self.psi, self.geff)
    }

    /// Returns the characteristic depth Zd (cm)
    pub fn characteristic_depth(&self) -> f64 {
        self.zd.value
    }

    /// Returns the details of the characteristic depth iterations
    pub fn zd_solution(&self) -> &ZdSolution {
        &self.zd
    }
}

/// Returns the effective capillary drive max(ψ, Geff)
///
/// Near saturation the raw potential ψ falls below Geff; using ψ there would make the
/// Zd recurrence collapse towards zero, so Geff acts as a floor.
#[inline]
fn effective_drive(psi: f64, geff: f64) -> f64 {
    if psi < geff {
        geff
    } else {
        psi
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
