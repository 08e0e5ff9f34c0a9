use crate::base::ZD_SEED;
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds the outcome of the characteristic depth fixed-point iterations
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZdSolution {
    /// The last computed characteristic depth Zd (cm)
    pub value: f64,

    /// Number of iterations performed
    pub iterations: usize,

    /// Absolute difference between the last two estimates |Zd_{k+1} - Zd_k|
    pub residual: f64,

    /// Indicates that the residual dropped below the tolerance
    pub converged: bool,
}

/// Solves for the characteristic depth Zd by fixed-point iteration
///
/// ```text
/// Zd_{k+1} = G · Δθ · ln(1 + Zd_k / (ψ · Δθ))     with Zd_0 = 1
/// ```
///
/// # Input
///
/// * `drive` -- the effective capillary drive G = max(ψ, Geff)
/// * `psi` -- the raw capillary potential ψ
/// * `delta_theta` -- the moisture content spacing between bins Δθ
/// * `n_max_iterations` -- maximum number of iterations
/// * `tol_abs` -- absolute tolerance on successive estimates
///
/// # Output
///
/// Hitting the iteration cap is not an error: the last estimate is returned with `converged = false`
/// so that the caller may report it. Only NaN or Inf values are treated as errors.
pub fn solve_characteristic_depth(
    drive: f64,
    psi: f64,
    delta_theta: f64,
    n_max_iterations: usize,
    tol_abs: f64,
) -> Result<ZdSolution, StrError> {
    let den = psi * delta_theta;
    let mut zd_old = ZD_SEED;
    let mut solution = ZdSolution {
        value: ZD_SEED,
        iterations: 0,
        residual: f64::MAX,
        converged: false,
    };
    for k in 0..n_max_iterations {
        let zd = drive * delta_theta * f64::ln(1.0 + zd_old / den);
        if !zd.is_finite() {
            return Err("characteristic depth iterations found NaN or Inf");
        }
        solution.value = zd;
        solution.iterations = k + 1;
        solution.residual = f64::abs(zd - zd_old);
        if solution.residual < tol_abs {
            solution.converged = true;
            break;
        }
        zd_old = zd;
    }
    Ok(solution)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
