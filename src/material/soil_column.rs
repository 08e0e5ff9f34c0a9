use super::SoilBin;
use crate::base::{Control, ParamSoil};
use crate::StrError;
use russell_lab::Vector;

/// Holds the ordered sequence of moisture content bins of a soil column
///
/// The bins span θr + Δθ, θr + 2Δθ, ..., θe with Δθ = (θe - θr) / N.
/// The last bin is assigned θe exactly so that its relative saturation is one.
pub struct SoilColumn {
    /// Holds all bins sorted by increasing moisture content (n_bin)
    bins: Vec<SoilBin>,

    /// Moisture content spacing Δθ
    delta_theta: f64,

    /// Index of the bin regarded as permanently saturated (from the wilting point)
    ///
    /// At least one unsaturated bin follows it.
    saturated_index: usize,
}

impl SoilColumn {
    /// Allocates a new instance
    ///
    /// All characteristic depths are solved here; nothing is recomputed during the time loop.
    pub fn new(param: &ParamSoil, control: &Control) -> Result<Self, StrError> {
        if param.validate().is_some() {
            return Err("cannot allocate soil column because the soil parameters are invalid");
        }
        let n_bin = control.n_bin;
        if n_bin < 2 {
            return Err("the number of bins must be at least 2");
        }
        let delta_theta = (param.theta_e - param.theta_r) / (n_bin as f64);
        let saturated_index = (param.theta_w / delta_theta) as usize;
        if saturated_index + 1 >= n_bin {
            return Err("the wilting point leaves no unsaturated bin");
        }
        let mut bins = Vec::with_capacity(n_bin);
        for j in 0..n_bin {
            let theta = if j == n_bin - 1 {
                param.theta_e
            } else {
                param.theta_r + ((j + 1) as f64) * delta_theta
            };
            let bin = SoilBin::new(
                theta,
                param,
                delta_theta,
                control.zd_n_max_iterations,
                control.zd_tol_abs,
            )?;
            bins.push(bin);
        }
        Ok(SoilColumn {
            bins,
            delta_theta,
            saturated_index,
        })
    }

    /// Returns the number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Returns all bins
    pub fn bins(&self) -> &[SoilBin] {
        &self.bins
    }

    /// Returns the bin with index j
    ///
    /// # Panics
    ///
    /// A panic occurs if j is out of range.
    pub fn bin(&self, j: usize) -> &SoilBin {
        &self.bins[j]
    }

    /// Returns the moisture content spacing Δθ
    pub fn delta_theta(&self) -> f64 {
        self.delta_theta
    }

    /// Returns the index of the permanently saturated bin
    pub fn saturated_index(&self) -> usize {
        self.saturated_index
    }

    /// Returns the moisture content of all bins
    pub fn theta_values(&self) -> Vector {
        let theta: Vec<_> = self.bins.iter().map(|bin| bin.theta()).collect();
        Vector::from(&theta)
    }

    /// Returns the (index, bin) pairs whose characteristic depth did not converge
    pub fn unconverged(&self) -> Vec<(usize, &SoilBin)> {
        self.bins
            .iter()
            .enumerate()
            .filter(|(_, bin)| !bin.zd_solution().converged)
            .collect()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
