use crate::base::{Control, ParamRainfall};
use crate::StrError;
use russell_lab::Vector;

/// Holds the rainfall depth (cm) falling at each time step
///
/// The pulse occupies the steps `i_start ≤ i < i_end` with
///
/// ```text
/// i_start = floor(n_steps · t_start / t_fin)
/// i_end   = i_start + floor(n_steps · duration / t_fin)
/// ```
///
/// and each of these steps receives `intensity · Δt`. Steps beyond the horizon are dropped.
pub struct RainfallSchedule {
    /// Rainfall depth per step (n_steps)
    depth: Vector,

    /// First step receiving rain
    i_start: usize,

    /// One past the last step of the rain window (may exceed n_steps)
    i_end: usize,
}

impl RainfallSchedule {
    /// Allocates a new instance
    pub fn new(param: &ParamRainfall, control: &Control) -> Result<Self, StrError> {
        if param.validate().is_some() {
            return Err("cannot allocate rainfall schedule because the rainfall parameters are invalid");
        }
        if control.time_step <= 0.0 || control.t_fin < 0.0 {
            return Err("cannot allocate rainfall schedule because the time step or horizon is invalid");
        }
        let n_steps = control.n_time_steps();
        let mut depth = Vector::new(n_steps);
        if n_steps == 0 {
            return Ok(RainfallSchedule {
                depth,
                i_start: 0,
                i_end: 0,
            });
        }
        let steps = n_steps as f64;
        let i_start = (steps * param.t_start / control.t_fin) as usize;
        let i_end = i_start + (steps * param.duration / control.t_fin) as usize;
        let depth_per_step = param.intensity * control.dt();
        for i in i_start..usize::min(i_end, n_steps) {
            depth[i] = depth_per_step;
        }
        Ok(RainfallSchedule { depth, i_start, i_end })
    }

    /// Returns the number of time steps in the schedule
    pub fn n_steps(&self) -> usize {
        self.depth.dim()
    }

    /// Returns the rainfall depth at step i (zero beyond the horizon)
    pub fn depth(&self, i: usize) -> f64 {
        if i < self.depth.dim() {
            self.depth[i]
        } else {
            0.0
        }
    }

    /// Returns the first step of the rain window
    pub fn i_start(&self) -> usize {
        self.i_start
    }

    /// Returns one past the last step of the rain window
    pub fn i_end(&self) -> usize {
        self.i_end
    }

    /// Indicates whether the rain window has ended at step i
    pub fn has_ended(&self, i: usize) -> bool {
        i >= self.i_end
    }

    /// Returns the total rainfall depth over the horizon
    pub fn total(&self) -> f64 {
        self.depth.as_data().iter().sum()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
