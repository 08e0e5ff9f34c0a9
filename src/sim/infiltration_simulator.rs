use super::{Anomaly, FileIo, FwcState, MassBalance, MoistureProfile, Progress, RainfallSchedule};
use crate::base::Config;
use crate::material::SoilColumn;
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Indicates what happened during one time step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    /// Water infiltrated into the unsaturated bins and the depths were relaxed
    Advanced,

    /// All ponded water infiltrated through the saturated bin; the unsaturated bins were skipped
    Absorbed,

    /// The time loop has stopped; no further step will change the state
    Finished,
}

/// Indicates why the time loop stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// The rain window had closed and the saturated bin absorbed all ponded water
    RainAbsorbed {
        /// Index of the last executed time step
        step: usize,
    },

    /// All time steps of the horizon were executed
    HorizonReached,
}

/// Implements the finite water content (FWC) infiltration simulator
///
/// # Time step
///
/// 1. Add the scheduled rainfall to the ponded water
/// 2. Infiltrate through the saturated bin at the rate K(θi)·Δt; if this absorbs all ponded water,
///    either stop (rain window closed) or skip to the next step
/// 3. Walk the unsaturated bins from the saturated index upwards. A dry bin receives its
///    characteristic depth Zd (or all the remaining ponded water). A wetted bin j advances by
///
/// ```text
///        K(θd) - K(θi)  /      G(θj) + hp \
/// dZj = ————————————— · | 1 + —————————— | · Δt
///         θd - θi       \         Zj      /
/// ```
///
///    where θd is the moisture content of the deepest wetted bin (`right_most`), θi the one of the
///    saturated bin, G the effective capillary drive and hp the ponded water.
/// 4. Capillary relaxation: sort the unsaturated depths in non-increasing order.
///
/// **Note:** The relaxation reassigns depths across bin indices. After the sort, `depth[j]` is the
/// j-th largest wetted depth; which bin held which depth before the sort is not preserved.
/// Wetted bins thus always form a contiguous block right after the saturated bin.
///
/// # Reference
///
/// * Talbot CA and Ogden FL (2008) A method for computing infiltration and redistribution in a
///   discretized moisture content domain. Water Resources Research, 44(8), W08453.
pub struct InfiltrationSimulator<'a> {
    /// Holds configuration parameters
    config: &'a Config,

    /// Holds the moisture content bins
    column: SoilColumn,

    /// Holds the rainfall depth at each time step
    rainfall: RainfallSchedule,

    /// Holds the current state
    state: FwcState,

    /// Holds all anomalies found so far
    anomalies: Vec<Anomaly>,

    /// Holds the reason for stopping the time loop
    termination: Option<Termination>,

    /// Indicates that the previous step ended with the column exhausted
    exhausted: bool,

    /// Prints messages
    progress: Progress,
}

impl<'a> InfiltrationSimulator<'a> {
    /// Allocates a new instance
    ///
    /// All bins (including their characteristic depths) are computed here.
    pub fn new(config: &'a Config) -> Result<Self, StrError> {
        if let Some(msg) = config.validate() {
            println!("ERROR: {}", msg);
            return Err("cannot allocate simulator because config.validate() failed");
        }
        let column = SoilColumn::new(&config.soil, &config.control)?;
        let rainfall = RainfallSchedule::new(&config.rainfall, &config.control)?;
        let state = FwcState::new(column.len(), column.saturated_index())?;
        let progress = Progress::new(&config.control);
        let mut anomalies = Vec::new();
        for (index, bin) in column.unconverged() {
            let zd = bin.zd_solution();
            let anomaly = Anomaly::Unconverged {
                bin: index,
                iterations: zd.iterations,
                residual: zd.residual,
            };
            progress.print_anomaly(&anomaly);
            anomalies.push(anomaly);
        }
        Ok(InfiltrationSimulator {
            config,
            column,
            rainfall,
            state,
            anomalies,
            termination: None,
            exhausted: false,
            progress,
        })
    }

    /// Returns the configuration
    pub fn config(&self) -> &Config {
        self.config
    }

    /// Returns the current state
    pub fn state(&self) -> &FwcState {
        &self.state
    }

    /// Returns the moisture content bins
    pub fn column(&self) -> &SoilColumn {
        &self.column
    }

    /// Returns the rainfall schedule
    pub fn rainfall(&self) -> &RainfallSchedule {
        &self.rainfall
    }

    /// Returns all anomalies found so far
    pub fn anomalies(&self) -> &[Anomaly] {
        &self.anomalies
    }

    /// Returns the cumulative water budget
    pub fn mass_balance(&self) -> &MassBalance {
        &self.state.mass
    }

    /// Returns the reason for stopping the time loop (None if still running)
    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    /// Returns the moisture content versus wetted depth profile
    pub fn profile(&self) -> MoistureProfile {
        MoistureProfile {
            ponded: self.state.ponded,
            theta: self.column.theta_values(),
            depth: self.state.depth.clone(),
        }
    }

    /// Executes one time step
    pub fn step(&mut self) -> Result<StepStatus, StrError> {
        if self.termination.is_some() {
            return Ok(StepStatus::Finished);
        }
        let i = self.state.step;
        if i >= self.rainfall.n_steps() {
            self.finish(Termination::HorizonReached);
            return Ok(StepStatus::Finished);
        }

        // collect rainfall
        let dt = self.config.control.dt();
        let rain = self.rainfall.depth(i);
        self.state.ponded += rain;
        self.state.mass.rainfall += rain;
        self.state.step = i + 1;
        self.state.t = (self.state.step as f64) * dt;

        // infiltration (saturated bin)
        let capacity = self.column.bin(self.column.saturated_index()).conductivity() * dt;
        if capacity < self.state.ponded {
            self.state.ponded -= capacity;
            self.state.mass.saturated += capacity;
        } else {
            self.state.mass.saturated += self.state.ponded;
            self.state.ponded = 0.0;
            self.exhausted = false;
            self.progress.print_timestep(&self.state, rain);
            if self.rainfall.has_ended(i) {
                self.finish(Termination::RainAbsorbed { step: i });
                return Ok(StepStatus::Finished);
            }
            return Ok(StepStatus::Absorbed);
        }

        // infiltration (unsaturated bins)
        let exhausted = self.advance_unsaturated(dt);
        if !self.state.ponded.is_finite() {
            return Err("found NaN or Inf in the ponded water");
        }
        if exhausted && !self.exhausted {
            self.record(Anomaly::ColumnExhausted {
                step: i,
                excess: self.state.ponded,
            });
        }
        self.exhausted = exhausted;

        // capillary relaxation
        self.relax();
        self.progress.print_timestep(&self.state, rain);
        Ok(StepStatus::Advanced)
    }

    /// Runs all time steps until the horizon is reached or the rain is fully absorbed
    ///
    /// The state is written to `file_io` at the start, every `n_step_out` steps, and at the end.
    pub fn run(&mut self, file_io: &mut FileIo) -> Result<Termination, StrError> {
        // helper macro to save the state before returning an error
        macro_rules! run {
            ($e:expr) => {
                match $e {
                    Ok(val) => val,
                    Err(err) => {
                        match file_io.write_state(&self.state) {
                            Ok(_) => (),
                            Err(e) => println!("ERROR-ON-ERROR: cannot write state due to: {}", e),
                        }
                        return Err(err);
                    }
                }
            };
        }

        file_io.write_state(&self.state)?;
        self.progress.print_header();
        let n_step_out = self.config.control.n_step_out;
        loop {
            let status = run!(self.step());
            if status == StepStatus::Finished {
                break;
            }
            if let Some(n) = n_step_out {
                if self.state.step % n == 0 {
                    file_io.write_state(&self.state)?;
                }
            }
        }
        if file_io.last_step() != Some(self.state.step) {
            file_io.write_state(&self.state)?;
        }
        let termination = self.termination.ok_or("the time loop stopped without termination")?;
        file_io.write_summary(self)?;
        Ok(termination)
    }

    /// Walks the unsaturated bins and distributes the ponded water
    ///
    /// Returns true if the walk went past the last bin with ponded water left.
    fn advance_unsaturated(&mut self, dt: f64) -> bool {
        let column = &self.column;
        let state = &mut self.state;
        let n_bin = column.len();
        let initial = column.bin(column.saturated_index());
        for j in (column.saturated_index() + 1)..n_bin {
            let bin = column.bin(j);

            // start wetting a dry bin
            if state.depth[j] == 0.0 {
                state.right_most = usize::min(state.right_most + 1, n_bin - 1);
                let zd = bin.characteristic_depth();
                if zd < state.ponded {
                    state.depth[j] = zd;
                    state.ponded -= zd;
                    state.mass.unsaturated += zd;
                    continue;
                }
                state.depth[j] = state.ponded;
                state.mass.unsaturated += state.ponded;
                state.ponded = 0.0;
                return false;
            }

            // advance a wetted bin
            let front = column.bin(state.right_most);
            let slope = (front.conductivity() - initial.conductivity()) / (front.theta() - initial.theta());
            let rate = slope * (1.0 + (bin.capillary_drive() + state.ponded) / state.depth[j]);
            let increment = rate * dt;
            if increment < state.ponded {
                state.depth[j] += increment;
                state.ponded -= increment;
                state.mass.unsaturated += increment;
            } else {
                state.depth[j] += state.ponded;
                state.mass.unsaturated += state.ponded;
                state.ponded = 0.0;
                return false;
            }
        }
        state.ponded > 0.0
    }

    /// Sorts the unsaturated depths in non-increasing order
    fn relax(&mut self) {
        let start = self.column.saturated_index() + 1;
        let depth = self.state.depth.as_mut_data();
        depth[start..].sort_by(|a, b| b.total_cmp(a));
    }

    /// Stops the time loop and checks the water budget
    fn finish(&mut self, termination: Termination) {
        self.termination = Some(termination);
        self.state.finished = true;
        let error = self.state.mass.residual(self.state.ponded);
        if f64::abs(error) > self.config.control.tol_mass_balance {
            self.record(Anomaly::MassImbalance { error });
        }
        self.progress.print_footer(&self.state, &termination);
    }

    /// Records and prints an anomaly
    fn record(&mut self, anomaly: Anomaly) {
        self.progress.print_anomaly(&anomaly);
        self.anomalies.push(anomaly);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{InfiltrationSimulator, StepStatus, Termination};
    use crate::base::{Config, SampleParams};
    use crate::sim::{Anomaly, FileIo};
    use crate::StrError;
    use russell_lab::approx_eq;

    fn is_non_increasing(values: &[f64]) -> bool {
        values.windows(2).all(|w| w[0] >= w[1])
    }

    #[test]
    fn new_captures_errors() {
        let mut config = Config::new();
        config.control.n_bin = 1;
        assert_eq!(
            InfiltrationSimulator::new(&config).err(),
            Some("cannot allocate simulator because config.validate() failed")
        );
        let mut config = Config::new();
        config.control.n_bin = 2;
        config.soil.theta_w = 0.416;
        assert_eq!(
            InfiltrationSimulator::new(&config).err(),
            Some("the wilting point leaves no unsaturated bin")
        );
    }

    #[test]
    fn new_works() -> Result<(), StrError> {
        let config = Config::new();
        let sim = InfiltrationSimulator::new(&config)?;
        assert_eq!(sim.column().len(), 400);
        assert_eq!(sim.column().saturated_index(), 33);
        assert_eq!(sim.rainfall().n_steps(), 4320);
        assert_eq!(sim.state().right_most, 33);
        assert_eq!(sim.state().total_depth(), 0.0);
        assert_eq!(sim.anomalies().len(), 0);
        assert_eq!(sim.termination(), None);
        Ok(())
    }

    #[test]
    fn first_step_wets_bins_after_the_saturated_one() -> Result<(), StrError> {
        let config = Config::new();
        let mut sim = InfiltrationSimulator::new(&config)?;
        let status = sim.step()?;
        assert_eq!(status, StepStatus::Advanced);
        let state = sim.state();
        assert_eq!(state.step, 1);
        approx_eq(state.t, 2.5 / 3600.0, 1e-15);
        // the saturated bin is never tracked
        assert_eq!(state.depth[33], 0.0);
        assert!(state.depth[34] > 0.0);
        assert!(state.right_most > 33);
        assert!(is_non_increasing(&state.depth.as_data()[34..]));
        approx_eq(state.mass.residual(state.ponded), 0.0, 1e-15);
        Ok(())
    }

    #[test]
    fn dry_bins_take_their_characteristic_depth_and_the_walk_continues() -> Result<(), StrError> {
        let mut config = Config::new();
        config.control.n_bin = 10;
        config.rainfall.intensity = 100.0;
        let mut sim = InfiltrationSimulator::new(&config)?;
        assert_eq!(sim.column().saturated_index(), 0);
        let dt = config.control.dt();
        let (b0, b1, b2) = (*sim.column().bin(0), *sim.column().bin(1), *sim.column().bin(2));
        let hp = sim.rainfall().depth(0) - b0.conductivity() * dt;

        // bin 1 is filled with Zd and bin 2 takes the remainder
        assert!(b1.characteristic_depth() < hp);
        assert!(b2.characteristic_depth() > hp - b1.characteristic_depth());
        assert_eq!(sim.step()?, StepStatus::Advanced);
        let state = sim.state();
        assert_eq!(state.right_most, 2);
        assert_eq!(state.depth[1], b1.characteristic_depth());
        approx_eq(state.depth[2], hp - b1.characteristic_depth(), 1e-15);
        assert_eq!(state.depth[3], 0.0);
        assert_eq!(state.ponded, 0.0);
        Ok(())
    }

    #[test]
    fn wetted_bins_advance_with_the_two_point_rate() -> Result<(), StrError> {
        let mut config = Config::new();
        config.control.n_bin = 10;
        config.rainfall.intensity = 100.0;
        let mut sim = InfiltrationSimulator::new(&config)?;
        let dt = config.control.dt();
        let (b0, b1, b2) = (*sim.column().bin(0), *sim.column().bin(1), *sim.column().bin(2));

        // bin 1 absorbs all ponded water in steps 1, 2, and 3
        for _ in 0..4 {
            assert_eq!(sim.step()?, StepStatus::Advanced);
        }
        assert_eq!(sim.state().right_most, 2);
        let depth_1 = sim.state().depth[1];
        let depth_2 = sim.state().depth[2];
        let hp = sim.state().ponded + sim.rainfall().depth(4) - b0.conductivity() * dt;

        // the front (bin 2) sets the slope; the drive is the one of bin 1
        let slope = (b2.conductivity() - b0.conductivity()) / (b2.theta() - b0.theta());
        let increment = slope * (1.0 + (b1.capillary_drive() + hp) / depth_1) * dt;
        assert!(increment < hp);
        assert!(f64::abs(b1.capillary_drive() - b2.capillary_drive()) > 1.0);

        // bin 1 advances by the rate and bin 2 takes the rest
        assert_eq!(sim.step()?, StepStatus::Advanced);
        let state = sim.state();
        assert_eq!(state.right_most, 2);
        approx_eq(state.depth[1], depth_1 + increment, 1e-14);
        approx_eq(state.depth[2], depth_2 + hp - increment, 1e-14);
        assert_eq!(state.depth[3], 0.0);
        assert_eq!(state.ponded, 0.0);
        Ok(())
    }

    #[test]
    fn depths_stay_sorted_after_every_step() -> Result<(), StrError> {
        let mut config = Config::new();
        config.control.n_bin = 100;
        let mut sim = InfiltrationSimulator::new(&config)?;
        let start = sim.column().saturated_index() + 1;
        let mut right_most = sim.state().right_most;
        loop {
            let status = sim.step()?;
            let state = sim.state();
            assert!(is_non_increasing(&state.depth.as_data()[start..]));
            assert!(state.right_most >= right_most);
            right_most = state.right_most;
            if status == StepStatus::Finished {
                break;
            }
        }
        assert_eq!(sim.step()?, StepStatus::Finished);
        Ok(())
    }

    #[test]
    fn no_rain_leaves_the_column_dry() -> Result<(), StrError> {
        let mut config = Config::new();
        config.rainfall = SampleParams::param_no_rain();
        let mut sim = InfiltrationSimulator::new(&config)?;
        assert_eq!(sim.step()?, StepStatus::Finished);
        assert_eq!(sim.termination(), Some(Termination::RainAbsorbed { step: 0 }));
        assert_eq!(sim.state().ponded, 0.0);
        assert_eq!(sim.state().total_depth(), 0.0);
        assert!(sim.state().finished);
        Ok(())
    }

    #[test]
    fn horizon_shorter_than_one_step_executes_nothing() -> Result<(), StrError> {
        let mut config = Config::new();
        config.control.t_fin = 1.0 / 3600.0; // one second
        let mut sim = InfiltrationSimulator::new(&config)?;
        let mut file_io = FileIo::new();
        let termination = sim.run(&mut file_io)?;
        assert_eq!(termination, Termination::HorizonReached);
        assert_eq!(sim.state().step, 0);
        assert_eq!(sim.state().t, 0.0);
        assert_eq!(sim.state().ponded, 0.0);
        assert_eq!(sim.state().total_depth(), 0.0);
        Ok(())
    }

    #[test]
    fn unconverged_bins_are_reported() -> Result<(), StrError> {
        let mut config = Config::new();
        config.control.n_bin = 40;
        config.control.zd_n_max_iterations = 3;
        let sim = InfiltrationSimulator::new(&config)?;
        assert!(sim.anomalies().len() > 0);
        match sim.anomalies()[0] {
            Anomaly::Unconverged {
                bin,
                iterations,
                residual,
            } => {
                assert_eq!(bin, 0);
                assert_eq!(iterations, 3);
                assert!(residual >= config.control.zd_tol_abs);
            }
            _ => panic!("the first anomaly should be Unconverged"),
        }
        Ok(())
    }

    #[test]
    fn persistent_exhaustion_is_reported_once_per_sequence() -> Result<(), StrError> {
        // every bin of a coarse column is wetted in the first step; from step 9 onwards the
        // wetted bins cannot take all the rain anymore
        let mut config = Config::new();
        config.control.n_bin = 10;
        config.rainfall.intensity = 20000.0;
        let mut sim = InfiltrationSimulator::new(&config)?;
        for _ in 0..20 {
            assert_eq!(sim.step()?, StepStatus::Advanced);
        }
        let steps: Vec<_> = sim
            .anomalies()
            .iter()
            .filter_map(|a| match a {
                Anomaly::ColumnExhausted { step, .. } => Some(*step),
                _ => None,
            })
            .collect();
        assert_eq!(steps, &[0, 9]);
        let state = sim.state();
        assert!(state.ponded > 0.0);
        approx_eq(state.mass.residual(state.ponded), 0.0, 1e-10);
        Ok(())
    }

    #[test]
    fn column_exhaustion_keeps_the_excess_ponded() -> Result<(), StrError> {
        let mut config = Config::new();
        config.control.n_bin = 40;
        config.rainfall.intensity = 5000.0;
        let mut sim = InfiltrationSimulator::new(&config)?;
        assert_eq!(sim.step()?, StepStatus::Advanced);
        let state = sim.state();
        assert_eq!(state.right_most, 39);
        assert_eq!(state.n_wetted(), 40 - 4);
        assert!(state.ponded > 0.0);
        assert_eq!(
            sim.anomalies(),
            &[Anomaly::ColumnExhausted {
                step: 0,
                excess: state.ponded
            }]
        );
        approx_eq(state.mass.residual(state.ponded), 0.0, 1e-12);
        Ok(())
    }
}
