use super::{Anomaly, FwcState, Termination};
use crate::base::Control;

/// Prints the time stepping statistics and anomalies
pub(crate) struct Progress {
    verbose_timesteps: bool,
    verbose_anomalies: bool,
}

impl Progress {
    /// Allocates a new instance
    pub(crate) fn new(control: &Control) -> Self {
        Progress {
            verbose_timesteps: control.verbose_timesteps,
            verbose_anomalies: control.verbose_anomalies,
        }
    }

    /// Prints the header before time stepping
    pub(crate) fn print_header(&self) {
        if self.verbose_timesteps {
            println!("\nFWCSIM === TIME STEPPING STATISTICS =============================================");
            println!("{}", "─".repeat(79));
            println!(
                "{:>8} {:>13} {:>13} {:>13} {:>13} {:>9}",
                "timestep", "t", "rain", "ponded", "Σdepth", "rightmost"
            );
            println!("{}", "─".repeat(79));
        }
    }

    /// Prints timestep information
    pub(crate) fn print_timestep(&self, state: &FwcState, rain: f64) {
        if self.verbose_timesteps {
            println!(
                "{:>8} {:>13.6e} {:>13.6e} {:>13.6e} {:>13.6e} {:>9}",
                state.step,
                state.t,
                rain,
                state.ponded,
                state.total_depth(),
                state.right_most
            );
        }
    }

    /// Prints an anomaly
    pub(crate) fn print_anomaly(&self, anomaly: &Anomaly) {
        if self.verbose_anomalies {
            println!("WARNING: {}", anomaly);
        }
    }

    /// Prints the footer after time stepping
    pub(crate) fn print_footer(&self, state: &FwcState, termination: &Termination) {
        if self.verbose_timesteps {
            println!("{}", "─".repeat(79));
            match termination {
                Termination::RainAbsorbed { step } => {
                    println!("rain absorbed and window closed at timestep {}", step + 1)
                }
                Termination::HorizonReached => println!("horizon reached after {} timesteps", state.step),
            }
            println!(
                "rainfall = {:.8}, infiltrated = {:.8}, ponded = {:.8}",
                state.mass.rainfall,
                state.mass.infiltrated(),
                state.ponded
            );
            println!("{}", "─".repeat(79));
        }
    }
}
