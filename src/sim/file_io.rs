use super::{Anomaly, FwcState, InfiltrationSimulator, MassBalance, MoistureProfile, Termination};
use crate::base::{Config, DEFAULT_OUT_DIR};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the results of a simulation as written to the summary file
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FwcSummary {
    /// Holds the configuration used in the run
    pub config: Config,

    /// Holds the reason for stopping the time loop
    pub termination: Option<Termination>,

    /// Holds the number of executed time steps
    pub n_step: usize,

    /// Holds the final moisture content versus wetted depth profile
    pub profile: MoistureProfile,

    /// Holds the cumulative water budget
    pub mass: MassBalance,

    /// Holds all anomalies found during the run
    pub anomalies: Vec<Anomaly>,

    /// Holds the indices of the state files
    pub indices: Vec<usize>,

    /// Holds the time step counts corresponding to each state file
    pub steps: Vec<usize>,

    /// Holds the simulation times corresponding to each state file
    pub times: Vec<f64>,
}

impl FwcSummary {
    /// Reads a JSON file containing the summary
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(path).map_err(|_| "cannot open file")?;
        let buffered = BufReader::new(file);
        let summary = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(summary)
    }

    /// Writes a JSON file with the summary
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

/// Assists in generating output files
#[derive(Clone, Debug)]
pub struct FileIo {
    /// Holds a flag to enable/disable the file generation
    enabled: bool,

    /// Defines the output directory
    output_dir: String,

    /// Defines the filename stem
    filename_stem: String,

    /// Holds the count of files written
    output_count: usize,

    /// Holds the indices of the output files
    pub indices: Vec<usize>,

    /// Holds the time step counts corresponding to each output file
    pub steps: Vec<usize>,

    /// Holds the simulation times corresponding to each output file
    pub times: Vec<f64>,
}

impl FileIo {
    /// Allocates a new instance with deactivated generation of files
    pub fn new() -> Self {
        FileIo {
            enabled: false,
            output_dir: String::new(),
            filename_stem: String::new(),
            output_count: 0,
            indices: Vec::new(),
            steps: Vec::new(),
            times: Vec::new(),
        }
    }

    /// Allocates a new instance with activated generation of files
    ///
    /// # Input
    ///
    /// * `filename_stem` -- the last part of the filename without extension, e.g., "my_simulation"
    /// * `output_directory` -- the directory to save the output files.
    ///   None means that the default directory will be used; see [DEFAULT_OUT_DIR]
    pub fn new_enabled(filename_stem: &str, output_directory: Option<&str>) -> Result<Self, StrError> {
        if filename_stem.is_empty() {
            return Err("the filename stem must not be empty");
        }

        // output directory
        let out_dir = match output_directory {
            Some(d) => d,
            None => DEFAULT_OUT_DIR,
        };

        // create directory
        fs::create_dir_all(out_dir).map_err(|_| "cannot create output directory")?;

        // new structure
        Ok(FileIo {
            enabled: true,
            output_dir: out_dir.to_string(),
            filename_stem: filename_stem.to_string(),
            output_count: 0,
            indices: Vec::new(),
            steps: Vec::new(),
            times: Vec::new(),
        })
    }

    /// Indicates whether the file generation is enabled or not
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Generates the filename path for the summary file
    pub fn path_summary(&self) -> String {
        if self.enabled {
            format!("{}/{}-summary.json", self.output_dir, self.filename_stem)
        } else {
            "".to_string()
        }
    }

    /// Generates the filename path for the moisture profile file
    pub fn path_profile(&self) -> String {
        if self.enabled {
            format!("{}/{}-profile.csv", self.output_dir, self.filename_stem)
        } else {
            "".to_string()
        }
    }

    /// Generates the filename path for the state files
    pub fn path_state(&self, index: usize) -> String {
        if self.enabled {
            format!("{}/{}-{:0>20}.json", self.output_dir, self.filename_stem, index)
        } else {
            "".to_string()
        }
    }

    /// Returns the time step count of the last state file written (None if nothing was written)
    pub fn last_step(&self) -> Option<usize> {
        self.steps.last().copied()
    }

    /// Writes the current state to a file
    ///
    /// **Note:** No output is generated if the file generation is disabled.
    pub(crate) fn write_state(&mut self, state: &FwcState) -> Result<(), StrError> {
        if self.enabled {
            // save the state
            let path = self.path_state(self.output_count);
            state.write_json(&path)?;

            // update counters
            self.indices.push(self.output_count);
            self.steps.push(state.step);
            self.times.push(state.t);
            self.output_count += 1;
        }
        Ok(())
    }

    /// Writes the moisture profile and the summary files
    ///
    /// **Note:** No output is generated if the file generation is disabled.
    pub(crate) fn write_summary(&self, sim: &InfiltrationSimulator) -> Result<(), StrError> {
        if self.enabled {
            let profile = sim.profile();
            profile.write_csv(&self.path_profile())?;
            let summary = FwcSummary {
                config: *sim.config(),
                termination: sim.termination(),
                n_step: sim.state().step,
                profile,
                mass: *sim.mass_balance(),
                anomalies: sim.anomalies().to_vec(),
                indices: self.indices.clone(),
                steps: self.steps.clone(),
                times: self.times.clone(),
            };
            summary.write_json(&self.path_summary())?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
