use super::MassBalance;
use crate::StrError;
use russell_lab::Vector;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the state of an infiltration simulation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FwcState {
    /// Number of executed time steps
    pub step: usize,

    /// Time (h)
    pub t: f64,

    /// Water sitting on the surface awaiting infiltration (cm)
    pub ponded: f64,

    /// Wetted depth of each bin (cm)
    ///
    /// Only the entries after the saturated bin are ever modified.
    ///
    /// (n_bin)
    pub depth: Vector,

    /// Index of the deepest bin that has ever started wetting (never decreases)
    pub right_most: usize,

    /// Indicates that the time loop has stopped
    pub finished: bool,

    /// Cumulative water budget
    pub mass: MassBalance,
}

impl FwcState {
    /// Allocates a new instance with dry unsaturated bins and no ponded water
    pub fn new(n_bin: usize, saturated_index: usize) -> Result<Self, StrError> {
        if saturated_index >= n_bin {
            return Err("the saturated index must be smaller than the number of bins");
        }
        Ok(FwcState {
            step: 0,
            t: 0.0,
            ponded: 0.0,
            depth: Vector::new(n_bin),
            right_most: saturated_index,
            finished: false,
            mass: MassBalance::new(),
        })
    }

    /// Returns the sum of wetted depths of all bins
    pub fn total_depth(&self) -> f64 {
        self.depth.as_data().iter().sum()
    }

    /// Returns the number of bins with non-zero wetted depth
    pub fn n_wetted(&self) -> usize {
        self.depth.as_data().iter().filter(|d| **d > 0.0).count()
    }

    /// Reads a JSON file containing the state data
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
        let state = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(state)
    }

    /// Writes a JSON file with the state data
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
        serde_json::to_writer(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::FwcState;
    use crate::base::DEFAULT_TEST_DIR;
    use crate::StrError;

    #[test]
    fn new_captures_errors() {
        assert_eq!(
            FwcState::new(3, 3).err(),
            Some("the saturated index must be smaller than the number of bins")
        );
    }

    #[test]
    fn new_works() -> Result<(), StrError> {
        let state = FwcState::new(5, 1)?;
        assert_eq!(state.step, 0);
        assert_eq!(state.t, 0.0);
        assert_eq!(state.ponded, 0.0);
        assert_eq!(state.depth.as_data(), &[0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(state.right_most, 1);
        assert!(!state.finished);
        assert_eq!(state.total_depth(), 0.0);
        assert_eq!(state.n_wetted(), 0);
        Ok(())
    }

    #[test]
    fn read_and_write_work() -> Result<(), StrError> {
        let mut state = FwcState::new(4, 0)?;
        state.step = 12;
        state.t = 0.5;
        state.ponded = 0.25;
        state.depth[1] = 2.0;
        state.depth[2] = 1.5;
        state.right_most = 2;
        state.mass.rainfall = 4.0;
        state.mass.unsaturated = 3.5;
        assert_eq!(state.total_depth(), 3.5);
        assert_eq!(state.n_wetted(), 2);

        let path = format!("{}/fwc_state_read_and_write_work.json", DEFAULT_TEST_DIR);
        state.write_json(&path)?;
        let read = FwcState::read_json(&path)?;
        assert_eq!(read.step, 12);
        assert_eq!(read.t, 0.5);
        assert_eq!(read.ponded, 0.25);
        assert_eq!(read.depth.as_data(), state.depth.as_data());
        assert_eq!(read.right_most, 2);
        assert_eq!(read.mass, state.mass);

        assert_eq!(
            FwcState::read_json("/tmp/fwcsim/__nonexistent__.json").err(),
            Some("cannot open file")
        );
        Ok(())
    }
}
