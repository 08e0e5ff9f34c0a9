use crate::StrError;
use russell_lab::Vector;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Holds the final moisture content versus wetted depth profile
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MoistureProfile {
    /// Water left on the surface (cm)
    pub ponded: f64,

    /// Moisture content of each bin in increasing order (n_bin)
    pub theta: Vector,

    /// Wetted depth of each bin (cm) (n_bin)
    pub depth: Vector,
}

impl MoistureProfile {
    /// Returns the message reporting the ponded water
    pub fn ponded_message(&self) -> String {
        format!("Ponded (cm): {:.8}", self.ponded)
    }

    /// Returns the two-column table with 8 fixed decimals
    pub fn to_csv(&self) -> String {
        let mut buffer = String::from("#MoistureContent,Depth\n");
        for j in 0..self.theta.dim() {
            buffer.push_str(&format!("{:.8},{:.8}\n", self.theta[j], self.depth[j]));
        }
        buffer
    }

    /// Writes the two-column table to a CSV file
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_csv<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        file.write_all(self.to_csv().as_bytes())
            .map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
