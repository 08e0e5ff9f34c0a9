use super::MoistureProfile;
use crate::StrError;
use plotpy::{Curve, Plot};
use std::ffi::OsStr;

/// Draws the wetted depth versus moisture content and saves the figure
///
/// The depth axis points downwards, as in a soil column.
///
/// # Input
///
/// * `profile` -- the moisture profile
/// * `full_path` -- may be a String, &str, or Path; the extension selects the format (e.g. ".svg")
pub fn plot_profile<P>(profile: &MoistureProfile, full_path: &P) -> Result<(), StrError>
where
    P: AsRef<OsStr> + ?Sized,
{
    let theta = profile.theta.as_data().to_vec();
    let depth = profile.depth.as_data().to_vec();
    let mut curve = Curve::new();
    curve
        .set_label("wetted depth")
        .set_line_color("#1f77b4")
        .set_marker_style(".")
        .draw(&theta, &depth);
    let mut plot = Plot::new();
    plot.add(&curve)
        .set_inv_y()
        .set_title(&profile.ponded_message())
        .grid_and_labels("moisture content θ", "depth (cm)")
        .legend();
    plot.save(full_path)?;
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
