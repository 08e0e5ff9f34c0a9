use fwcsim::prelude::*;
use fwcsim::StrError;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "fwc_serial",
    about = "Simulates infiltration of a rainfall pulse into a soil column with the finite water content method"
)]
struct Options {
    /// Effective porosity
    #[structopt(long, default_value = "0.417")]
    theta_e: f64,

    /// Residual moisture content
    #[structopt(long, default_value = "0.020")]
    theta_r: f64,

    /// Wilting point moisture content
    #[structopt(long, default_value = "0.033")]
    theta_w: f64,

    /// Bubbling entry pressure (cm)
    #[structopt(long, default_value = "7.26")]
    psi_b: f64,

    /// Pore distribution index
    #[structopt(long, default_value = "0.694")]
    lambda: f64,

    /// Saturated hydraulic conductivity (cm/h)
    #[structopt(long, default_value = "23.56")]
    k_sat: f64,

    /// Time step (s)
    #[structopt(long, default_value = "2.5")]
    time_step: f64,

    /// Number of moisture content bins
    #[structopt(long, default_value = "400")]
    n_bin: usize,

    /// Duration of simulation (h)
    #[structopt(long, default_value = "3.0")]
    total_time: f64,

    /// Start of rainfall (h)
    #[structopt(long, default_value = "0.0")]
    rain_start: f64,

    /// Duration of rainfall (h)
    #[structopt(long, default_value = "0.25")]
    rain_duration: f64,

    /// Rainfall intensity (cm/h)
    #[structopt(long, default_value = "50.0")]
    rain_rate: f64,

    /// Output directory
    #[structopt(long, default_value = "/tmp/fwcsim/results")]
    out_dir: String,

    /// Filename stem of the output files
    #[structopt(long, default_value = "moisture")]
    stem: String,

    /// Number of time steps between state files
    #[structopt(long)]
    snapshots: Option<usize>,

    /// Generates an SVG figure of the moisture profile
    #[structopt(long)]
    plot: bool,

    /// Prints statistics of every time step
    #[structopt(short, long)]
    verbose: bool,
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();

    // configuration
    let mut config = Config::new();
    config
        .set_soil(ParamSoil {
            theta_e: options.theta_e,
            theta_r: options.theta_r,
            theta_w: options.theta_w,
            psi_b: options.psi_b,
            lambda: options.lambda,
            k_sat: options.k_sat,
        })?
        .set_rainfall(ParamRainfall {
            t_start: options.rain_start,
            duration: options.rain_duration,
            intensity: options.rain_rate,
        })?
        .set_time_step(options.time_step)?
        .set_t_fin(options.total_time)?
        .set_n_bin(options.n_bin)?
        .set_n_step_out(options.snapshots)?
        .set_verbose(options.verbose, true);

    // run simulation
    let mut sim = InfiltrationSimulator::new(&config)?;
    let mut file_io = FileIo::new_enabled(&options.stem, Some(options.out_dir.as_str()))?;
    sim.run(&mut file_io)?;

    // results
    let profile = sim.profile();
    println!("{}", profile.ponded_message());
    if options.plot {
        let path = format!("{}/{}-profile.svg", options.out_dir, options.stem);
        plot_profile(&profile, &path)?;
    }

    // message
    let path_profile = file_io.path_profile();
    let thin_line = format!("{:─^1$}", "", path_profile.len());
    println!("\n{}", thin_line);
    println!("moisture profile written to:");
    println!("{}", path_profile);
    println!("{}", file_io.path_summary());
    println!("{}\n", thin_line);
    Ok(())
}
