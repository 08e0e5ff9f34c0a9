/// Defines the directory where the simulation result files are saved
pub const DEFAULT_OUT_DIR: &str = "/tmp/fwcsim/results";

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/fwcsim/test";

/// Defines the number of seconds in one hour (time steps are given in seconds; durations in hours)
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Defines the initial guess of the characteristic depth Zd (cm)
pub const ZD_SEED: f64 = 1.0;

/// Defines the default maximum number of iterations for the characteristic depth
pub const ZD_N_MAX_ITERATIONS: usize = 10_000;

/// Defines the default absolute tolerance on successive characteristic depth estimates (cm)
pub const ZD_TOL_ABS: f64 = 0.0005;

/// Defines the default tolerance on the mass-balance residual (cm)
pub const TOL_MASS_BALANCE: f64 = 1e-8;
