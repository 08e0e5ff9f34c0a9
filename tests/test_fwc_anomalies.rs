use fwcsim::prelude::*;
use fwcsim::StrError;
use russell_lab::approx_eq;

#[test]
fn test_fwc_unconverged_characteristic_depth() -> Result<(), StrError> {
    let mut config = Config::new();
    config.set_n_bin(40)?.set_zd_solver(3, 0.0005)?;
    let mut sim = InfiltrationSimulator::new(&config)?;

    // reported at setup, one anomaly per unconverged bin
    let n_unconverged = sim.column().unconverged().len();
    assert!(n_unconverged > 0);
    assert_eq!(sim.anomalies().len(), n_unconverged);
    for anomaly in sim.anomalies() {
        match anomaly {
            Anomaly::Unconverged { iterations, .. } => assert_eq!(*iterations, 3),
            _ => panic!("only Unconverged anomalies are expected"),
        }
    }

    // the simulation still runs with the unconverged estimates
    let termination = sim.run(&mut FileIo::new())?;
    assert_eq!(termination, Termination::RainAbsorbed { step: 360 });
    approx_eq(sim.mass_balance().residual(sim.state().ponded), 0.0, 1e-10);
    Ok(())
}

#[test]
fn test_fwc_column_exhaustion() -> Result<(), StrError> {
    // extreme rainfall on a coarse column wets every bin in the first step
    let mut config = Config::new();
    config.set_n_bin(40)?;
    config.rainfall.intensity = 5000.0;
    let mut sim = InfiltrationSimulator::new(&config)?;
    let termination = sim.run(&mut FileIo::new())?;
    assert_eq!(termination, Termination::RainAbsorbed { step: 360 });

    let exhausted: Vec<_> = sim
        .anomalies()
        .iter()
        .filter(|a| matches!(a, Anomaly::ColumnExhausted { .. }))
        .collect();
    assert!(exhausted.len() >= 1);
    // consecutive exhausted steps are reported once
    let steps: Vec<_> = exhausted
        .iter()
        .map(|a| match a {
            Anomaly::ColumnExhausted { step, .. } => *step,
            _ => unreachable!(),
        })
        .collect();
    assert!(steps.windows(2).all(|w| w[1] > w[0] + 1));
    match exhausted[0] {
        Anomaly::ColumnExhausted { step, excess } => {
            assert_eq!(*step, 0);
            assert!(*excess > 0.0);
        }
        _ => unreachable!(),
    }

    // the excess stays ponded and is absorbed later; no water is lost
    let state = sim.state();
    assert_eq!(state.ponded, 0.0);
    approx_eq(sim.mass_balance().rainfall, 1250.0, 1e-9);
    approx_eq(sim.mass_balance().residual(state.ponded), 0.0, 1e-8);
    assert!(!sim
        .anomalies()
        .iter()
        .any(|a| matches!(a, Anomaly::MassImbalance { .. })));
    Ok(())
}

#[test]
fn test_fwc_invalid_configuration() {
    let mut config = Config::new();
    config.soil.theta_e = config.soil.theta_r;
    assert_eq!(
        InfiltrationSimulator::new(&config).err(),
        Some("cannot allocate simulator because config.validate() failed")
    );

    // NaN and Inf never reach the time loop
    let mut config = Config::new();
    config.rainfall.intensity = f64::NAN;
    assert_eq!(
        InfiltrationSimulator::new(&config).err(),
        Some("cannot allocate simulator because config.validate() failed")
    );
    let mut config = Config::new();
    config.control.t_fin = f64::INFINITY;
    assert_eq!(
        InfiltrationSimulator::new(&config).err(),
        Some("cannot allocate simulator because config.validate() failed")
    );
    let mut config = Config::new();
    config.soil.k_sat = f64::NAN;
    assert_eq!(
        InfiltrationSimulator::new(&config).err(),
        Some("cannot allocate simulator because config.validate() failed")
    );
}
