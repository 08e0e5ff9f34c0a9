use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines recoverable conditions found while setting up or running a simulation
///
/// None of these stops the simulation; they are collected and reported with the results.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Anomaly {
    /// The characteristic depth of a bin did not converge within the iteration cap
    Unconverged {
        /// Index of the bin
        bin: usize,

        /// Number of iterations performed
        iterations: usize,

        /// Last difference between successive estimates
        residual: f64,
    },

    /// The unsaturated walk reached the last bin still carrying ponded water
    ///
    /// The excess remains ponded and is offered again at the next step. Consecutive exhausted
    /// steps are reported once, at the first step of the sequence.
    ColumnExhausted {
        /// Time step index where the exhaustion began
        step: usize,

        /// Ponded water left after the walk (cm)
        excess: f64,
    },

    /// The water budget does not close within the tolerance
    MassImbalance {
        /// Rainfall minus infiltrated minus ponded water (cm)
        error: f64,
    },
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anomaly::Unconverged {
                bin,
                iterations,
                residual,
            } => write!(
                f,
                "characteristic depth of bin {} did not converge after {} iterations (residual = {:e})",
                bin, iterations, residual
            ),
            Anomaly::ColumnExhausted { step, excess } => write!(
                f,
                "all bins were wetted at step {} with {:e} cm of water still ponded",
                step, excess
            ),
            Anomaly::MassImbalance { error } => write!(f, "mass balance error = {:e} cm", error),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Anomaly;

    #[test]
    fn display_works() {
        let a = Anomaly::Unconverged {
            bin: 3,
            iterations: 10,
            residual: 0.5,
        };
        assert_eq!(
            format!("{}", a),
            "characteristic depth of bin 3 did not converge after 10 iterations (residual = 5e-1)"
        );
        let a = Anomaly::ColumnExhausted { step: 7, excess: 2.0 };
        assert_eq!(
            format!("{}", a),
            "all bins were wetted at step 7 with 2e0 cm of water still ponded"
        );
        let a = Anomaly::MassImbalance { error: 0.001 };
        assert_eq!(format!("{}", a), "mass balance error = 1e-3 cm");
    }

    #[test]
    fn serialize_works() {
        let a = Anomaly::ColumnExhausted { step: 7, excess: 2.0 };
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, r#"{"ColumnExhausted":{"step":7,"excess":2.0}}"#);
        let b: Anomaly = serde_json::from_str(&json).unwrap();
        assert_eq!(a, b);
    }
}
