//! Device comparison suite
//!
//! Sweeps the same circuit over every registered device name. A name the
//! registry does not know fails that grid point, and the sweep records the
//! failure and moves on.

use qvb_core::DEVICE_NAMES;

use crate::functions::benchmark_circuit;
use crate::suite::{Benchmark, ParamPoint, Suite};
use crate::suites::{ints, strs};
use crate::Result;

/// Circuit evaluation per device, width, and depth.
pub fn circuit_evaluation() -> Suite {
    Suite::new("DeviceCircuitEvaluation")
        .with_params(
            &["device", "n_wires", "n_layers"],
            vec![strs(&DEVICE_NAMES), ints(&[2, 5, 10]), ints(&[3, 6, 9])],
        )
        .with_benchmark(Benchmark::time("circuit", run_circuit))
}

fn run_circuit(point: &ParamPoint) -> Result<()> {
    let mut hp = point.hyperparams();
    benchmark_circuit(&mut hp, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hyperparams::HyperValue;
    use crate::suite::RunConfig;

    #[test]
    fn test_grid_covers_all_devices() {
        let suite = circuit_evaluation();
        assert_eq!(suite.grid_points().len(), DEVICE_NAMES.len() * 9);
    }

    #[test]
    fn test_unknown_device_fails_its_point_only() {
        let suite = Suite::new("DeviceSmoke")
            .with_params(
                &["device", "n_wires", "n_layers"],
                vec![
                    vec![
                        HyperValue::from("default.qubit"),
                        HyperValue::from("qulacs.simulator"),
                    ],
                    ints(&[2]),
                    ints(&[1]),
                ],
            )
            .with_benchmark(Benchmark::time("circuit", run_circuit));

        let result = suite.run(&RunConfig {
            trials: 1,
            warmup: 0,
        });
        assert_eq!(result.failures().count(), 1);
        let failure = result.failures().next().unwrap();
        assert!(failure.params.contains("qulacs.simulator"));
        // the known device still produced its measurement
        assert!(result
            .measurements
            .iter()
            .any(|m| m.error.is_none() && m.params.contains("default.qubit")));
    }
}
