//! Core-operation suites: circuit evaluation, gradients, optimization.

use qvb_core::StateVector;

use crate::functions::{benchmark_circuit, benchmark_gradient, benchmark_optimization};
use crate::suite::{Benchmark, ParamPoint, Suite};
use crate::suites::ints;
use crate::Result;

/// Circuit evaluation over widths and depths.
pub fn circuit_evaluation() -> Suite {
    Suite::new("CircuitEvaluation")
        .with_params(
            &["n_wires", "n_layers"],
            vec![ints(&[2, 5, 10]), ints(&[3, 6, 9])],
        )
        .with_benchmark(Benchmark::time("circuit", run_circuit))
        .with_benchmark(Benchmark::peakmem("circuit", run_circuit))
}

fn run_circuit(point: &ParamPoint) -> Result<()> {
    let mut hp = point.hyperparams();
    benchmark_circuit(&mut hp, 1)
}

/// Gradient computation over widths and depths, per interface.
pub fn gradient_computation() -> Suite {
    Suite::new("GradientComputation")
        .with_params(&["n_wires", "n_layers"], vec![ints(&[2, 5]), ints(&[3, 6])])
        .with_benchmark(Benchmark::time("gradient_autograd", run_gradient_autograd))
        .with_benchmark(Benchmark::time("gradient_tape", run_gradient_tape))
}

fn run_gradient_autograd(point: &ParamPoint) -> Result<()> {
    let mut hp = point.hyperparams();
    hp.set("interface", "autograd");
    benchmark_gradient(&mut hp, 1)
}

fn run_gradient_tape(point: &ParamPoint) -> Result<()> {
    let mut hp = point.hyperparams();
    hp.set("interface", "tape");
    benchmark_gradient(&mut hp, 1)
}

/// Gradient descent on the default circuit, per interface.
pub fn optimization() -> Suite {
    Suite::new("Optimization")
        .with_benchmark(Benchmark::time(
            "optimization_autograd",
            run_optimization_autograd,
        ))
        .with_benchmark(Benchmark::time("optimization_tape", run_optimization_tape))
}

const OPTIMIZATION_STEPS: usize = 10;

fn run_optimization_autograd(point: &ParamPoint) -> Result<()> {
    let mut hp = point.hyperparams();
    hp.set("interface", "autograd");
    benchmark_optimization(&mut hp, OPTIMIZATION_STEPS, 1)
}

fn run_optimization_tape(point: &ParamPoint) -> Result<()> {
    let mut hp = point.hyperparams();
    hp.set("interface", "tape");
    benchmark_optimization(&mut hp, OPTIMIZATION_STEPS, 1)
}

/// Statevector allocation footprint.
pub fn state_allocation() -> Suite {
    Suite::new("StateAllocation")
        .with_params(&["n_wires"], vec![ints(&[10, 15, 20])])
        .with_benchmark(Benchmark::peakmem("state", run_state_allocation))
}

fn run_state_allocation(point: &ParamPoint) -> Result<()> {
    let mut hp = point.hyperparams();
    let n_wires = hp.pop_usize("n_wires", 10)?;
    let state = StateVector::new(n_wires);
    std::hint::black_box(&state);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suite::RunConfig;

    #[test]
    fn test_grids_match_declared_axes() {
        assert_eq!(circuit_evaluation().grid_points().len(), 9);
        assert_eq!(gradient_computation().grid_points().len(), 4);
        assert_eq!(optimization().grid_points().len(), 1);
    }

    #[test]
    fn test_small_sweep_completes() {
        // single trial over the smallest grid point set
        let suite = Suite::new("CircuitSmoke")
            .with_params(&["n_wires", "n_layers"], vec![ints(&[2]), ints(&[1])])
            .with_benchmark(Benchmark::time("circuit", run_circuit));
        let result = suite.run(&RunConfig {
            trials: 1,
            warmup: 0,
        });
        assert_eq!(result.failures().count(), 0);
        assert_eq!(result.measurements.len(), 1);
    }
}
