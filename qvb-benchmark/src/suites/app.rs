//! Application suites: VQE and QAOA.

use qvb_core::Graph;

use crate::functions::{benchmark_qaoa, benchmark_vqe};
use crate::suite::{Benchmark, ParamPoint, Suite};
use crate::suites::{bools, ints, strs};
use crate::Result;

/// VQE on the hydrogen molecule over step count, term grouping, and
/// differentiation method.
pub fn vqe_evaluation() -> Suite {
    Suite::new("VQEEvaluation")
        .with_params(
            &["n_steps", "optimize", "diff_method"],
            vec![
                ints(&[1, 3]),
                bools(&[false, true]),
                strs(&["best", "parameter-shift"]),
            ],
        )
        .with_benchmark(Benchmark::time("hydrogen", run_hydrogen))
}

fn run_hydrogen(point: &ParamPoint) -> Result<()> {
    let mut hp = point.hyperparams();
    benchmark_vqe(&mut hp)
}

/// QAOA MaxCut evaluation over graph size and depth.
pub fn qaoa_evaluation() -> Suite {
    Suite::new("QAOAEvaluation")
        .with_params(&["n_wires", "n_layers"], vec![ints(&[4, 6]), ints(&[1, 2])])
        .with_benchmark(Benchmark::time("maxcut", run_maxcut))
}

fn run_maxcut(point: &ParamPoint) -> Result<()> {
    let mut hp = point.hyperparams();
    let n_wires = hp.pop_usize("n_wires", 4)?;
    hp.set("graph", Graph::complete(n_wires));
    benchmark_qaoa(&mut hp)
}
