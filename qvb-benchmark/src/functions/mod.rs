//! Benchmark functions
//!
//! One function per workload. Each resolves its hyperparameters, runs a
//! fixed loop against the engine, and returns `Ok(())`; the caller times or
//! memory-profiles the call. Failures propagate unhandled.

mod circuit;
mod gradient;
mod machine_learning;
mod optimization;
mod pipelines;
mod qaoa;
mod vqe;

pub use circuit::benchmark_circuit;
pub use gradient::benchmark_gradient;
pub use machine_learning::benchmark_machine_learning;
pub use optimization::benchmark_optimization;
pub use pipelines::{benchmark_casual, benchmark_power, benchmark_qchem};
pub use qaoa::benchmark_qaoa;
pub use vqe::benchmark_vqe;

use qvb_core::{Hamiltonian, Measurement};

use crate::{BenchError, Result};

/// The observable behind an expectation-value measurement, as a one-term
/// Hamiltonian the gradient machinery can differentiate.
pub(crate) fn observable_hamiltonian(measurement: &Measurement) -> Result<Hamiltonian> {
    match measurement {
        Measurement::Expval(obs) => Ok(Hamiltonian::from_terms(vec![obs.clone()])),
        Measurement::Sample { .. } => Err(BenchError::NonDifferentiableMeasurement),
    }
}
