//! # qvb-benchmark
//!
//! Hyperparameter-driven micro-benchmarks for variational quantum
//! workloads: circuit evaluation, gradient computation, optimization loops,
//! hybrid training, VQE and QAOA. Benchmark functions resolve a
//! hyperparameter mapping against per-family defaults and run a fixed loop
//! against the `qvb-core` engine; suites sweep parameter grids and record
//! wall-clock and peak-memory measurements.

pub mod defaults;
pub mod functions;
pub mod hyperparams;
pub mod memory;
pub mod report;
pub mod suite;
pub mod suites;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BenchError>;

#[derive(Error, Debug)]
pub enum BenchError {
    /// A recognized hyperparameter key holds a value of the wrong kind.
    #[error("hyperparameter '{key}' expects {expected}, got {got}")]
    HyperparamType {
        key: String,
        expected: &'static str,
        got: &'static str,
    },

    /// Interface name outside {autograd, tape}.
    #[error("unknown interface '{0}'")]
    UnknownInterface(String),

    /// Gradient benchmarks need an expectation-value measurement.
    #[error("measurement is not differentiable")]
    NonDifferentiableMeasurement,

    #[error(transparent)]
    Engine(#[from] qvb_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub use defaults::{core_defaults, qaoa_defaults, vqe_defaults, Interface};
pub use hyperparams::{HyperParams, HyperValue};
pub use suite::{Benchmark, ParamPoint, RunConfig, Suite, SuiteResult, TrackKind};
