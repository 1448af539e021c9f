//! # qvb-core
//!
//! The execution engine behind the `qvb-benchmark` suite: statevector
//! devices, parameterized circuits and templates, Pauli-string observables,
//! parameter-shift gradients, and classical optimizers. The surface is
//! intentionally limited to what the benchmark functions drive.

pub mod circuit;
pub mod cost;
pub mod device;
pub mod error;
pub mod gates;
pub mod grad;
pub mod graph;
pub mod hamiltonians;
pub mod observable;
pub mod ops;
pub mod optimizer;
pub mod qaoa;
pub mod sparse;
pub mod state;
pub mod tape;
pub mod templates;

pub use circuit::{Circuit, GateKind, ParamGate, ShiftRule};
pub use cost::ExpvalCost;
pub use device::{Device, DeviceKind, Execution, Measurement, DEVICE_NAMES};
pub use error::{Error, Result};
pub use grad::{gradient, DiffMethod, FINITE_DIFF_EPSILON, PARAMETER_SHIFT};
pub use graph::{Edge, Graph};
pub use observable::{Hamiltonian, Pauli, PauliString};
pub use optimizer::{Optimizer, OptimizerConfig, OptimizerType};
pub use sparse::SparseStateVector;
pub use state::StateVector;
pub use tape::GradientTape;
pub use templates::{excitations, Template};
