//! Suite definitions
//!
//! Three suites, split the way the workloads are consumed: `core` for
//! circuit/gradient/optimization speed, `device` for backend comparison,
//! `app` for the VQE and QAOA application loops.

pub mod app;
pub mod core;
pub mod device;

use crate::hyperparams::HyperValue;
use crate::suite::Suite;

pub(crate) fn ints(values: &[usize]) -> Vec<HyperValue> {
    values.iter().map(|&v| HyperValue::Int(v)).collect()
}

pub(crate) fn bools(values: &[bool]) -> Vec<HyperValue> {
    values.iter().map(|&v| HyperValue::Bool(v)).collect()
}

pub(crate) fn strs(values: &[&str]) -> Vec<HyperValue> {
    values.iter().map(|&v| HyperValue::from(v)).collect()
}

/// Every suite in the repository, in run order.
pub fn all_suites() -> Vec<Suite> {
    vec![
        core::circuit_evaluation(),
        core::gradient_computation(),
        core::optimization(),
        core::state_allocation(),
        device::circuit_evaluation(),
        app::vqe_evaluation(),
        app::qaoa_evaluation(),
    ]
}
