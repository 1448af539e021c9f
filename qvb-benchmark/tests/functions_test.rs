//! Every benchmark function runs to completion with its documented default
//! hyperparameters, and the suites sweep without failures on the registered
//! devices.

use qvb_benchmark::functions::{
    benchmark_casual, benchmark_circuit, benchmark_gradient, benchmark_machine_learning,
    benchmark_optimization, benchmark_power, benchmark_qaoa, benchmark_qchem, benchmark_vqe,
};
use qvb_benchmark::{suites, HyperParams, RunConfig};

#[test]
fn all_benchmark_functions_run_with_defaults() {
    benchmark_circuit(&mut HyperParams::new(), 1).unwrap();
    benchmark_gradient(&mut HyperParams::new(), 1).unwrap();
    benchmark_optimization(&mut HyperParams::new(), 2, 1).unwrap();
    benchmark_machine_learning(&mut HyperParams::new(), 1).unwrap();
    benchmark_vqe(&mut HyperParams::new()).unwrap();
    benchmark_qaoa(&mut HyperParams::new()).unwrap();
}

#[test]
fn pipelines_run_on_the_local_device() {
    benchmark_casual("default.qubit").unwrap();
    benchmark_power("default.qubit").unwrap();
    benchmark_qchem("default.qubit").unwrap();
}

#[test]
fn pipelines_reject_unknown_devices() {
    assert!(benchmark_casual("ionq").is_err());
    assert!(benchmark_power("tn1").is_err());
    assert!(benchmark_qchem("sv1").is_err());
}

#[test]
fn every_registered_suite_sweeps_cleanly() {
    let config = RunConfig {
        trials: 1,
        warmup: 0,
    };
    for suite in suites::all_suites() {
        let result = suite.run(&config);
        assert_eq!(
            result.failures().count(),
            0,
            "suite {} had failures: {:?}",
            result.name,
            result.failures().collect::<Vec<_>>()
        );
        assert!(!result.measurements.is_empty(), "suite {}", result.name);
    }
}

#[test]
fn suite_results_serialize() {
    let config = RunConfig {
        trials: 1,
        warmup: 0,
    };
    let result = suites::app::qaoa_evaluation().run(&config);
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("QAOAEvaluation"));
    assert!(json.contains("time_maxcut"));
}
