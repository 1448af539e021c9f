//! Fixed end-to-end pipelines
//!
//! Three workflows with hard-coded shapes, parameterized only by device
//! name: a small seeded optimization, a wide QAOA evaluation over the
//! min-vertex-cover cost Hamiltonian, and a qchem step against H₂.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use qvb_core::{
    gradient, qaoa, Circuit, Device, DiffMethod, ExpvalCost, Hamiltonian, Optimizer, PauliString,
    Template,
};

use crate::Result;

const SEED: u64 = 42;

/// A simple optimization workflow: 2 gradient-descent steps on a seeded
/// 6-layer entangler circuit over 4 wires.
pub fn benchmark_casual(device_name: &str) -> Result<()> {
    const N_STEPS: usize = 2;
    const N_WIRES: usize = 4;
    const N_LAYERS: usize = 6;

    let device = Device::new(device_name, N_WIRES)?;
    let circuit = Template::basic_entangler(N_WIRES, N_LAYERS).build()?;
    let observable = Hamiltonian::from_terms(vec![PauliString::z(0)]);

    let mut rng = StdRng::seed_from_u64(SEED);
    let normal = Normal::new(0.0, 1.0).expect("valid std dev");
    let initial: Vec<f64> = (0..circuit.num_params())
        .map(|_| normal.sample(&mut rng))
        .collect();

    let mut opt = Optimizer::gradient_descent(0.1, initial);
    for _ in 0..N_STEPS {
        let grads = gradient(
            &device,
            &circuit,
            opt.params(),
            &observable,
            DiffMethod::Best,
            None,
        )?;
        opt.step(&grads)?;
    }
    Ok(())
}

/// A substantial QAOA workflow: one cost/mixer layer over the complete
/// graph on 15 vertices with the min-vertex-cover cost Hamiltonian,
/// evaluated with a per-wire sample measurement.
pub fn benchmark_power(device_name: &str) -> Result<()> {
    const N_WIRES: usize = 15;
    const SHOTS: usize = 100;

    let device = Device::new(device_name, N_WIRES)?;
    let graph = qvb_core::Graph::complete(N_WIRES);
    let (cost, _mixer) = qaoa::min_vertex_cover(&graph);

    let mut circuit = Circuit::new(N_WIRES);
    let first = circuit.declare_params(2);
    for wire in 0..N_WIRES {
        circuit.h(wire);
    }
    qaoa::cost_layer(&mut circuit, first, &cost);
    qaoa::mixer_layer(&mut circuit, first + 1, N_WIRES);

    let params = [0.5, 0.5];
    let mut rng = StdRng::seed_from_u64(SEED);
    device.sample(&circuit, &params, SHOTS, &mut rng)?;
    Ok(())
}

/// A basic qchem workflow: one gradient-descent step on a three-parameter
/// excitation circuit against the H₂ Hamiltonian, with term grouping.
pub fn benchmark_qchem(device_name: &str) -> Result<()> {
    const N_WIRES: usize = 4;

    let device = Device::new(device_name, N_WIRES)?;

    let mut circuit = Circuit::new(N_WIRES);
    circuit.x(0);
    circuit.x(1);
    circuit.double_excitation([0, 1, 2, 3]);
    circuit.single_excitation(0, 2);
    circuit.single_excitation(1, 3);

    let cost = ExpvalCost::new(
        &Template::Custom(circuit),
        qvb_core::hamiltonians::h2(),
        device,
        DiffMethod::Best,
        true,
    )?;

    let mut opt = Optimizer::gradient_descent(0.5, vec![0.0; 3]);
    let grads = cost.gradient(opt.params())?;
    opt.step(&grads)?;
    let _energy = cost.value(opt.params())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_casual_on_both_devices() {
        benchmark_casual("default.qubit").unwrap();
        benchmark_casual("sparse.qubit").unwrap();
    }

    #[test]
    fn test_power_runs() {
        benchmark_power("default.qubit").unwrap();
    }

    #[test]
    fn test_qchem_lowers_energy_from_hartree_fock() {
        benchmark_qchem("default.qubit").unwrap();
    }

    #[test]
    fn test_unknown_device_rejected() {
        assert!(benchmark_casual("braket.aws.qubit").is_err());
    }
}
