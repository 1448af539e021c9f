//! Hybrid quantum-classical training
//!
//! The circuit's per-wire ⟨Z⟩ expectations feed a classical linear read-out
//! layer; the squared error against a fixed target is minimized jointly over
//! circuit parameters and read-out weights.

use qvb_core::{gradient, Execution, GradientTape, Hamiltonian, Optimizer, PauliString};

use crate::defaults::{core_defaults, Interface};
use crate::hyperparams::HyperParams;
use crate::Result;

const STEPSIZE: f64 = 0.1;
const TRAIN_STEPS: usize = 4;
const TARGET: f64 = 0.25;

/// Trains the hybrid pipeline, repeating the whole loop `num_repeats` times.
pub fn benchmark_machine_learning(hyperparams: &mut HyperParams, num_repeats: usize) -> Result<()> {
    let settings = core_defaults(hyperparams)?;
    let circuit = settings.template.build()?;
    let n_wires = circuit.num_wires();
    let initial: Vec<f64> = settings.params.iter().copied().collect();

    for _ in 0..num_repeats {
        let mut quantum = Optimizer::gradient_descent(STEPSIZE, initial.clone());
        let mut weights = vec![1.0 / n_wires as f64; n_wires];
        let mut bias = 0.0;

        for _ in 0..TRAIN_STEPS {
            // forward pass: one execution, all per-wire features
            let features = wire_features(&settings.device, &circuit, quantum.params(), n_wires)?;
            let prediction: f64 = weights
                .iter()
                .zip(features.iter())
                .map(|(w, f)| w * f)
                .sum::<f64>()
                + bias;
            let residual = 2.0 * (prediction - TARGET);

            // quantum gradient of the weighted read-out observable
            let readout = Hamiltonian::from_terms(
                weights
                    .iter()
                    .enumerate()
                    .map(|(w, &coeff)| PauliString::z(w).scaled(coeff))
                    .collect(),
            );
            let circuit_grads = match settings.interface {
                Interface::Autograd => gradient(
                    &settings.device,
                    &circuit,
                    quantum.params(),
                    &readout,
                    settings.diff_method,
                    None,
                )?,
                Interface::Tape => {
                    let mut tape = GradientTape::new(&settings.device);
                    tape.record(&circuit, &readout, quantum.params(), settings.diff_method)?;
                    tape.backward()?
                }
            };
            let loss_grads: Vec<f64> = circuit_grads.iter().map(|g| residual * g).collect();
            quantum.step(&loss_grads)?;

            // classical update of the read-out layer
            for (w, f) in weights.iter_mut().zip(features.iter()) {
                *w -= STEPSIZE * residual * f;
            }
            bias -= STEPSIZE * residual;
        }
    }
    Ok(())
}

/// ⟨Z_w⟩ for every wire from a single execution.
fn wire_features(
    device: &qvb_core::Device,
    circuit: &qvb_core::Circuit,
    params: &[f64],
    n_wires: usize,
) -> Result<Vec<f64>> {
    let execution = device.execute(circuit, params)?;
    Ok((0..n_wires)
        .map(|w| {
            let z = PauliString::z(w);
            match &execution {
                Execution::Dense(state) => z.expectation_dense(state),
                Execution::Sparse(state) => z.expectation_sparse(state),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_with_small_circuit() {
        let mut hp = HyperParams::new();
        hp.set("n_wires", 2usize);
        hp.set("n_layers", 1usize);
        benchmark_machine_learning(&mut hp, 1).unwrap();
    }

    #[test]
    fn test_runs_through_tape() {
        let mut hp = HyperParams::new();
        hp.set("n_wires", 2usize);
        hp.set("n_layers", 1usize);
        hp.set("interface", "tape");
        benchmark_machine_learning(&mut hp, 1).unwrap();
    }

    #[test]
    fn test_training_reduces_loss() {
        use ndarray::Array2;
        use qvb_core::{Device, DiffMethod};

        let mut hp = HyperParams::new();
        hp.set("n_wires", 2usize);
        hp.set("n_layers", 1usize);
        hp.set("params", Array2::from_elem((1, 2), 0.3));
        let settings = core_defaults(&mut hp).unwrap();
        let circuit = settings.template.build().unwrap();
        let device = Device::new("default.qubit", 2).unwrap();

        let loss = |params: &[f64], weights: &[f64], bias: f64| -> f64 {
            let features = wire_features(&device, &circuit, params, 2).unwrap();
            let pred: f64 = weights
                .iter()
                .zip(features.iter())
                .map(|(w, f)| w * f)
                .sum::<f64>()
                + bias;
            (pred - TARGET).powi(2)
        };

        let mut params = vec![0.3, 0.3];
        let mut weights = vec![0.5, 0.5];
        let mut bias = 0.0;
        let initial_loss = loss(&params, &weights, bias);

        for _ in 0..6 {
            let features = wire_features(&device, &circuit, &params, 2).unwrap();
            let pred: f64 = weights
                .iter()
                .zip(features.iter())
                .map(|(w, f)| w * f)
                .sum::<f64>()
                + bias;
            let residual = 2.0 * (pred - TARGET);

            let readout = Hamiltonian::from_terms(vec![
                PauliString::z(0).scaled(weights[0]),
                PauliString::z(1).scaled(weights[1]),
            ]);
            let grads = gradient(
                &device,
                &circuit,
                &params,
                &readout,
                DiffMethod::ParameterShift,
                None,
            )
            .unwrap();
            for (p, g) in params.iter_mut().zip(grads.iter()) {
                *p -= STEPSIZE * residual * g;
            }
            for (w, f) in weights.iter_mut().zip(features.iter()) {
                *w -= STEPSIZE * residual * f;
            }
            bias -= STEPSIZE * residual;
        }

        assert!(loss(&params, &weights, bias) < initial_loss);
    }
}
