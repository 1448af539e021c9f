//! Circuit training with gradient descent

use qvb_core::{gradient, GradientTape, Optimizer};

use crate::defaults::{core_defaults, Interface};
use crate::functions::observable_hamiltonian;
use crate::hyperparams::HyperParams;
use crate::Result;

const STEPSIZE: f64 = 0.1;

/// Trains the resolved circuit for `n_steps` gradient-descent steps,
/// repeating the whole loop `num_repeats` times.
pub fn benchmark_optimization(
    hyperparams: &mut HyperParams,
    n_steps: usize,
    num_repeats: usize,
) -> Result<()> {
    let settings = core_defaults(hyperparams)?;
    let circuit = settings.template.build()?;
    let initial: Vec<f64> = settings.params.iter().copied().collect();
    let observable = observable_hamiltonian(&settings.measurement)?;

    for _ in 0..num_repeats {
        let mut opt = Optimizer::gradient_descent(STEPSIZE, initial.clone());

        for _ in 0..n_steps {
            let grads = match settings.interface {
                Interface::Autograd => gradient(
                    &settings.device,
                    &circuit,
                    opt.params(),
                    &observable,
                    settings.diff_method,
                    None,
                )?,
                Interface::Tape => {
                    let mut tape = GradientTape::new(&settings.device);
                    tape.record(&circuit, &observable, opt.params(), settings.diff_method)?;
                    tape.backward()?
                }
            };
            opt.step(&grads)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_training_runs() {
        let mut hp = HyperParams::new();
        hp.set("n_wires", 2usize);
        hp.set("n_layers", 1usize);
        benchmark_optimization(&mut hp, 3, 1).unwrap();
    }

    #[test]
    fn test_training_through_tape() {
        let mut hp = HyperParams::new();
        hp.set("n_wires", 2usize);
        hp.set("n_layers", 1usize);
        hp.set("interface", "tape");
        benchmark_optimization(&mut hp, 3, 1).unwrap();
    }

    #[test]
    fn test_training_lowers_cost() {
        use ndarray::Array2;
        use qvb_core::DiffMethod;

        let mut hp = HyperParams::new();
        hp.set("n_wires", 2usize);
        hp.set("n_layers", 1usize);
        hp.set("params", Array2::from_elem((1, 2), 0.4));

        let settings = core_defaults(&mut hp).unwrap();
        let circuit = settings.template.build().unwrap();
        let observable = observable_hamiltonian(&settings.measurement).unwrap();

        let before = settings
            .device
            .expval(&circuit, &[0.4, 0.4], &observable, None)
            .unwrap();

        let mut opt = qvb_core::Optimizer::gradient_descent(0.1, vec![0.4, 0.4]);
        for _ in 0..10 {
            let g = qvb_core::gradient(
                &settings.device,
                &circuit,
                opt.params(),
                &observable,
                DiffMethod::ParameterShift,
                None,
            )
            .unwrap();
            opt.step(&g).unwrap();
        }
        let after = settings
            .device
            .expval(&circuit, opt.params(), &observable, None)
            .unwrap();

        assert!(after < before);
    }
}
