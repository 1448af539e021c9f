//! Gradient of a circuit's expectation value

use qvb_core::{gradient, GradientTape};

use crate::defaults::{core_defaults, Interface};
use crate::functions::observable_hamiltonian;
use crate::hyperparams::HyperParams;
use crate::Result;

/// Computes the gradient of the resolved circuit's expectation value with
/// the resolved differentiation method, `num_repeats` times.
///
/// Unless overridden, the circuit is 6 entangler layers on 4 wires measuring
/// ⟨Z₀⟩, differentiated by parameter shift on `default.qubit`.
pub fn benchmark_gradient(hyperparams: &mut HyperParams, num_repeats: usize) -> Result<()> {
    let settings = core_defaults(hyperparams)?;
    let circuit = settings.template.build()?;
    let params: Vec<f64> = settings.params.iter().copied().collect();
    let observable = observable_hamiltonian(&settings.measurement)?;

    for _ in 0..num_repeats {
        match settings.interface {
            Interface::Autograd => {
                gradient(
                    &settings.device,
                    &circuit,
                    &params,
                    &observable,
                    settings.diff_method,
                    None,
                )?;
            }
            Interface::Tape => {
                let mut tape = GradientTape::new(&settings.device);
                tape.record(&circuit, &observable, &params, settings.diff_method)?;
                tape.backward()?;
            }
        }
    }
    Ok(())
}
