//! QAOA circuit evaluation

use rand::rngs::StdRng;
use rand::SeedableRng;

use qvb_core::Template;

use crate::defaults::qaoa_defaults;
use crate::hyperparams::HyperParams;
use crate::Result;

const SHOTS: usize = 100;

/// Evaluates the QAOA circuit for the resolved graph with a
/// computational-basis sample measurement, `n_steps` times.
///
/// Recognized hyperparameters: `graph`, `n_layers`, `params`, `n_steps`,
/// `device`, `diff_method`.
pub fn benchmark_qaoa(hyperparams: &mut HyperParams) -> Result<()> {
    let settings = qaoa_defaults(hyperparams)?;
    let circuit = Template::qaoa(settings.graph.clone(), settings.n_layers).build()?;
    let params: Vec<f64> = settings.params.iter().copied().collect();
    let mut rng = StdRng::from_entropy();

    for _ in 0..settings.n_steps {
        settings.device.sample(&circuit, &params, SHOTS, &mut rng)?;
    }
    Ok(())
}
