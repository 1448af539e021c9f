//! Single circuit evaluation

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::defaults::core_defaults;
use crate::hyperparams::HyperParams;
use crate::Result;

/// Evaluates the resolved circuit's measurement once per repeat.
///
/// Recognized hyperparameters: `n_wires`, `n_layers`, `interface`,
/// `params`, `measurement`, `diff_method`, `device`, `template`.
pub fn benchmark_circuit(hyperparams: &mut HyperParams, num_repeats: usize) -> Result<()> {
    let settings = core_defaults(hyperparams)?;
    let circuit = settings.template.build()?;
    let params: Vec<f64> = settings.params.iter().copied().collect();
    let mut rng = StdRng::from_entropy();

    for _ in 0..num_repeats {
        settings
            .device
            .measure(&circuit, &params, &settings.measurement, &mut rng)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_with_defaults() {
        let mut hp = HyperParams::new();
        benchmark_circuit(&mut hp, 1).unwrap();
    }

    #[test]
    fn test_runs_on_sparse_device() {
        let mut hp = HyperParams::new();
        hp.set("device", "sparse.qubit");
        hp.set("n_wires", 3usize);
        hp.set("n_layers", 2usize);
        benchmark_circuit(&mut hp, 2).unwrap();
    }

    #[test]
    fn test_mismatched_params_propagate() {
        use ndarray::Array2;
        let mut hp = HyperParams::new();
        // default template expects (6, 4) parameters
        hp.set("params", Array2::<f64>::zeros((2, 2)));
        assert!(benchmark_circuit(&mut hp, 1).is_err());
    }
}
