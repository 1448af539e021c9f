//! VQE optimization

use qvb_core::{ExpvalCost, Optimizer};

use crate::defaults::vqe_defaults;
use crate::hyperparams::HyperParams;
use crate::Result;

const STEPSIZE: f64 = 0.4;

/// Performs `n_steps` of VQE on the resolved Hamiltonian: gradient descent
/// on ⟨H⟩, evaluating the energy after each step.
///
/// Recognized hyperparameters: `hamiltonian`, `template`, `params`,
/// `n_steps`, `device`, `interface`, `diff_method`, `optimize` (Hamiltonian
/// term grouping).
pub fn benchmark_vqe(hyperparams: &mut HyperParams) -> Result<()> {
    let settings = vqe_defaults(hyperparams)?;
    let cost = ExpvalCost::new(
        &settings.ansatz,
        settings.hamiltonian,
        settings.device,
        settings.diff_method,
        settings.optimize,
    )?;
    let mut opt = Optimizer::gradient_descent(STEPSIZE, settings.params);

    for _ in 0..settings.n_steps {
        let grads = cost.gradient(opt.params())?;
        opt.step(&grads)?;
        let _energy = cost.value(opt.params())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_with_defaults() {
        let mut hp = HyperParams::new();
        benchmark_vqe(&mut hp).unwrap();
    }

    #[test]
    fn test_grouping_flag_changes_measurement_passes() {
        use crate::defaults::vqe_defaults;
        use qvb_core::ExpvalCost;

        let mut grouped_hp = HyperParams::new();
        grouped_hp.set("optimize", true);
        let s = vqe_defaults(&mut grouped_hp).unwrap();
        let grouped = ExpvalCost::new(&s.ansatz, s.hamiltonian, s.device, s.diff_method, s.optimize)
            .unwrap();

        let mut plain_hp = HyperParams::new();
        plain_hp.set("optimize", false);
        let s = vqe_defaults(&mut plain_hp).unwrap();
        let plain = ExpvalCost::new(&s.ansatz, s.hamiltonian, s.device, s.diff_method, s.optimize)
            .unwrap();

        assert_eq!(plain.measurement_passes(), 15);
        assert!(grouped.measurement_passes() < plain.measurement_passes());
    }

    #[test]
    fn test_parameter_shift_variant() {
        let mut hp = HyperParams::new();
        hp.set("diff_method", "parameter-shift");
        hp.set("n_steps", 2usize);
        benchmark_vqe(&mut hp).unwrap();
    }

    #[test]
    fn test_lih_hamiltonian_override() {
        // heavier molecule: 8 wires, 105 terms, custom matching ansatz
        let mut hp = HyperParams::new();
        hp.set("hamiltonian", qvb_core::hamiltonians::lih());
        hp.set("template", qvb_core::Template::excitation(2, 8));
        hp.set("device", qvb_core::Device::new("default.qubit", 8).unwrap());
        hp.set("params", vec![0.0; qvb_core::Template::excitation(2, 8).n_params()]);
        benchmark_vqe(&mut hp).unwrap();
    }
}
