//! Expectation-value cost functions for variational optimization

use crate::circuit::Circuit;
use crate::device::Device;
use crate::error::Result;
use crate::grad::{self, DiffMethod};
use crate::observable::Hamiltonian;
use crate::templates::Template;

/// Cost function ⟨H⟩ of an ansatz on a device.
///
/// With `optimize = true`, Hamiltonian terms are grouped into qubit-wise
/// commuting sets once at construction; every value/gradient evaluation then
/// performs one measurement pass per group instead of per term.
#[derive(Debug, Clone)]
pub struct ExpvalCost {
    circuit: Circuit,
    hamiltonian: Hamiltonian,
    device: Device,
    diff_method: DiffMethod,
    groups: Option<Vec<Vec<usize>>>,
}

impl ExpvalCost {
    pub fn new(
        ansatz: &Template,
        hamiltonian: Hamiltonian,
        device: Device,
        diff_method: DiffMethod,
        optimize: bool,
    ) -> Result<Self> {
        let circuit = ansatz.build()?;
        let groups = if optimize {
            Some(hamiltonian.qwc_groups())
        } else {
            None
        };
        Ok(ExpvalCost {
            circuit,
            hamiltonian,
            device,
            diff_method,
            groups,
        })
    }

    pub fn n_params(&self) -> usize {
        self.circuit.num_params()
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    /// Measurement passes one cost evaluation performs: the number of QWC
    /// groups when grouping is on, the term count otherwise.
    pub fn measurement_passes(&self) -> usize {
        match &self.groups {
            Some(groups) => groups.len(),
            None => self.hamiltonian.n_terms(),
        }
    }

    pub fn is_grouped(&self) -> bool {
        self.groups.is_some()
    }

    /// Evaluate ⟨H⟩ at `params`.
    pub fn value(&self, params: &[f64]) -> Result<f64> {
        self.device
            .expval(&self.circuit, params, &self.hamiltonian, self.groups.as_deref())
    }

    /// Gradient of ⟨H⟩ at `params` with the configured method.
    pub fn gradient(&self, params: &[f64]) -> Result<Vec<f64>> {
        grad::gradient(
            &self.device,
            &self.circuit,
            params,
            &self.hamiltonian,
            self.diff_method,
            self.groups.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hamiltonians;
    use approx::assert_abs_diff_eq;

    fn h2_cost(optimize: bool) -> ExpvalCost {
        ExpvalCost::new(
            &Template::excitation(2, 4),
            hamiltonians::h2(),
            Device::new("default.qubit", 4).unwrap(),
            DiffMethod::Best,
            optimize,
        )
        .unwrap()
    }

    #[test]
    fn test_grouping_reduces_measurement_passes() {
        let grouped = h2_cost(true);
        let ungrouped = h2_cost(false);
        assert_eq!(ungrouped.measurement_passes(), 15);
        assert!(grouped.measurement_passes() < ungrouped.measurement_passes());
    }

    #[test]
    fn test_grouped_and_ungrouped_values_agree() {
        let grouped = h2_cost(true);
        let ungrouped = h2_cost(false);
        let params = [0.1, -0.2, 0.3];
        assert_abs_diff_eq!(
            grouped.value(&params).unwrap(),
            ungrouped.value(&params).unwrap(),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_hartree_fock_energy() {
        // all-zero parameters leave the Hartree-Fock reference untouched
        let cost = h2_cost(true);
        let hf = cost.value(&[0.0, 0.0, 0.0]).unwrap();
        assert_abs_diff_eq!(hf, -1.117506, epsilon = 1e-5);
    }
}
