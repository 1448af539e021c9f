//! Record-and-backward gradient driver
//!
//! The second training interface next to the direct gradient call: forward
//! evaluations are recorded on a tape, `backward` replays them through the
//! shift rules and accumulates gradients. Mirrors how an eager autodiff
//! framework drives the same computation.

use crate::circuit::Circuit;
use crate::device::Device;
use crate::error::Result;
use crate::grad::{self, DiffMethod};
use crate::observable::Hamiltonian;

#[derive(Debug, Clone)]
struct TapeEntry {
    circuit: Circuit,
    hamiltonian: Hamiltonian,
    params: Vec<f64>,
    method: DiffMethod,
    groups: Option<Vec<Vec<usize>>>,
}

/// Gradient tape over a device.
#[derive(Debug)]
pub struct GradientTape<'d> {
    device: &'d Device,
    entries: Vec<TapeEntry>,
}

impl<'d> GradientTape<'d> {
    pub fn new(device: &'d Device) -> Self {
        GradientTape {
            device,
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forward pass: evaluate ⟨H⟩ and record the evaluation.
    pub fn record(
        &mut self,
        circuit: &Circuit,
        hamiltonian: &Hamiltonian,
        params: &[f64],
        method: DiffMethod,
    ) -> Result<f64> {
        let value = self.device.expval(circuit, params, hamiltonian, None)?;
        self.entries.push(TapeEntry {
            circuit: circuit.clone(),
            hamiltonian: hamiltonian.clone(),
            params: params.to_vec(),
            method,
            groups: None,
        });
        Ok(value)
    }

    /// Backward pass: gradients of every recorded evaluation, accumulated
    /// entry-wise. Clears the tape.
    pub fn backward(&mut self) -> Result<Vec<f64>> {
        let mut total: Vec<f64> = Vec::new();
        for entry in &self.entries {
            let grads = grad::gradient(
                self.device,
                &entry.circuit,
                &entry.params,
                &entry.hamiltonian,
                entry.method,
                entry.groups.as_deref(),
            )?;
            if total.is_empty() {
                total = grads;
            } else {
                for (t, g) in total.iter_mut().zip(grads.iter()) {
                    *t += g;
                }
            }
        }
        self.entries.clear();
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_tape_matches_direct_gradient() {
        let device = Device::new("default.qubit", 2).unwrap();
        let mut circuit = Circuit::new(2);
        circuit.ry(0);
        circuit.cnot(0, 1);
        let h = Hamiltonian::all_z(2);
        let params = [0.8];

        let direct = grad::gradient(
            &device,
            &circuit,
            &params,
            &h,
            DiffMethod::ParameterShift,
            None,
        )
        .unwrap();

        let mut tape = GradientTape::new(&device);
        tape.record(&circuit, &h, &params, DiffMethod::ParameterShift)
            .unwrap();
        let taped = tape.backward().unwrap();

        assert_eq!(direct.len(), taped.len());
        for (a, b) in direct.iter().zip(taped.iter()) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-12);
        }
        assert!(tape.is_empty());
    }

    #[test]
    fn test_tape_accumulates_entries() {
        let device = Device::new("default.qubit", 1).unwrap();
        let mut circuit = Circuit::new(1);
        circuit.rx(0);
        let h = Hamiltonian::all_z(1);

        let mut tape = GradientTape::new(&device);
        tape.record(&circuit, &h, &[0.5], DiffMethod::ParameterShift)
            .unwrap();
        tape.record(&circuit, &h, &[0.5], DiffMethod::ParameterShift)
            .unwrap();
        let grads = tape.backward().unwrap();

        assert_abs_diff_eq!(grads[0], -2.0 * 0.5_f64.sin(), epsilon = 1e-9);
    }
}
