//! Device registry and execution
//!
//! Devices are addressed by name, mirroring how the benchmarks configure
//! them: `"default.qubit"` is the dense statevector backend,
//! `"sparse.qubit"` the hash-map backend. Unknown names error at
//! construction time.

use rand::Rng;

use crate::circuit::Circuit;
use crate::error::{Error, Result};
use crate::observable::{Hamiltonian, PauliString};
use crate::sparse::SparseStateVector;
use crate::state::StateVector;

/// Names accepted by [`Device::new`].
pub const DEVICE_NAMES: [&str; 2] = ["default.qubit", "sparse.qubit"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    DefaultQubit,
    SparseQubit,
}

/// An execution target with a fixed wire count.
#[derive(Debug, Clone)]
pub struct Device {
    kind: DeviceKind,
    wires: usize,
}

/// Final state of a circuit execution, backend-specific.
#[derive(Debug, Clone)]
pub enum Execution {
    Dense(StateVector),
    Sparse(SparseStateVector),
}

/// What to extract from the final state.
#[derive(Debug, Clone)]
pub enum Measurement {
    /// Expectation value of a single Pauli string.
    Expval(PauliString),
    /// Computational-basis samples.
    Sample { shots: usize },
}

impl Measurement {
    /// The default measurement of the benchmark family: ⟨Z₀⟩.
    pub fn expval_z0() -> Self {
        Measurement::Expval(PauliString::z(0))
    }
}

impl Device {
    pub fn new(name: &str, wires: usize) -> Result<Self> {
        let kind = match name {
            "default.qubit" => DeviceKind::DefaultQubit,
            "sparse.qubit" => DeviceKind::SparseQubit,
            other => return Err(Error::UnknownDevice(other.to_string())),
        };
        Ok(Device { kind, wires })
    }

    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        match self.kind {
            DeviceKind::DefaultQubit => "default.qubit",
            DeviceKind::SparseQubit => "sparse.qubit",
        }
    }

    pub fn wires(&self) -> usize {
        self.wires
    }

    fn check_circuit(&self, circuit: &Circuit) -> Result<()> {
        if circuit.num_wires() > self.wires {
            return Err(Error::WireMismatch {
                circuit: circuit.num_wires(),
                device: self.wires,
            });
        }
        Ok(())
    }

    /// Run the circuit and return the backend-specific final state.
    pub fn execute(&self, circuit: &Circuit, params: &[f64]) -> Result<Execution> {
        self.execute_with_shift(circuit, params, None)
    }

    pub(crate) fn execute_with_shift(
        &self,
        circuit: &Circuit,
        params: &[f64],
        shift: Option<(usize, f64)>,
    ) -> Result<Execution> {
        self.check_circuit(circuit)?;
        match self.kind {
            DeviceKind::DefaultQubit => {
                let mut state = StateVector::new(self.wires);
                circuit.run_on_with_shift(&mut state, params, shift)?;
                Ok(Execution::Dense(state))
            }
            DeviceKind::SparseQubit => {
                let mut state = SparseStateVector::new(self.wires);
                circuit.run_on_with_shift(&mut state, params, shift)?;
                Ok(Execution::Sparse(state))
            }
        }
    }

    /// ⟨H⟩ of the circuit's output state. With `groups`, terms are
    /// evaluated group-wise (one basis rotation per group).
    pub fn expval(
        &self,
        circuit: &Circuit,
        params: &[f64],
        hamiltonian: &Hamiltonian,
        groups: Option<&[Vec<usize>]>,
    ) -> Result<f64> {
        self.expval_with_shift(circuit, params, hamiltonian, groups, None)
    }

    pub(crate) fn expval_with_shift(
        &self,
        circuit: &Circuit,
        params: &[f64],
        hamiltonian: &Hamiltonian,
        groups: Option<&[Vec<usize>]>,
        shift: Option<(usize, f64)>,
    ) -> Result<f64> {
        let execution = self.execute_with_shift(circuit, params, shift)?;
        Ok(match (&execution, groups) {
            (Execution::Dense(state), None) => hamiltonian.expectation_dense(state),
            (Execution::Dense(state), Some(groups)) => {
                hamiltonian.grouped_expectation_dense(state, groups)
            }
            (Execution::Sparse(state), None) => hamiltonian.expectation_sparse(state),
            (Execution::Sparse(state), Some(groups)) => {
                hamiltonian.grouped_expectation_sparse(state, groups)
            }
        })
    }

    /// Expectation of a single Pauli string.
    pub fn expval_obs(
        &self,
        circuit: &Circuit,
        params: &[f64],
        observable: &PauliString,
    ) -> Result<f64> {
        if let Some(wire) = observable.max_wire() {
            if wire >= self.wires {
                return Err(Error::WireOutOfRange {
                    wire,
                    wires: self.wires,
                });
            }
        }
        Ok(match self.execute(circuit, params)? {
            Execution::Dense(state) => observable.expectation_dense(&state),
            Execution::Sparse(state) => observable.expectation_sparse(&state),
        })
    }

    /// Computational-basis samples of the output state.
    pub fn sample<R: Rng>(
        &self,
        circuit: &Circuit,
        params: &[f64],
        shots: usize,
        rng: &mut R,
    ) -> Result<Vec<usize>> {
        Ok(match self.execute(circuit, params)? {
            Execution::Dense(state) => crate::ops::sample(&state, shots, rng),
            Execution::Sparse(state) => state.sample(shots, rng),
        })
    }

    /// Evaluate a measurement on the output state.
    pub fn measure<R: Rng>(
        &self,
        circuit: &Circuit,
        params: &[f64],
        measurement: &Measurement,
        rng: &mut R,
    ) -> Result<()> {
        match measurement {
            Measurement::Expval(obs) => {
                self.expval_obs(circuit, params, obs)?;
            }
            Measurement::Sample { shots } => {
                self.sample(circuit, params, *shots, rng)?;
            }
        }
        Ok(())
    }
}
