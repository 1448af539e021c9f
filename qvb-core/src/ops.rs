//! Gate application on the dense register
//!
//! Wire `q` is bit `q` of the basis index (LSB first). Two-qubit gates take
//! their 4x4 matrix in |q1 q2⟩ order with `q1` the more significant bit of
//! the pair.

use ndarray::Array2;
use num_complex::Complex64;
use rand::Rng;

use crate::state::StateVector;

/// Minimal surface a circuit needs to run on a backend.
pub trait Register {
    fn num_qubits(&self) -> usize;
    fn apply_1q(&mut self, qubit: usize, gate: &Array2<Complex64>);
    fn apply_2q(&mut self, qubit1: usize, qubit2: usize, gate: &Array2<Complex64>);
    fn apply_double_excitation(&mut self, wires: &[usize; 4], theta: f64);
}

pub fn apply_gate_1q(state: &mut StateVector, qubit: usize, gate: &Array2<Complex64>) {
    let bit = 1 << qubit;
    let dim = state.dimension();

    let u00 = gate[[0, 0]];
    let u01 = gate[[0, 1]];
    let u10 = gate[[1, 0]];
    let u11 = gate[[1, 1]];

    // Visit each (|..0..⟩, |..1..⟩) amplitude pair exactly once.
    for idx in 0..dim {
        if idx & bit != 0 {
            continue;
        }
        let partner = idx | bit;
        let alpha = state.amplitudes[idx];
        let beta = state.amplitudes[partner];
        state.amplitudes[idx] = u00 * alpha + u01 * beta;
        state.amplitudes[partner] = u10 * alpha + u11 * beta;
    }
}

pub fn apply_gate_2q(
    state: &mut StateVector,
    qubit1: usize,
    qubit2: usize,
    gate: &Array2<Complex64>,
) {
    let bit1 = 1 << qubit1;
    let bit2 = 1 << qubit2;
    let dim = state.dimension();

    for idx in 0..dim {
        // base indices have 0 at both target wires
        if idx & (bit1 | bit2) != 0 {
            continue;
        }
        let i00 = idx;
        let i01 = idx | bit2;
        let i10 = idx | bit1;
        let i11 = idx | bit1 | bit2;

        let src = [
            state.amplitudes[i00],
            state.amplitudes[i01],
            state.amplitudes[i10],
            state.amplitudes[i11],
        ];

        let mut dst = [Complex64::new(0.0, 0.0); 4];
        for (r, out) in dst.iter_mut().enumerate() {
            for (c, v) in src.iter().enumerate() {
                *out += gate[[r, c]] * v;
            }
        }

        state.amplitudes[i00] = dst[0];
        state.amplitudes[i01] = dst[1];
        state.amplitudes[i10] = dst[2];
        state.amplitudes[i11] = dst[3];
    }
}

/// Double-excitation (Givens) rotation on four wires: mixes the
/// |1100⟩ / |0011⟩ occupation patterns of `wires`, identity elsewhere.
pub fn apply_double_excitation(state: &mut StateVector, wires: &[usize; 4], theta: f64) {
    let occ = (1 << wires[0]) | (1 << wires[1]);
    let virt = (1 << wires[2]) | (1 << wires[3]);
    let mask = occ | virt;
    let c = (theta / 2.0).cos();
    let s = (theta / 2.0).sin();
    let dim = state.dimension();

    for idx in 0..dim {
        // select |1100⟩ pattern; its partner is |0011⟩
        if idx & mask != occ {
            continue;
        }
        let partner = idx ^ mask;
        let a = state.amplitudes[idx];
        let b = state.amplitudes[partner];
        state.amplitudes[idx] = c * a - s * b;
        state.amplitudes[partner] = s * a + c * b;
    }
}

/// Draw one computational-basis sample.
pub fn measure<R: Rng>(state: &StateVector, rng: &mut R) -> usize {
    let r: f64 = rng.gen();
    let mut cumulative = 0.0;
    for i in 0..state.dimension() {
        cumulative += state.probability(i);
        if r <= cumulative {
            return i;
        }
    }
    state.dimension() - 1
}

/// Draw `shots` computational-basis samples.
pub fn sample<R: Rng>(state: &StateVector, shots: usize, rng: &mut R) -> Vec<usize> {
    (0..shots).map(|_| measure(state, rng)).collect()
}

impl Register for StateVector {
    fn num_qubits(&self) -> usize {
        StateVector::num_qubits(self)
    }

    fn apply_1q(&mut self, qubit: usize, gate: &Array2<Complex64>) {
        apply_gate_1q(self, qubit, gate);
    }

    fn apply_2q(&mut self, qubit1: usize, qubit2: usize, gate: &Array2<Complex64>) {
        apply_gate_2q(self, qubit1, qubit2, gate);
    }

    fn apply_double_excitation(&mut self, wires: &[usize; 4], theta: f64) {
        apply_double_excitation(self, wires, theta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bell_state() {
        let mut state = StateVector::new(2);
        apply_gate_1q(&mut state, 0, &gates::hadamard());
        apply_gate_2q(&mut state, 0, 1, &gates::cnot());

        assert_abs_diff_eq!(state.probability(0), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(state.probability(3), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(state.probability(1), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(state.probability(2), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_x_flips_wire() {
        let mut state = StateVector::new(3);
        apply_gate_1q(&mut state, 2, &gates::pauli_x());
        assert_abs_diff_eq!(state.probability(4), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cnot_on_nonadjacent_wires() {
        let mut state = StateVector::new(3);
        apply_gate_1q(&mut state, 0, &gates::pauli_x());
        // control wire 0 set, target wire 2
        apply_gate_2q(&mut state, 0, 2, &gates::cnot());
        assert_abs_diff_eq!(state.probability(0b101), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_double_excitation_rotates_occupation() {
        let mut state = StateVector::new(4);
        apply_gate_1q(&mut state, 0, &gates::pauli_x());
        apply_gate_1q(&mut state, 1, &gates::pauli_x());
        // |1100⟩ (idx 3) rotates into |0011⟩ (idx 12)
        apply_double_excitation(&mut state, &[0, 1, 2, 3], std::f64::consts::PI);
        assert_abs_diff_eq!(state.probability(3), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(state.probability(12), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sampling_respects_distribution() {
        let mut state = StateVector::new(1);
        apply_gate_1q(&mut state, 0, &gates::pauli_x());
        let mut rng = StdRng::seed_from_u64(7);
        let samples = sample(&state, 32, &mut rng);
        assert!(samples.iter().all(|&s| s == 1));
    }
}
