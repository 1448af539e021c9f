//! Dense statevector register

use ndarray::Array1;
use num_complex::Complex64;

/// Dense state of an n-qubit register.
///
/// Amplitudes are indexed by computational basis state, wire `q`
/// corresponding to bit `q` (LSB first): index = Σ_q b_q 2^q.
#[derive(Debug, Clone)]
pub struct StateVector {
    num_qubits: usize,
    pub amplitudes: Array1<Complex64>,
}

impl StateVector {
    /// Creates the register in |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let mut amplitudes = Array1::<Complex64>::zeros(1 << num_qubits);
        amplitudes[0] = Complex64::new(1.0, 0.0);
        StateVector {
            num_qubits,
            amplitudes,
        }
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Hilbert space dimension (2^n).
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Probability of the computational basis state `index`.
    pub fn probability(&self, index: usize) -> f64 {
        if index < self.dimension() {
            self.amplitudes[index].norm_sqr()
        } else {
            0.0
        }
    }

    /// Probabilities of all basis states.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|c| c.norm_sqr()).collect()
    }

    /// Marginal probability of wire `qubit` being |1⟩.
    pub fn marginal_probability(&self, qubit: usize) -> f64 {
        let bit = 1 << qubit;
        self.amplitudes
            .iter()
            .enumerate()
            .filter(|(i, _)| i & bit != 0)
            .map(|(_, c)| c.norm_sqr())
            .sum()
    }

    /// ⟨self|other⟩
    pub fn inner_product(&self, other: &StateVector) -> Complex64 {
        self.amplitudes
            .iter()
            .zip(other.amplitudes.iter())
            .map(|(a, b)| a.conj() * b)
            .sum()
    }

    pub fn normalize(&mut self) {
        let norm_sq: f64 = self.amplitudes.iter().map(|c| c.norm_sqr()).sum();
        if norm_sq > 1e-12 {
            let norm = norm_sq.sqrt();
            self.amplitudes.mapv_inplace(|c| c / norm);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_initialization() {
        let state = StateVector::new(3);
        assert_eq!(state.dimension(), 8);
        assert_abs_diff_eq!(state.probability(0), 1.0);
        assert_abs_diff_eq!(state.probability(5), 0.0);
    }

    #[test]
    fn test_inner_product_of_ground_state() {
        let a = StateVector::new(2);
        let b = StateVector::new(2);
        let ip = a.inner_product(&b);
        assert_abs_diff_eq!(ip.re, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ip.im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_marginal_probability() {
        let mut state = StateVector::new(2);
        // manually place |10⟩ (wire 1 set)
        state.amplitudes[0] = Complex64::new(0.0, 0.0);
        state.amplitudes[2] = Complex64::new(1.0, 0.0);
        assert_abs_diff_eq!(state.marginal_probability(1), 1.0);
        assert_abs_diff_eq!(state.marginal_probability(0), 0.0);
    }
}
