//! Sparse statevector backend
//!
//! Hash-map register for states with few non-zero amplitudes. Amplitudes
//! with |c|² below the pruning threshold are dropped after every gate.

use ndarray::Array2;
use num_complex::Complex64;
use rand::Rng;
use rustc_hash::FxHashMap;

use crate::ops::Register;
use crate::state::StateVector;

/// Probability below which an amplitude counts as numerical zero.
pub const DEFAULT_PRUNE_THRESHOLD: f64 = 1e-14;

#[derive(Debug, Clone)]
pub struct SparseStateVector {
    num_qubits: usize,
    amplitudes: FxHashMap<usize, Complex64>,
    threshold: f64,
}

impl SparseStateVector {
    /// Creates the register in |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        Self::with_threshold(num_qubits, DEFAULT_PRUNE_THRESHOLD)
    }

    pub fn with_threshold(num_qubits: usize, threshold: f64) -> Self {
        let mut amplitudes = FxHashMap::default();
        amplitudes.insert(0, Complex64::new(1.0, 0.0));
        SparseStateVector {
            num_qubits,
            amplitudes,
            threshold,
        }
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of stored (non-zero) amplitudes.
    pub fn nnz(&self) -> usize {
        self.amplitudes.len()
    }

    pub fn dimension(&self) -> usize {
        1 << self.num_qubits
    }

    pub fn amplitude(&self, index: usize) -> Complex64 {
        self.amplitudes
            .get(&index)
            .copied()
            .unwrap_or_else(|| Complex64::new(0.0, 0.0))
    }

    pub fn probability(&self, index: usize) -> f64 {
        self.amplitude(index).norm_sqr()
    }

    /// Iterator over stored (index, amplitude) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Complex64)> + '_ {
        self.amplitudes.iter().map(|(&i, &c)| (i, c))
    }

    /// ⟨self|other⟩
    pub fn inner_product(&self, other: &SparseStateVector) -> Complex64 {
        self.iter()
            .map(|(idx, a)| a.conj() * other.amplitude(idx))
            .sum()
    }

    fn rebuild(&mut self, next: FxHashMap<usize, Complex64>) {
        self.amplitudes = next;
        let threshold = self.threshold;
        self.amplitudes.retain(|_, c| c.norm_sqr() >= threshold);
    }

    /// Densify (for cross-checks and small registers).
    pub fn to_dense(&self) -> StateVector {
        let mut dense = StateVector::new(self.num_qubits);
        dense.amplitudes.fill(Complex64::new(0.0, 0.0));
        for (idx, amp) in self.iter() {
            dense.amplitudes[idx] = amp;
        }
        dense
    }

    pub fn apply_gate_1q(&mut self, qubit: usize, gate: &Array2<Complex64>) {
        let bit = 1 << qubit;
        let u00 = gate[[0, 0]];
        let u01 = gate[[0, 1]];
        let u10 = gate[[1, 0]];
        let u11 = gate[[1, 1]];

        let mut next: FxHashMap<usize, Complex64> =
            FxHashMap::with_capacity_and_hasher(self.amplitudes.len() * 2, Default::default());

        for (&idx, &amp) in &self.amplitudes {
            if idx & bit == 0 {
                *next.entry(idx).or_insert_with(zero) += u00 * amp;
                *next.entry(idx | bit).or_insert_with(zero) += u10 * amp;
            } else {
                *next.entry(idx ^ bit).or_insert_with(zero) += u01 * amp;
                *next.entry(idx).or_insert_with(zero) += u11 * amp;
            }
        }

        self.rebuild(next);
    }

    pub fn apply_gate_2q(&mut self, qubit1: usize, qubit2: usize, gate: &Array2<Complex64>) {
        let bit1 = 1 << qubit1;
        let bit2 = 1 << qubit2;

        let mut next: FxHashMap<usize, Complex64> =
            FxHashMap::with_capacity_and_hasher(self.amplitudes.len() * 4, Default::default());

        for (&idx, &amp) in &self.amplitudes {
            let col = (usize::from(idx & bit1 != 0) << 1) | usize::from(idx & bit2 != 0);
            let base = idx & !(bit1 | bit2);
            for row in 0..4 {
                let coeff = gate[[row, col]];
                if coeff.norm_sqr() == 0.0 {
                    continue;
                }
                let mut target = base;
                if row & 0b10 != 0 {
                    target |= bit1;
                }
                if row & 0b01 != 0 {
                    target |= bit2;
                }
                *next.entry(target).or_insert_with(zero) += coeff * amp;
            }
        }

        self.rebuild(next);
    }

    pub fn apply_double_excitation(&mut self, wires: &[usize; 4], theta: f64) {
        let occ = (1 << wires[0]) | (1 << wires[1]);
        let virt = (1 << wires[2]) | (1 << wires[3]);
        let mask = occ | virt;
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();

        let mut next = self.amplitudes.clone();
        let mut seen: Vec<usize> = Vec::new();
        for (&idx, _) in &self.amplitudes {
            let bits = idx & mask;
            if bits != occ && bits != virt {
                continue;
            }
            let base = idx & !mask;
            let occ_idx = base | occ;
            if seen.contains(&occ_idx) {
                continue;
            }
            seen.push(occ_idx);
            let virt_idx = base | virt;
            let a = self.amplitude(occ_idx);
            let b = self.amplitude(virt_idx);
            next.insert(occ_idx, c * a - s * b);
            next.insert(virt_idx, s * a + c * b);
        }

        self.rebuild(next);
    }

    /// Draw one computational-basis sample.
    pub fn measure<R: Rng>(&self, rng: &mut R) -> usize {
        let r: f64 = rng.gen();
        let mut cumulative = 0.0;
        let mut last = 0;
        for (idx, amp) in self.iter() {
            cumulative += amp.norm_sqr();
            last = idx;
            if r <= cumulative {
                return idx;
            }
        }
        last
    }

    pub fn sample<R: Rng>(&self, shots: usize, rng: &mut R) -> Vec<usize> {
        (0..shots).map(|_| self.measure(rng)).collect()
    }
}

fn zero() -> Complex64 {
    Complex64::new(0.0, 0.0)
}

impl Register for SparseStateVector {
    fn num_qubits(&self) -> usize {
        SparseStateVector::num_qubits(self)
    }

    fn apply_1q(&mut self, qubit: usize, gate: &Array2<Complex64>) {
        self.apply_gate_1q(qubit, gate);
    }

    fn apply_2q(&mut self, qubit1: usize, qubit2: usize, gate: &Array2<Complex64>) {
        self.apply_gate_2q(qubit1, qubit2, gate);
    }

    fn apply_double_excitation(&mut self, wires: &[usize; 4], theta: f64) {
        SparseStateVector::apply_double_excitation(self, wires, theta);
    }
}
