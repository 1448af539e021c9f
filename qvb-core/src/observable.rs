//! Pauli-string observables and Hamiltonians
//!
//! A Hamiltonian is a weighted sum of Pauli strings. Expectation values are
//! computed either term by term (apply the string to a copy of the state and
//! take the inner product) or group-wise: qubit-wise commuting terms share
//! one measurement basis, so a grouped evaluation performs one basis
//! rotation and one probability readout per group.

use ndarray::Array2;
use num_complex::Complex64;
use rayon::prelude::*;

use crate::gates;
use crate::sparse::SparseStateVector;
use crate::state::StateVector;

/// Term count above which term summation goes data-parallel.
const PARALLEL_TERMS: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pauli {
    X,
    Y,
    Z,
}

impl Pauli {
    fn matrix(self) -> Array2<Complex64> {
        match self {
            Pauli::X => gates::pauli_x(),
            Pauli::Y => gates::pauli_y(),
            Pauli::Z => gates::pauli_z(),
        }
    }
}

/// A weighted Pauli string, e.g. 0.5 · Z₀Z₂ or −0.04 · Y₀X₁X₂Y₃.
///
/// Identity factors are not stored; the empty string is the identity.
#[derive(Debug, Clone)]
pub struct PauliString {
    pub coeff: f64,
    factors: Vec<(usize, Pauli)>,
}

impl PauliString {
    /// Build a term from (wire, Pauli) factors. Factors are kept sorted by
    /// wire; duplicate wires are not allowed by construction here.
    pub fn term(coeff: f64, factors: &[(usize, Pauli)]) -> Self {
        let mut factors = factors.to_vec();
        factors.sort_by_key(|&(w, _)| w);
        PauliString { coeff, factors }
    }

    /// Identity with a coefficient (constant energy offset).
    pub fn identity(coeff: f64) -> Self {
        PauliString {
            coeff,
            factors: Vec::new(),
        }
    }

    pub fn z(wire: usize) -> Self {
        Self::term(1.0, &[(wire, Pauli::Z)])
    }

    pub fn x(wire: usize) -> Self {
        Self::term(1.0, &[(wire, Pauli::X)])
    }

    pub fn y(wire: usize) -> Self {
        Self::term(1.0, &[(wire, Pauli::Y)])
    }

    pub fn zz(wire1: usize, wire2: usize) -> Self {
        Self::term(1.0, &[(wire1, Pauli::Z), (wire2, Pauli::Z)])
    }

    pub fn scaled(mut self, factor: f64) -> Self {
        self.coeff *= factor;
        self
    }

    pub fn factors(&self) -> &[(usize, Pauli)] {
        &self.factors
    }

    pub fn is_identity(&self) -> bool {
        self.factors.is_empty()
    }

    /// Highest wire the string acts on.
    pub fn max_wire(&self) -> Option<usize> {
        self.factors.last().map(|&(w, _)| w)
    }

    /// Pauli acting on `wire`, if any.
    pub fn pauli_on(&self, wire: usize) -> Option<Pauli> {
        self.factors
            .iter()
            .find(|&&(w, _)| w == wire)
            .map(|&(_, p)| p)
    }

    /// Qubit-wise commutation: on every shared wire the Paulis agree.
    pub fn qubit_wise_commutes(&self, other: &PauliString) -> bool {
        for &(w, p) in &self.factors {
            if let Some(q) = other.pauli_on(w) {
                if p != q {
                    return false;
                }
            }
        }
        true
    }

    /// Diagonal eigenvalue of the string on basis state `index`, valid once
    /// the state has been rotated into the string's measurement basis.
    fn diagonal_sign(&self, index: usize) -> f64 {
        let mut sign = 1.0;
        for &(w, _) in &self.factors {
            if index & (1 << w) != 0 {
                sign = -sign;
            }
        }
        sign
    }

    /// ⟨ψ|c·P|ψ⟩ on the dense register.
    pub fn expectation_dense(&self, state: &StateVector) -> f64 {
        if self.is_identity() {
            return self.coeff;
        }
        let mut applied = state.clone();
        for &(w, p) in &self.factors {
            crate::ops::apply_gate_1q(&mut applied, w, &p.matrix());
        }
        self.coeff * state.inner_product(&applied).re
    }

    /// ⟨ψ|c·P|ψ⟩ on the sparse register.
    pub fn expectation_sparse(&self, state: &SparseStateVector) -> f64 {
        if self.is_identity() {
            return self.coeff;
        }
        let mut applied = state.clone();
        for &(w, p) in &self.factors {
            applied.apply_gate_1q(w, &p.matrix());
        }
        self.coeff * state.inner_product(&applied).re
    }
}

/// Sum of weighted Pauli strings.
#[derive(Debug, Clone, Default)]
pub struct Hamiltonian {
    terms: Vec<PauliString>,
}

impl Hamiltonian {
    pub fn new() -> Self {
        Hamiltonian { terms: Vec::new() }
    }

    pub fn from_terms(terms: Vec<PauliString>) -> Self {
        Hamiltonian { terms }
    }

    pub fn add_term(&mut self, term: PauliString) {
        self.terms.push(term);
    }

    pub fn terms(&self) -> &[PauliString] {
        &self.terms
    }

    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    /// Number of wires the Hamiltonian acts on (highest wire + 1).
    pub fn num_wires(&self) -> usize {
        self.terms
            .iter()
            .filter_map(PauliString::max_wire)
            .max()
            .map_or(0, |w| w + 1)
    }

    /// H = Σ Z_i
    pub fn all_z(num_qubits: usize) -> Self {
        Self::from_terms((0..num_qubits).map(PauliString::z).collect())
    }

    /// Nearest-neighbour Ising chain: H = Σ Z_i Z_{i+1}
    pub fn ising(num_qubits: usize) -> Self {
        Self::from_terms(
            (0..num_qubits.saturating_sub(1))
                .map(|q| PauliString::zz(q, q + 1))
                .collect(),
        )
    }

    /// Term-by-term expectation on the dense register.
    pub fn expectation_dense(&self, state: &StateVector) -> f64 {
        if self.terms.len() >= PARALLEL_TERMS {
            self.terms
                .par_iter()
                .map(|t| t.expectation_dense(state))
                .sum()
        } else {
            self.terms.iter().map(|t| t.expectation_dense(state)).sum()
        }
    }

    /// Term-by-term expectation on the sparse register.
    pub fn expectation_sparse(&self, state: &SparseStateVector) -> f64 {
        if self.terms.len() >= PARALLEL_TERMS {
            self.terms
                .par_iter()
                .map(|t| t.expectation_sparse(state))
                .sum()
        } else {
            self.terms.iter().map(|t| t.expectation_sparse(state)).sum()
        }
    }

    /// Greedy qubit-wise-commuting grouping. Returns term indices per group.
    pub fn qwc_groups(&self) -> Vec<Vec<usize>> {
        let mut groups: Vec<Vec<usize>> = Vec::new();
        for (i, term) in self.terms.iter().enumerate() {
            let slot = groups.iter_mut().find(|group| {
                group
                    .iter()
                    .all(|&j| term.qubit_wise_commutes(&self.terms[j]))
            });
            match slot {
                Some(group) => group.push(i),
                None => groups.push(vec![i]),
            }
        }
        groups
    }

    /// Measurement basis of a group: the non-Z Pauli per wire, if any.
    fn group_basis(&self, group: &[usize]) -> Vec<(usize, Pauli)> {
        let mut basis: Vec<(usize, Pauli)> = Vec::new();
        for &i in group {
            for &(w, p) in self.terms[i].factors() {
                if p != Pauli::Z && !basis.iter().any(|&(bw, _)| bw == w) {
                    basis.push((w, p));
                }
            }
        }
        basis
    }

    /// Grouped expectation: one basis rotation + probability readout per
    /// QWC group.
    pub fn grouped_expectation_dense(&self, state: &StateVector, groups: &[Vec<usize>]) -> f64 {
        let mut total = 0.0;
        for group in groups {
            let basis = self.group_basis(group);
            let probs = if basis.is_empty() {
                state.probabilities()
            } else {
                let mut rotated = state.clone();
                rotate_dense(&mut rotated, &basis);
                rotated.probabilities()
            };
            for &i in group {
                let term = &self.terms[i];
                if term.is_identity() {
                    total += term.coeff;
                    continue;
                }
                let value: f64 = probs
                    .iter()
                    .enumerate()
                    .map(|(idx, &p)| p * term.diagonal_sign(idx))
                    .sum();
                total += term.coeff * value;
            }
        }
        total
    }

    /// Grouped expectation on the sparse register.
    pub fn grouped_expectation_sparse(
        &self,
        state: &SparseStateVector,
        groups: &[Vec<usize>],
    ) -> f64 {
        let mut total = 0.0;
        for group in groups {
            let basis = self.group_basis(group);
            let mut rotated = state.clone();
            rotate_sparse(&mut rotated, &basis);
            for &i in group {
                let term = &self.terms[i];
                if term.is_identity() {
                    total += term.coeff;
                    continue;
                }
                let value: f64 = rotated
                    .iter()
                    .map(|(idx, amp)| amp.norm_sqr() * term.diagonal_sign(idx))
                    .sum();
                total += term.coeff * value;
            }
        }
        total
    }
}

/// Rotate a wire into the Z basis: X via H, Y via H·S†.
fn rotate_dense(state: &mut StateVector, basis: &[(usize, Pauli)]) {
    for &(w, p) in basis {
        match p {
            Pauli::X => crate::ops::apply_gate_1q(state, w, &gates::hadamard()),
            Pauli::Y => {
                crate::ops::apply_gate_1q(state, w, &gates::s_dagger());
                crate::ops::apply_gate_1q(state, w, &gates::hadamard());
            }
            Pauli::Z => {}
        }
    }
}

fn rotate_sparse(state: &mut SparseStateVector, basis: &[(usize, Pauli)]) {
    for &(w, p) in basis {
        match p {
            Pauli::X => state.apply_gate_1q(w, &gates::hadamard()),
            Pauli::Y => {
                state.apply_gate_1q(w, &gates::s_dagger());
                state.apply_gate_1q(w, &gates::hadamard());
            }
            Pauli::Z => {}
        }
    }
}
