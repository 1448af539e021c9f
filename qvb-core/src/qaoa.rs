//! QAOA cost Hamiltonians and layer builders
//!
//! Graph problems as diagonal cost Hamiltonians, plus the circuit-level
//! cost/mixer layers. One γ (β) parameter drives a whole cost (mixer)
//! layer; term coefficients are folded into the gate via the angle scale.

use crate::circuit::Circuit;
use crate::graph::Graph;
use crate::observable::{Hamiltonian, PauliString};

/// MaxCut cost Hamiltonian: C = Σ_e w/2 (Z_u Z_v − I). Minimizing ⟨C⟩
/// maximizes the cut.
pub fn maxcut_hamiltonian(graph: &Graph) -> Hamiltonian {
    let mut h = Hamiltonian::new();
    let mut offset = 0.0;
    for edge in graph.edges() {
        h.add_term(PauliString::zz(edge.u, edge.v).scaled(0.5 * edge.weight));
        offset -= 0.5 * edge.weight;
    }
    h.add_term(PauliString::identity(offset));
    h
}

/// Unconstrained minimum-vertex-cover cost and mixer Hamiltonians
/// (penalty 3):
///
///   C = 3/4 Σ_e (Z_u + Z_v + Z_u Z_v) − 1/2 Σ_v Z_v + const,
///   B = Σ_v X_v.
pub fn min_vertex_cover(graph: &Graph) -> (Hamiltonian, Hamiltonian) {
    let n = graph.n_vertices();
    let m = graph.n_edges();

    let mut cost = Hamiltonian::new();
    cost.add_term(PauliString::identity(n as f64 / 2.0 + 3.0 * m as f64 / 4.0));
    for edge in graph.edges() {
        cost.add_term(PauliString::z(edge.u).scaled(0.75));
        cost.add_term(PauliString::z(edge.v).scaled(0.75));
        cost.add_term(PauliString::zz(edge.u, edge.v).scaled(0.75));
    }
    for v in 0..n {
        cost.add_term(PauliString::z(v).scaled(-0.5));
    }

    let mixer = Hamiltonian::from_terms((0..n).map(PauliString::x).collect());
    (cost, mixer)
}

/// Apply e^{−iγC} for a diagonal (Z/ZZ) cost Hamiltonian, with all gates
/// reading the shared parameter `gamma`.
pub fn cost_layer(circuit: &mut Circuit, gamma: usize, cost: &Hamiltonian) {
    for term in cost.terms() {
        let factors = term.factors();
        match factors.len() {
            // identity contributes a global phase only
            0 => {}
            1 => circuit.rz_with(factors[0].0, gamma, 2.0 * term.coeff),
            2 => {
                let (u, v) = (factors[0].0, factors[1].0);
                circuit.cnot(u, v);
                circuit.rz_with(v, gamma, 2.0 * term.coeff);
                circuit.cnot(u, v);
            }
            n => unreachable!("diagonal cost terms have at most 2 factors, got {n}"),
        }
    }
}

/// Apply e^{−iβB} for the transverse-field mixer: RX(2β) on every wire.
pub fn mixer_layer(circuit: &mut Circuit, beta: usize, n_wires: usize) {
    for wire in 0..n_wires {
        circuit.rx_with(wire, beta, 2.0);
    }
}
