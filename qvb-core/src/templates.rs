//! Circuit templates
//!
//! The parameterized ansätze the benchmarks sweep: entangler layers for
//! generic circuit/gradient workloads, the excitation ansatz for molecular
//! ground states, and the QAOA layer structure for graph problems.

use crate::circuit::Circuit;
use crate::error::{Error, Result};
use crate::graph::Graph;

/// A parametrized circuit recipe. `build` produces the circuit; parameters
/// are laid out in the order documented per variant.
#[derive(Debug, Clone)]
pub enum Template {
    /// Per layer: one RX per wire, then a CNOT ring. Parameters are
    /// layer-major: (n_layers, n_wires) flattened row by row.
    BasicEntangler { n_wires: usize, n_layers: usize },
    /// Hartree-Fock preparation followed by all spin-conserving single and
    /// double excitations. Parameters: singles first, then doubles.
    Excitation { electrons: usize, orbitals: usize },
    /// Hadamard wall, then `n_layers` of cost layer (RZZ per edge, shared γ)
    /// and mixer layer (RX(2β) per wire). Parameters: [γ₁..γ_p, β₁..β_p].
    Qaoa { graph: Graph, n_layers: usize },
    /// A user-supplied circuit used as-is.
    Custom(Circuit),
}

impl Template {
    pub fn basic_entangler(n_wires: usize, n_layers: usize) -> Self {
        Template::BasicEntangler { n_wires, n_layers }
    }

    pub fn excitation(electrons: usize, orbitals: usize) -> Self {
        Template::Excitation {
            electrons,
            orbitals,
        }
    }

    pub fn qaoa(graph: Graph, n_layers: usize) -> Self {
        Template::Qaoa { graph, n_layers }
    }

    pub fn num_wires(&self) -> usize {
        match self {
            Template::BasicEntangler { n_wires, .. } => *n_wires,
            Template::Excitation { orbitals, .. } => *orbitals,
            Template::Qaoa { graph, .. } => graph.n_vertices(),
            Template::Custom(circuit) => circuit.num_wires(),
        }
    }

    pub fn n_params(&self) -> usize {
        match self {
            Template::BasicEntangler { n_wires, n_layers } => n_wires * n_layers,
            Template::Excitation {
                electrons,
                orbitals,
            } => {
                let (singles, doubles) = excitations(*electrons, *orbitals);
                singles.len() + doubles.len()
            }
            Template::Qaoa { n_layers, .. } => 2 * n_layers,
            Template::Custom(circuit) => circuit.num_params(),
        }
    }

    pub fn build(&self) -> Result<Circuit> {
        match self {
            Template::BasicEntangler { n_wires, n_layers } => {
                build_basic_entangler(*n_wires, *n_layers)
            }
            Template::Excitation {
                electrons,
                orbitals,
            } => build_excitation(*electrons, *orbitals),
            Template::Qaoa { graph, n_layers } => Ok(build_qaoa(graph, *n_layers)),
            Template::Custom(circuit) => Ok(circuit.clone()),
        }
    }
}

fn build_basic_entangler(n_wires: usize, n_layers: usize) -> Result<Circuit> {
    if n_wires == 0 {
        return Err(Error::InvalidTemplate("entangler needs at least one wire".into()));
    }
    let mut circuit = Circuit::new(n_wires);
    let first = circuit.declare_params(n_wires * n_layers);

    for layer in 0..n_layers {
        for wire in 0..n_wires {
            circuit.rx_with(wire, first + layer * n_wires + wire, 1.0);
        }
        // ring of CNOTs; a 2-wire ring would apply the same pair twice
        match n_wires {
            1 => {}
            2 => circuit.cnot(0, 1),
            _ => {
                for wire in 0..n_wires {
                    circuit.cnot(wire, (wire + 1) % n_wires);
                }
            }
        }
    }
    Ok(circuit)
}

fn build_excitation(electrons: usize, orbitals: usize) -> Result<Circuit> {
    if electrons == 0 || electrons >= orbitals {
        return Err(Error::InvalidTemplate(format!(
            "{electrons} electrons in {orbitals} spin-orbitals"
        )));
    }

    let (singles, doubles) = excitations(electrons, orbitals);
    let mut circuit = Circuit::new(orbitals);
    circuit.declare_params(singles.len() + doubles.len());

    // Hartree-Fock reference: lowest `electrons` spin-orbitals occupied
    for wire in 0..electrons {
        circuit.x(wire);
    }

    let mut param = 0;
    for [r, p] in &singles {
        circuit.single_excitation_with(*r, *p, param);
        param += 1;
    }
    for wires in &doubles {
        circuit.double_excitation_with(*wires, param);
        param += 1;
    }

    Ok(circuit)
}

fn build_qaoa(graph: &Graph, n_layers: usize) -> Circuit {
    let n_wires = graph.n_vertices();
    let mut circuit = Circuit::new(n_wires);
    let first = circuit.declare_params(2 * n_layers);
    let gammas = first;
    let betas = first + n_layers;

    for wire in 0..n_wires {
        circuit.h(wire);
    }

    for layer in 0..n_layers {
        for edge in graph.edges() {
            circuit.cnot(edge.u, edge.v);
            circuit.rz_with(edge.v, gammas + layer, 1.0);
            circuit.cnot(edge.u, edge.v);
        }
        for wire in 0..n_wires {
            circuit.rx_with(wire, betas + layer, 2.0);
        }
    }

    circuit
}

/// Spin-conserving single and double excitations of `electrons` electrons in
/// `orbitals` spin-orbitals (even wires are spin-up, odd wires spin-down).
pub fn excitations(electrons: usize, orbitals: usize) -> (Vec<[usize; 2]>, Vec<[usize; 4]>) {
    let spin = |orbital: usize| -> i32 {
        if orbital % 2 == 0 {
            1
        } else {
            -1
        }
    };

    let mut singles = Vec::new();
    for r in 0..electrons {
        for p in electrons..orbitals {
            if spin(r) == spin(p) {
                singles.push([r, p]);
            }
        }
    }

    let mut doubles = Vec::new();
    for s in 0..electrons {
        for r in (s + 1)..electrons {
            for p in electrons..orbitals {
                for q in (p + 1)..orbitals {
                    if spin(s) + spin(r) == spin(p) + spin(q) {
                        doubles.push([s, r, p, q]);
                    }
                }
            }
        }
    }

    (singles, doubles)
}
