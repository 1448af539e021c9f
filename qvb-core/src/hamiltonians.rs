//! Molecular Hamiltonians for the VQE benchmarks
//!
//! Qubit Hamiltonians in the Jordan-Wigner encoding with precomputed
//! STO-3G coefficients: H₂ on 4 wires (15 terms) and LiH on 8 wires
//! (105 terms).

use crate::observable::Pauli::{X, Y, Z};
use crate::observable::{Hamiltonian, Pauli, PauliString};

fn t(coeff: f64, factors: &[(usize, Pauli)]) -> PauliString {
    PauliString::term(coeff, factors)
}

/// H₂ at equilibrium bond length, 4 spin-orbitals.
pub fn h2() -> Hamiltonian {
    Hamiltonian::from_terms(vec![
        PauliString::identity(-0.05963862),
        t(0.17575739, &[(0, Z)]),
        t(0.17575739, &[(1, Z)]),
        t(-0.23666489, &[(2, Z)]),
        t(-0.23666489, &[(3, Z)]),
        t(0.17001485, &[(0, Z), (1, Z)]),
        t(0.04491735, &[(0, Y), (1, X), (2, X), (3, Y)]),
        t(-0.04491735, &[(0, Y), (1, Y), (2, X), (3, X)]),
        t(-0.04491735, &[(0, X), (1, X), (2, Y), (3, Y)]),
        t(0.04491735, &[(0, X), (1, Y), (2, Y), (3, X)]),
        t(0.12222641, &[(0, Z), (2, Z)]),
        t(0.16714376, &[(0, Z), (3, Z)]),
        t(0.16714376, &[(1, Z), (2, Z)]),
        t(0.12222641, &[(1, Z), (3, Z)]),
        t(0.17570278, &[(2, Z), (3, Z)]),
    ])
}

/// LiH in the minimal basis, 8 spin-orbitals.
pub fn lih() -> Hamiltonian {
    Hamiltonian::from_terms(vec![
        PauliString::identity(-6.74845266e0),
        t(-1.02553930e-1, &[(0, Z)]),
        t(1.00530907e-2, &[(0, Y), (1, Z), (2, Y)]),
        t(1.00530907e-2, &[(0, X), (1, Z), (2, X)]),
        t(-1.02553930e-1, &[(1, Z)]),
        t(1.00530907e-2, &[(1, Y), (2, Z), (3, Y)]),
        t(1.00530907e-2, &[(1, X), (2, Z), (3, X)]),
        t(-2.76355319e-1, &[(2, Z)]),
        t(-2.76355319e-1, &[(3, Z)]),
        t(-2.96925596e-1, &[(4, Z)]),
        t(-2.96925596e-1, &[(5, Z)]),
        t(-2.96925596e-1, &[(6, Z)]),
        t(-2.96925596e-1, &[(7, Z)]),
        t(1.21916192e-1, &[(0, Z), (1, Z)]),
        t(1.21233148e-2, &[(0, Y), (2, Y)]),
        t(1.21233148e-2, &[(0, X), (2, X)]),
        t(1.21233148e-2, &[(0, Z), (1, Y), (2, Z), (3, Y)]),
        t(1.21233148e-2, &[(0, Z), (1, X), (2, Z), (3, X)]),
        t(3.25324294e-3, &[(0, Y), (1, X), (2, X), (3, Y)]),
        t(-3.25324294e-3, &[(0, Y), (1, Y), (2, X), (3, X)]),
        t(-3.25324294e-3, &[(0, X), (1, X), (2, Y), (3, Y)]),
        t(3.25324294e-3, &[(0, X), (1, Y), (2, Y), (3, X)]),
        t(5.86266678e-3, &[(0, Y), (1, X), (4, X), (5, Y)]),
        t(-5.86266678e-3, &[(0, Y), (1, Y), (4, X), (5, X)]),
        t(-5.86266678e-3, &[(0, X), (1, X), (4, Y), (5, Y)]),
        t(5.86266678e-3, &[(0, X), (1, Y), (4, Y), (5, X)]),
        t(5.86266678e-3, &[(0, Y), (1, X), (6, X), (7, Y)]),
        t(-5.86266678e-3, &[(0, Y), (1, Y), (6, X), (7, X)]),
        t(-5.86266678e-3, &[(0, X), (1, X), (6, Y), (7, Y)]),
        t(5.86266678e-3, &[(0, X), (1, Y), (6, Y), (7, X)]),
        t(5.26857432e-2, &[(0, Z), (2, Z)]),
        t(5.59389862e-2, &[(0, Z), (3, Z)]),
        t(-1.85422006e-3, &[(0, Y), (1, Z), (2, Y), (3, Z)]),
        t(-1.85422006e-3, &[(0, X), (1, Z), (2, X), (3, Z)]),
        t(4.81813200e-3, &[(0, Y), (1, Z), (2, Z), (3, X), (4, X), (5, Y)]),
        t(-4.81813200e-3, &[(0, Y), (1, Z), (2, Z), (3, Y), (4, X), (5, X)]),
        t(-4.81813200e-3, &[(0, X), (1, Z), (2, Z), (3, X), (4, Y), (5, Y)]),
        t(4.81813200e-3, &[(0, X), (1, Z), (2, Z), (3, Y), (4, Y), (5, X)]),
        t(4.81813200e-3, &[(0, Y), (1, Z), (2, Z), (3, X), (6, X), (7, Y)]),
        t(-4.81813200e-3, &[(0, Y), (1, Z), (2, Z), (3, Y), (6, X), (7, X)]),
        t(-4.81813200e-3, &[(0, X), (1, Z), (2, Z), (3, X), (6, Y), (7, Y)]),
        t(4.81813200e-3, &[(0, X), (1, Z), (2, Z), (3, Y), (6, Y), (7, X)]),
        t(6.17431075e-2, &[(0, Z), (4, Z)]),
        t(3.39017831e-3, &[(0, Y), (1, Z), (2, Y), (4, Z)]),
        t(3.39017831e-3, &[(0, X), (1, Z), (2, X), (4, Z)]),
        t(6.76057742e-2, &[(0, Z), (5, Z)]),
        t(-1.42795369e-3, &[(0, Y), (1, Z), (2, Y), (5, Z)]),
        t(-1.42795369e-3, &[(0, X), (1, Z), (2, X), (5, Z)]),
        t(6.17431075e-2, &[(0, Z), (6, Z)]),
        t(3.39017831e-3, &[(0, Y), (1, Z), (2, Y), (6, Z)]),
        t(3.39017831e-3, &[(0, X), (1, Z), (2, X), (6, Z)]),
        t(6.76057742e-2, &[(0, Z), (7, Z)]),
        t(-1.42795369e-3, &[(0, Y), (1, Z), (2, Y), (7, Z)]),
        t(-1.42795369e-3, &[(0, X), (1, Z), (2, X), (7, Z)]),
        t(5.59389862e-2, &[(1, Z), (2, Z)]),
        t(-1.85422006e-3, &[(1, Y), (3, Y)]),
        t(-1.85422006e-3, &[(1, X), (3, X)]),
        t(-4.81813200e-3, &[(1, Y), (2, X), (4, X), (5, Y)]),
        t(-4.81813200e-3, &[(1, Y), (2, Y), (4, Y), (5, Y)]),
        t(-4.81813200e-3, &[(1, X), (2, X), (4, X), (5, X)]),
        t(-4.81813200e-3, &[(1, X), (2, Y), (4, Y), (5, X)]),
        t(-4.81813200e-3, &[(1, Y), (2, X), (6, X), (7, Y)]),
        t(-4.81813200e-3, &[(1, Y), (2, Y), (6, Y), (7, Y)]),
        t(-4.81813200e-3, &[(1, X), (2, X), (6, X), (7, X)]),
        t(-4.81813200e-3, &[(1, X), (2, Y), (6, Y), (7, X)]),
        t(5.26857432e-2, &[(1, Z), (3, Z)]),
        t(6.76057742e-2, &[(1, Z), (4, Z)]),
        t(-1.42795369e-3, &[(1, Y), (2, Z), (3, Y), (4, Z)]),
        t(-1.42795369e-3, &[(1, X), (2, Z), (3, X), (4, Z)]),
        t(6.17431075e-2, &[(1, Z), (5, Z)]),
        t(3.39017831e-3, &[(1, Y), (2, Z), (3, Y), (5, Z)]),
        t(3.39017831e-3, &[(1, X), (2, Z), (3, X), (5, Z)]),
        t(6.76057742e-2, &[(1, Z), (6, Z)]),
        t(-1.42795369e-3, &[(1, Y), (2, Z), (3, Y), (6, Z)]),
        t(-1.42795369e-3, &[(1, X), (2, Z), (3, X), (6, Z)]),
        t(6.17431075e-2, &[(1, Z), (7, Z)]),
        t(3.39017831e-3, &[(1, Y), (2, Z), (3, Y), (7, Z)]),
        t(3.39017831e-3, &[(1, X), (2, Z), (3, X), (7, Z)]),
        t(8.44840116e-2, &[(2, Z), (3, Z)]),
        t(1.03194543e-2, &[(2, Y), (3, X), (4, X), (5, Y)]),
        t(-1.03194543e-2, &[(2, Y), (3, Y), (4, X), (5, X)]),
        t(-1.03194543e-2, &[(2, X), (3, X), (4, Y), (5, Y)]),
        t(1.03194543e-2, &[(2, X), (3, Y), (4, Y), (5, X)]),
        t(1.03194543e-2, &[(2, Y), (3, X), (6, X), (7, Y)]),
        t(-1.03194543e-2, &[(2, Y), (3, Y), (6, X), (7, X)]),
        t(-1.03194543e-2, &[(2, X), (3, X), (6, Y), (7, Y)]),
        t(1.03194543e-2, &[(2, X), (3, Y), (6, Y), (7, X)]),
        t(6.01815510e-2, &[(2, Z), (4, Z)]),
        t(7.05010052e-2, &[(2, Z), (5, Z)]),
        t(6.01815510e-2, &[(2, Z), (6, Z)]),
        t(7.05010052e-2, &[(2, Z), (7, Z)]),
        t(7.05010052e-2, &[(3, Z), (4, Z)]),
        t(6.01815510e-2, &[(3, Z), (5, Z)]),
        t(7.05010052e-2, &[(3, Z), (6, Z)]),
        t(6.01815510e-2, &[(3, Z), (7, Z)]),
        t(7.82363778e-2, &[(4, Z), (5, Z)]),
        t(4.21728488e-3, &[(4, Y), (5, X), (6, X), (7, Y)]),
        t(-4.21728488e-3, &[(4, Y), (5, Y), (6, X), (7, X)]),
        t(-4.21728488e-3, &[(4, X), (5, X), (6, Y), (7, Y)]),
        t(4.21728488e-3, &[(4, X), (5, Y), (6, Y), (7, X)]),
        t(6.55845232e-2, &[(4, Z), (6, Z)]),
        t(6.98018080e-2, &[(4, Z), (7, Z)]),
        t(6.98018080e-2, &[(5, Z), (6, Z)]),
        t(6.55845232e-2, &[(5, Z), (7, Z)]),
        t(7.82363778e-2, &[(6, Z), (7, Z)]),
    ])
}
