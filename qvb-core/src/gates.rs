//! Gate matrices
//!
//! Fixed and rotation gates as dense `Array2<Complex64>` matrices.
//! Two-qubit matrices are ordered |q1 q2⟩ = |00⟩, |01⟩, |10⟩, |11⟩ with the
//! first wire as the more significant bit of the pair.

use ndarray::Array2;
use num_complex::Complex64;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

fn mat2(elems: [Complex64; 4]) -> Array2<Complex64> {
    Array2::from_shape_vec((2, 2), elems.to_vec()).unwrap()
}

fn mat4(elems: [Complex64; 16]) -> Array2<Complex64> {
    Array2::from_shape_vec((4, 4), elems.to_vec()).unwrap()
}

pub fn hadamard() -> Array2<Complex64> {
    let h = Complex64::new(1.0 / 2.0_f64.sqrt(), 0.0);
    mat2([h, h, h, -h])
}

pub fn pauli_x() -> Array2<Complex64> {
    mat2([ZERO, ONE, ONE, ZERO])
}

pub fn pauli_y() -> Array2<Complex64> {
    let i = Complex64::new(0.0, 1.0);
    mat2([ZERO, -i, i, ZERO])
}

pub fn pauli_z() -> Array2<Complex64> {
    mat2([ONE, ZERO, ZERO, -ONE])
}

pub fn s_gate() -> Array2<Complex64> {
    mat2([ONE, ZERO, ZERO, Complex64::new(0.0, 1.0)])
}

pub fn s_dagger() -> Array2<Complex64> {
    mat2([ONE, ZERO, ZERO, Complex64::new(0.0, -1.0)])
}

pub fn t_gate() -> Array2<Complex64> {
    let phase = Complex64::from_polar(1.0, std::f64::consts::FRAC_PI_4);
    mat2([ONE, ZERO, ZERO, phase])
}

/// RX(θ) = exp(-iθX/2)
pub fn rx(theta: f64) -> Array2<Complex64> {
    let c = Complex64::new((theta / 2.0).cos(), 0.0);
    let s = Complex64::new(0.0, -(theta / 2.0).sin());
    mat2([c, s, s, c])
}

/// RY(θ) = exp(-iθY/2)
pub fn ry(theta: f64) -> Array2<Complex64> {
    let c = Complex64::new((theta / 2.0).cos(), 0.0);
    let s = Complex64::new((theta / 2.0).sin(), 0.0);
    mat2([c, -s, s, c])
}

/// RZ(θ) = exp(-iθZ/2)
pub fn rz(theta: f64) -> Array2<Complex64> {
    let e_neg = Complex64::from_polar(1.0, -theta / 2.0);
    let e_pos = Complex64::from_polar(1.0, theta / 2.0);
    mat2([e_neg, ZERO, ZERO, e_pos])
}

pub fn cnot() -> Array2<Complex64> {
    mat4([
        ONE, ZERO, ZERO, ZERO, //
        ZERO, ONE, ZERO, ZERO, //
        ZERO, ZERO, ZERO, ONE, //
        ZERO, ZERO, ONE, ZERO,
    ])
}

pub fn cz() -> Array2<Complex64> {
    mat4([
        ONE, ZERO, ZERO, ZERO, //
        ZERO, ONE, ZERO, ZERO, //
        ZERO, ZERO, ONE, ZERO, //
        ZERO, ZERO, ZERO, -ONE,
    ])
}

pub fn swap() -> Array2<Complex64> {
    mat4([
        ONE, ZERO, ZERO, ZERO, //
        ZERO, ZERO, ONE, ZERO, //
        ZERO, ONE, ZERO, ZERO, //
        ZERO, ZERO, ZERO, ONE,
    ])
}

/// Controlled rotation: identity on the |0⟩ control block, `rot` on |1⟩.
fn controlled(rot: Array2<Complex64>) -> Array2<Complex64> {
    let mut m = Array2::<Complex64>::eye(4);
    for r in 0..2 {
        for c in 0..2 {
            m[[2 + r, 2 + c]] = rot[[r, c]];
        }
    }
    m
}

pub fn crx(theta: f64) -> Array2<Complex64> {
    controlled(rx(theta))
}

pub fn cry(theta: f64) -> Array2<Complex64> {
    controlled(ry(theta))
}

pub fn crz(theta: f64) -> Array2<Complex64> {
    controlled(rz(theta))
}

/// Single-excitation (Givens) rotation on two wires:
/// |01⟩ → cos(θ/2)|01⟩ + sin(θ/2)|10⟩,
/// |10⟩ → cos(θ/2)|10⟩ − sin(θ/2)|01⟩.
pub fn single_excitation(theta: f64) -> Array2<Complex64> {
    let c = Complex64::new((theta / 2.0).cos(), 0.0);
    let s = Complex64::new((theta / 2.0).sin(), 0.0);
    mat4([
        ONE, ZERO, ZERO, ZERO, //
        ZERO, c, s, ZERO, //
        ZERO, -s, c, ZERO, //
        ZERO, ZERO, ZERO, ONE,
    ])
}
