//! Parameterized circuits
//!
//! A `Circuit` is a sequence of fixed and parameterized operations over a
//! declared number of parameters. Several gates may read the same parameter
//! (QAOA layers share one γ across all cost edges); a gate's angle is
//! `scale * params[index]`, so cost layers can fold term coefficients into
//! the gate.

use ndarray::Array2;
use num_complex::Complex64;

use crate::error::{Error, Result};
use crate::gates;
use crate::ops::Register;
use crate::state::StateVector;

/// Parameterized gate kinds and their shift rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateKind {
    RX,
    RY,
    RZ,
    CRX,
    CRY,
    CRZ,
    SingleExcitation,
    DoubleExcitation,
}

/// Parameter-shift rule family for a gate kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftRule {
    /// Generator eigenvalues ±1/2: two evaluations per occurrence.
    TwoTerm,
    /// Generator eigenvalues {0, ±1/2} (controlled/Givens rotations):
    /// four evaluations per occurrence.
    FourTerm,
}

impl GateKind {
    pub fn shift_rule(self) -> ShiftRule {
        match self {
            GateKind::RX | GateKind::RY | GateKind::RZ => ShiftRule::TwoTerm,
            GateKind::CRX
            | GateKind::CRY
            | GateKind::CRZ
            | GateKind::SingleExcitation
            | GateKind::DoubleExcitation => ShiftRule::FourTerm,
        }
    }
}

/// A gate reading one circuit parameter.
#[derive(Debug, Clone)]
pub struct ParamGate {
    pub kind: GateKind,
    pub wires: Vec<usize>,
    pub param: usize,
    pub scale: f64,
}

impl ParamGate {
    /// Angle for the given parameter vector.
    fn angle(&self, params: &[f64]) -> f64 {
        self.scale * params[self.param]
    }
}

#[derive(Debug, Clone)]
enum Op {
    Param(ParamGate),
    Fixed1 {
        wire: usize,
        matrix: Array2<Complex64>,
    },
    Fixed2 {
        wires: (usize, usize),
        matrix: Array2<Complex64>,
    },
}

/// A variational circuit.
#[derive(Debug, Clone, Default)]
pub struct Circuit {
    num_wires: usize,
    ops: Vec<Op>,
    num_params: usize,
}

impl Circuit {
    pub fn new(num_wires: usize) -> Self {
        Circuit {
            num_wires,
            ops: Vec::new(),
            num_params: 0,
        }
    }

    pub fn num_wires(&self) -> usize {
        self.num_wires
    }

    pub fn num_params(&self) -> usize {
        self.num_params
    }

    /// Number of operations (fixed and parameterized).
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Declare `n` parameters up front; returns the index of the first.
    /// Used by templates whose parameter layout is fixed by convention.
    pub fn declare_params(&mut self, n: usize) -> usize {
        let first = self.num_params;
        self.num_params += n;
        first
    }

    fn alloc_param(&mut self) -> usize {
        let idx = self.num_params;
        self.num_params += 1;
        idx
    }

    // ---------------------------------------------------------------------
    // Fixed gates
    // ---------------------------------------------------------------------

    pub fn h(&mut self, wire: usize) {
        self.ops.push(Op::Fixed1 {
            wire,
            matrix: gates::hadamard(),
        });
    }

    pub fn x(&mut self, wire: usize) {
        self.ops.push(Op::Fixed1 {
            wire,
            matrix: gates::pauli_x(),
        });
    }

    pub fn cnot(&mut self, control: usize, target: usize) {
        self.ops.push(Op::Fixed2 {
            wires: (control, target),
            matrix: gates::cnot(),
        });
    }

    pub fn cz(&mut self, wire1: usize, wire2: usize) {
        self.ops.push(Op::Fixed2 {
            wires: (wire1, wire2),
            matrix: gates::cz(),
        });
    }

    // ---------------------------------------------------------------------
    // Parameterized gates
    // ---------------------------------------------------------------------

    pub fn rx(&mut self, wire: usize) -> usize {
        let param = self.alloc_param();
        self.rx_with(wire, param, 1.0);
        param
    }

    pub fn ry(&mut self, wire: usize) -> usize {
        let param = self.alloc_param();
        self.ry_with(wire, param, 1.0);
        param
    }

    pub fn rz(&mut self, wire: usize) -> usize {
        let param = self.alloc_param();
        self.rz_with(wire, param, 1.0);
        param
    }

    /// RX reading an existing parameter, angle = scale · θ.
    pub fn rx_with(&mut self, wire: usize, param: usize, scale: f64) {
        self.push_param(GateKind::RX, vec![wire], param, scale);
    }

    pub fn ry_with(&mut self, wire: usize, param: usize, scale: f64) {
        self.push_param(GateKind::RY, vec![wire], param, scale);
    }

    pub fn rz_with(&mut self, wire: usize, param: usize, scale: f64) {
        self.push_param(GateKind::RZ, vec![wire], param, scale);
    }

    pub fn crx(&mut self, control: usize, target: usize) -> usize {
        let param = self.alloc_param();
        self.push_param(GateKind::CRX, vec![control, target], param, 1.0);
        param
    }

    pub fn cry(&mut self, control: usize, target: usize) -> usize {
        let param = self.alloc_param();
        self.push_param(GateKind::CRY, vec![control, target], param, 1.0);
        param
    }

    pub fn crz(&mut self, control: usize, target: usize) -> usize {
        let param = self.alloc_param();
        self.push_param(GateKind::CRZ, vec![control, target], param, 1.0);
        param
    }

    pub fn single_excitation(&mut self, wire1: usize, wire2: usize) -> usize {
        let param = self.alloc_param();
        self.single_excitation_with(wire1, wire2, param);
        param
    }

    pub fn single_excitation_with(&mut self, wire1: usize, wire2: usize, param: usize) {
        self.push_param(GateKind::SingleExcitation, vec![wire1, wire2], param, 1.0);
    }

    pub fn double_excitation(&mut self, wires: [usize; 4]) -> usize {
        let param = self.alloc_param();
        self.double_excitation_with(wires, param);
        param
    }

    pub fn double_excitation_with(&mut self, wires: [usize; 4], param: usize) {
        self.push_param(GateKind::DoubleExcitation, wires.to_vec(), param, 1.0);
    }

    fn push_param(&mut self, kind: GateKind, wires: Vec<usize>, param: usize, scale: f64) {
        debug_assert!(param < self.num_params, "parameter declared before use");
        self.ops.push(Op::Param(ParamGate {
            kind,
            wires,
            param,
            scale,
        }));
    }

    /// Indices of parameterized ops reading parameter `param`.
    pub(crate) fn ops_using_param(&self, param: usize) -> Vec<usize> {
        self.ops
            .iter()
            .enumerate()
            .filter_map(|(i, op)| match op {
                Op::Param(g) if g.param == param => Some(i),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn param_gate(&self, op_index: usize) -> Option<&ParamGate> {
        match &self.ops[op_index] {
            Op::Param(g) => Some(g),
            _ => None,
        }
    }

    // ---------------------------------------------------------------------
    // Execution
    // ---------------------------------------------------------------------

    fn check_params(&self, params: &[f64]) -> Result<()> {
        if params.len() != self.num_params {
            return Err(Error::ParamCountMismatch {
                expected: self.num_params,
                got: params.len(),
            });
        }
        Ok(())
    }

    /// Run the circuit on any register backend.
    pub fn run_on<R: Register>(&self, register: &mut R, params: &[f64]) -> Result<()> {
        self.run_on_with_shift(register, params, None)
    }

    /// Run with the angle of op `shift.0` offset by `shift.1`. The shift
    /// applies to a single gate occurrence, which is what the shift rules
    /// need when several gates share one parameter.
    pub(crate) fn run_on_with_shift<R: Register>(
        &self,
        register: &mut R,
        params: &[f64],
        shift: Option<(usize, f64)>,
    ) -> Result<()> {
        self.check_params(params)?;

        for (i, op) in self.ops.iter().enumerate() {
            match op {
                Op::Fixed1 { wire, matrix } => register.apply_1q(*wire, matrix),
                Op::Fixed2 { wires, matrix } => register.apply_2q(wires.0, wires.1, matrix),
                Op::Param(gate) => {
                    let mut angle = gate.angle(params);
                    if let Some((op_index, delta)) = shift {
                        if op_index == i {
                            angle += delta;
                        }
                    }
                    apply_param_gate(register, gate, angle);
                }
            }
        }
        Ok(())
    }

    /// Execute on a fresh dense register.
    pub fn execute(&self, params: &[f64]) -> Result<StateVector> {
        let mut state = StateVector::new(self.num_wires);
        self.run_on(&mut state, params)?;
        Ok(state)
    }
}

fn apply_param_gate<R: Register>(register: &mut R, gate: &ParamGate, angle: f64) {
    match gate.kind {
        GateKind::RX => register.apply_1q(gate.wires[0], &gates::rx(angle)),
        GateKind::RY => register.apply_1q(gate.wires[0], &gates::ry(angle)),
        GateKind::RZ => register.apply_1q(gate.wires[0], &gates::rz(angle)),
        GateKind::CRX => register.apply_2q(gate.wires[0], gate.wires[1], &gates::crx(angle)),
        GateKind::CRY => register.apply_2q(gate.wires[0], gate.wires[1], &gates::cry(angle)),
        GateKind::CRZ => register.apply_2q(gate.wires[0], gate.wires[1], &gates::crz(angle)),
        GateKind::SingleExcitation => register.apply_2q(
            gate.wires[0],
            gate.wires[1],
            &gates::single_excitation(angle),
        ),
        GateKind::DoubleExcitation => {
            let wires = [gate.wires[0], gate.wires[1], gate.wires[2], gate.wires[3]];
            register.apply_double_excitation(&wires, angle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_param_allocation() {
        let mut circuit = Circuit::new(2);
        let a = circuit.rx(0);
        let b = circuit.ry(1);
        assert_eq!((a, b), (0, 1));
        assert_eq!(circuit.num_params(), 2);
    }

    #[test]
    fn test_param_count_checked() {
        let mut circuit = Circuit::new(1);
        circuit.rx(0);
        let err = circuit.execute(&[0.1, 0.2]).unwrap_err();
        assert!(matches!(
            err,
            Error::ParamCountMismatch {
                expected: 1,
                got: 2
            }
        ));
    }

    #[test]
    fn test_bell_circuit() {
        let mut circuit = Circuit::new(2);
        circuit.ry(0);
        circuit.cnot(0, 1);

        let state = circuit.execute(&[PI / 2.0]).unwrap();
        assert_abs_diff_eq!(state.probability(0), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(state.probability(3), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_shared_parameter_drives_both_gates() {
        let mut circuit = Circuit::new(2);
        let first = circuit.declare_params(1);
        circuit.rx_with(0, first, 1.0);
        circuit.rx_with(1, first, 1.0);

        let state = circuit.execute(&[PI]).unwrap();
        // RX(π) on both wires maps |00⟩ to |11⟩
        assert_abs_diff_eq!(state.probability(3), 1.0, epsilon = 1e-12);
        assert_eq!(circuit.ops_using_param(first).len(), 2);
    }

    #[test]
    fn test_scaled_parameter() {
        let mut circuit = Circuit::new(1);
        let p = circuit.declare_params(1);
        circuit.rx_with(0, p, 2.0);

        // scale 2 with θ=π/2 gives RX(π)
        let state = circuit.execute(&[PI / 2.0]).unwrap();
        assert_abs_diff_eq!(state.probability(1), 1.0, epsilon = 1e-12);
    }
}
