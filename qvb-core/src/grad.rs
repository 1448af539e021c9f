//! Gradient computation
//!
//! Parameter-shift rules for expectation values of parameterized circuits,
//! plus a central-finite-difference fallback. A parameter shared by several
//! gate occurrences accumulates one shift-rule contribution per occurrence;
//! shifts are applied to the gate angle, so scaled parameters pick up the
//! chain-rule factor.

use std::f64::consts::{FRAC_PI_2, SQRT_2};

use crate::circuit::{Circuit, ShiftRule};
use crate::device::Device;
use crate::error::{Error, Result};
use crate::observable::Hamiltonian;

/// Two-term shift distance (π/2).
pub const PARAMETER_SHIFT: f64 = FRAC_PI_2;

/// Step used by the finite-difference method.
pub const FINITE_DIFF_EPSILON: f64 = 1e-7;

/// Differentiation method, by the names the hyperparameter layer accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffMethod {
    /// Cheapest exact method per gate. Every gate kind here carries a shift
    /// rule, so this resolves to `ParameterShift`.
    Best,
    ParameterShift,
    FiniteDiff,
}

impl DiffMethod {
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "best" => Ok(DiffMethod::Best),
            "parameter-shift" => Ok(DiffMethod::ParameterShift),
            "finite-diff" => Ok(DiffMethod::FiniteDiff),
            other => Err(Error::UnknownDiffMethod(other.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DiffMethod::Best => "best",
            DiffMethod::ParameterShift => "parameter-shift",
            DiffMethod::FiniteDiff => "finite-diff",
        }
    }
}

/// ∂⟨H⟩/∂θ for every circuit parameter.
///
/// `groups` selects grouped Hamiltonian evaluation (see
/// [`Hamiltonian::qwc_groups`]); it affects cost, not the result.
pub fn gradient(
    device: &Device,
    circuit: &Circuit,
    params: &[f64],
    hamiltonian: &Hamiltonian,
    method: DiffMethod,
    groups: Option<&[Vec<usize>]>,
) -> Result<Vec<f64>> {
    match method {
        DiffMethod::Best | DiffMethod::ParameterShift => {
            shift_gradient(device, circuit, params, hamiltonian, groups)
        }
        DiffMethod::FiniteDiff => {
            finite_diff_gradient(device, circuit, params, hamiltonian, groups)
        }
    }
}

fn shift_gradient(
    device: &Device,
    circuit: &Circuit,
    params: &[f64],
    hamiltonian: &Hamiltonian,
    groups: Option<&[Vec<usize>]>,
) -> Result<Vec<f64>> {
    let mut grads = vec![0.0; circuit.num_params()];

    for (param, grad) in grads.iter_mut().enumerate() {
        for op_index in circuit.ops_using_param(param) {
            let gate = circuit
                .param_gate(op_index)
                .expect("indexed op is parameterized");
            let eval = |delta: f64| {
                device.expval_with_shift(
                    circuit,
                    params,
                    hamiltonian,
                    groups,
                    Some((op_index, delta)),
                )
            };

            let occurrence = match gate.kind.shift_rule() {
                ShiftRule::TwoTerm => {
                    (eval(PARAMETER_SHIFT)? - eval(-PARAMETER_SHIFT)?) / 2.0
                }
                ShiftRule::FourTerm => {
                    let c1 = (SQRT_2 + 1.0) / (4.0 * SQRT_2);
                    let c2 = (SQRT_2 - 1.0) / (4.0 * SQRT_2);
                    c1 * (eval(PARAMETER_SHIFT)? - eval(-PARAMETER_SHIFT)?)
                        - c2 * (eval(3.0 * PARAMETER_SHIFT)? - eval(-3.0 * PARAMETER_SHIFT)?)
                }
            };

            *grad += gate.scale * occurrence;
        }
    }

    Ok(grads)
}

fn finite_diff_gradient(
    device: &Device,
    circuit: &Circuit,
    params: &[f64],
    hamiltonian: &Hamiltonian,
    groups: Option<&[Vec<usize>]>,
) -> Result<Vec<f64>> {
    let mut grads = vec![0.0; circuit.num_params()];
    let mut shifted = params.to_vec();

    for (i, grad) in grads.iter_mut().enumerate() {
        shifted[i] = params[i] + FINITE_DIFF_EPSILON;
        let plus = device.expval(circuit, &shifted, hamiltonian, groups)?;
        shifted[i] = params[i] - FINITE_DIFF_EPSILON;
        let minus = device.expval(circuit, &shifted, hamiltonian, groups)?;
        shifted[i] = params[i];
        *grad = (plus - minus) / (2.0 * FINITE_DIFF_EPSILON);
    }

    Ok(grads)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn dev(wires: usize) -> Device {
        Device::new("default.qubit", wires).unwrap()
    }

    #[test]
    fn test_diff_method_names() {
        assert_eq!(DiffMethod::parse("best").unwrap(), DiffMethod::Best);
        assert_eq!(
            DiffMethod::parse("parameter-shift").unwrap(),
            DiffMethod::ParameterShift
        );
        assert!(DiffMethod::parse("adjoint").is_err());
    }

    #[test]
    fn test_rx_gradient_is_minus_sine() {
        // ⟨Z⟩ of RX(θ)|0⟩ is cos θ
        let mut circuit = Circuit::new(1);
        circuit.rx(0);
        let h = Hamiltonian::all_z(1);
        let device = dev(1);

        for theta in [0.0, PI / 4.0, PI / 2.0, PI] {
            let g = gradient(
                &device,
                &circuit,
                &[theta],
                &h,
                DiffMethod::ParameterShift,
                None,
            )
            .unwrap();
            assert_abs_diff_eq!(g[0], -theta.sin(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_shift_rule_matches_finite_diff() {
        let mut circuit = Circuit::new(2);
        circuit.ry(0);
        circuit.ry(1);
        circuit.cnot(0, 1);
        circuit.crx(0, 1);

        let h = Hamiltonian::ising(2);
        let device = dev(2);
        let params = [0.3, 0.7, 1.1];

        let analytic = gradient(
            &device,
            &circuit,
            &params,
            &h,
            DiffMethod::ParameterShift,
            None,
        )
        .unwrap();
        let numeric = gradient(&device, &circuit, &params, &h, DiffMethod::FiniteDiff, None)
            .unwrap();

        for (a, n) in analytic.iter().zip(numeric.iter()) {
            assert_abs_diff_eq!(a, n, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_shared_parameter_accumulates_occurrences() {
        // RX(θ) on both wires of Σ Z_i: d/dθ (2 cos θ) = -2 sin θ
        let mut circuit = Circuit::new(2);
        let p = circuit.declare_params(1);
        circuit.rx_with(0, p, 1.0);
        circuit.rx_with(1, p, 1.0);

        let h = Hamiltonian::all_z(2);
        let device = dev(2);
        let theta = 0.6;

        let g = gradient(
            &device,
            &circuit,
            &[theta],
            &h,
            DiffMethod::ParameterShift,
            None,
        )
        .unwrap();
        assert_abs_diff_eq!(g[0], -2.0 * theta.sin(), epsilon = 1e-9);
    }

    #[test]
    fn test_scaled_parameter_chain_rule() {
        // RX(2θ): d⟨Z⟩/dθ = -2 sin 2θ
        let mut circuit = Circuit::new(1);
        let p = circuit.declare_params(1);
        circuit.rx_with(0, p, 2.0);

        let h = Hamiltonian::all_z(1);
        let device = dev(1);
        let theta = 0.4;

        let g = gradient(
            &device,
            &circuit,
            &[theta],
            &h,
            DiffMethod::ParameterShift,
            None,
        )
        .unwrap();
        assert_abs_diff_eq!(g[0], -2.0 * (2.0 * theta).sin(), epsilon = 1e-9);
    }

    #[test]
    fn test_excitation_gradient_matches_finite_diff() {
        let mut circuit = Circuit::new(4);
        circuit.x(0);
        circuit.x(1);
        circuit.double_excitation([0, 1, 2, 3]);
        circuit.single_excitation(0, 2);

        let h = Hamiltonian::all_z(4);
        let device = dev(4);
        let params = [0.5, -0.3];

        let analytic = gradient(
            &device,
            &circuit,
            &params,
            &h,
            DiffMethod::ParameterShift,
            None,
        )
        .unwrap();
        let numeric = gradient(&device, &circuit, &params, &h, DiffMethod::FiniteDiff, None)
            .unwrap();

        for (a, n) in analytic.iter().zip(numeric.iter()) {
            assert_abs_diff_eq!(a, n, epsilon = 1e-5);
        }
    }
}
