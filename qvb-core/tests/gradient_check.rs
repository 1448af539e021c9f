//! Cross-checks of analytic gradients against finite differences on
//! full-size ansätze.

use approx::assert_abs_diff_eq;
use qvb_core::{gradient, Device, DiffMethod, Graph, Hamiltonian, Template};

fn check_methods_agree(template: &Template, hamiltonian: &Hamiltonian, params: &[f64]) {
    let device = Device::new("default.qubit", template.num_wires()).unwrap();
    let circuit = template.build().unwrap();

    let analytic = gradient(
        &device,
        &circuit,
        params,
        hamiltonian,
        DiffMethod::ParameterShift,
        None,
    )
    .unwrap();
    let numeric = gradient(
        &device,
        &circuit,
        params,
        hamiltonian,
        DiffMethod::FiniteDiff,
        None,
    )
    .unwrap();

    assert_eq!(analytic.len(), params.len());
    for (a, n) in analytic.iter().zip(numeric.iter()) {
        assert_abs_diff_eq!(a, n, epsilon = 1e-5);
    }
}

#[test]
fn entangler_gradient_agrees_with_finite_diff() {
    let template = Template::basic_entangler(3, 2);
    let h = Hamiltonian::ising(3);
    let params: Vec<f64> = (0..template.n_params()).map(|i| 0.1 * (i + 1) as f64).collect();
    check_methods_agree(&template, &h, &params);
}

#[test]
fn excitation_gradient_agrees_with_finite_diff() {
    let template = Template::excitation(2, 4);
    let h = qvb_core::hamiltonians::h2();
    check_methods_agree(&template, &h, &[0.2, -0.4, 0.35]);
}

#[test]
fn qaoa_gradient_agrees_with_finite_diff() {
    // shared γ/β parameters across every edge and wire
    let graph = Graph::cycle(4);
    let template = Template::qaoa(graph.clone(), 2);
    let h = qvb_core::qaoa::maxcut_hamiltonian(&graph);
    check_methods_agree(&template, &h, &[0.3, 0.5, 0.2, 0.7]);
}

#[test]
fn sparse_device_gradients_match_dense() {
    let template = Template::basic_entangler(3, 2);
    let circuit = template.build().unwrap();
    let h = Hamiltonian::all_z(3);
    let params: Vec<f64> = (0..6).map(|i| 0.2 * (i + 1) as f64).collect();

    let dense = Device::new("default.qubit", 3).unwrap();
    let sparse = Device::new("sparse.qubit", 3).unwrap();

    let a = gradient(&dense, &circuit, &params, &h, DiffMethod::Best, None).unwrap();
    let b = gradient(&sparse, &circuit, &params, &h, DiffMethod::Best, None).unwrap();

    for (x, y) in a.iter().zip(b.iter()) {
        assert_abs_diff_eq!(x, y, epsilon = 1e-9);
    }
}
