//! Per-family hyperparameter resolution
//!
//! One resolver per benchmark family. Each reads its recognized keys out of
//! the mapping (consuming them), substitutes the family's fixed defaults
//! for missing keys, and lazily instantiates a device when it was given by
//! name. Unrecognized keys stay in the mapping untouched.

use ndarray::Array2;
use rand::distributions::Uniform;
use rand::prelude::*;
use rand_distr::Normal;

use qvb_core::{Device, DiffMethod, Graph, Hamiltonian, Measurement, Template};

use crate::hyperparams::HyperParams;
use crate::{BenchError, Result};

/// Which training driver runs the loop: direct gradient calls or the
/// record-and-backward tape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interface {
    Autograd,
    Tape,
}

impl Interface {
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "autograd" => Ok(Interface::Autograd),
            "tape" => Ok(Interface::Tape),
            other => Err(BenchError::UnknownInterface(other.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Interface::Autograd => "autograd",
            Interface::Tape => "tape",
        }
    }
}

/// Resolved configuration of the core benchmark family (circuit evaluation,
/// gradient, optimization, hybrid training).
#[derive(Debug, Clone)]
pub struct CoreSettings {
    pub device: Device,
    pub diff_method: DiffMethod,
    pub interface: Interface,
    pub params: Array2<f64>,
    pub template: Template,
    pub measurement: Measurement,
}

/// Defaults: 4 wires, 6 entangler layers, uniform random parameters,
/// ⟨Z₀⟩ measurement, parameter-shift differentiation on `default.qubit`.
pub fn core_defaults(hyperparams: &mut HyperParams) -> Result<CoreSettings> {
    let n_wires = hyperparams.pop_usize("n_wires", 4)?;
    let n_layers = hyperparams.pop_usize("n_layers", 6)?;
    let interface = Interface::parse(&hyperparams.pop_string("interface", "autograd")?)?;
    let params = hyperparams.pop_param_matrix("params", || {
        let mut rng = thread_rng();
        let dist = Uniform::new(0.0, 1.0);
        Array2::from_shape_fn((n_layers, n_wires), |_| dist.sample(&mut rng))
    })?;
    let measurement = hyperparams.pop_measurement("measurement", Measurement::expval_z0())?;
    let diff_method =
        DiffMethod::parse(&hyperparams.pop_string("diff_method", "parameter-shift")?)?;
    let device = hyperparams.pop_device("device", "default.qubit", n_wires)?;
    let template =
        hyperparams.pop_template("template", || Template::basic_entangler(n_wires, n_layers))?;

    Ok(CoreSettings {
        device,
        diff_method,
        interface,
        params,
        template,
        measurement,
    })
}

/// Resolved configuration of the VQE benchmark family.
#[derive(Debug, Clone)]
pub struct VqeSettings {
    pub hamiltonian: Hamiltonian,
    pub ansatz: Template,
    pub params: Vec<f64>,
    pub n_steps: usize,
    pub device: Device,
    pub interface: Interface,
    pub diff_method: DiffMethod,
    pub optimize: bool,
}

/// Defaults: the H₂ Hamiltonian with the (2 electron, 4 orbital) excitation
/// ansatz, normal(0, π) initial parameters, one step, grouping on.
pub fn vqe_defaults(hyperparams: &mut HyperParams) -> Result<VqeSettings> {
    const ELECTRONS: usize = 2;
    const QUBITS: usize = 4;

    let hamiltonian =
        hyperparams.pop_hamiltonian("hamiltonian", qvb_core::hamiltonians::h2)?;
    let ansatz =
        hyperparams.pop_template("template", || Template::excitation(ELECTRONS, QUBITS))?;
    let params = hyperparams.pop_params("params", || {
        let mut rng = thread_rng();
        let dist = Normal::new(0.0, std::f64::consts::PI).expect("valid std dev");
        (0..ansatz.n_params()).map(|_| dist.sample(&mut rng)).collect()
    })?;
    let n_steps = hyperparams.pop_usize("n_steps", 1)?;
    let device = hyperparams.pop_device("device", "default.qubit", QUBITS)?;
    let interface = Interface::parse(&hyperparams.pop_string("interface", "autograd")?)?;
    let diff_method = DiffMethod::parse(&hyperparams.pop_string("diff_method", "best")?)?;
    let optimize = hyperparams.pop_bool("optimize", true)?;

    Ok(VqeSettings {
        hamiltonian,
        ansatz,
        params,
        n_steps,
        device,
        interface,
        diff_method,
        optimize,
    })
}

/// Resolved configuration of the QAOA benchmark family.
#[derive(Debug, Clone)]
pub struct QaoaSettings {
    pub graph: Graph,
    pub n_layers: usize,
    /// Shape (2, n_layers): row 0 the γ values, row 1 the β values.
    pub params: Array2<f64>,
    pub n_steps: usize,
    pub device: Device,
    pub diff_method: DiffMethod,
}

/// Defaults: complete graph on 4 vertices, one layer, γ = β = 0.5.
pub fn qaoa_defaults(hyperparams: &mut HyperParams) -> Result<QaoaSettings> {
    let graph = hyperparams.pop_graph("graph", || Graph::complete(4))?;
    let n_layers = hyperparams.pop_usize("n_layers", 1)?;
    let params =
        hyperparams.pop_param_matrix("params", || Array2::from_elem((2, n_layers), 0.5))?;
    let n_steps = hyperparams.pop_usize("n_steps", 1)?;
    let device = hyperparams.pop_device("device", "default.qubit", graph.n_vertices())?;
    let diff_method = DiffMethod::parse(&hyperparams.pop_string("diff_method", "best")?)?;

    Ok(QaoaSettings {
        graph,
        n_layers,
        params,
        n_steps,
        device,
        diff_method,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_defaults_shapes() {
        let mut hp = HyperParams::new();
        let settings = core_defaults(&mut hp).unwrap();
        assert_eq!(settings.device.wires(), 4);
        assert_eq!(settings.params.dim(), (6, 4));
        assert_eq!(settings.template.n_params(), 24);
        assert_eq!(settings.interface, Interface::Autograd);
        assert_eq!(settings.diff_method, DiffMethod::ParameterShift);
    }

    #[test]
    fn test_core_overrides_change_resolution() {
        let mut hp = HyperParams::new();
        hp.set("n_wires", 2usize);
        hp.set("n_layers", 3usize);
        hp.set("interface", "tape");
        let settings = core_defaults(&mut hp).unwrap();
        assert_eq!(settings.params.dim(), (3, 2));
        assert_eq!(settings.template.num_wires(), 2);
        assert_eq!(settings.interface, Interface::Tape);
    }

    #[test]
    fn test_vqe_defaults() {
        let mut hp = HyperParams::new();
        let settings = vqe_defaults(&mut hp).unwrap();
        assert_eq!(settings.hamiltonian.n_terms(), 15);
        assert_eq!(settings.params.len(), 3);
        assert_eq!(settings.n_steps, 1);
        assert!(settings.optimize);
        assert_eq!(settings.diff_method, DiffMethod::Best);
    }

    #[test]
    fn test_vqe_optimize_override() {
        let mut hp = HyperParams::new();
        hp.set("optimize", false);
        let settings = vqe_defaults(&mut hp).unwrap();
        assert!(!settings.optimize);
    }

    #[test]
    fn test_qaoa_defaults() {
        let mut hp = HyperParams::new();
        let settings = qaoa_defaults(&mut hp).unwrap();
        assert_eq!(settings.graph.n_vertices(), 4);
        assert_eq!(settings.params.dim(), (2, 1));
        assert_eq!(settings.device.wires(), 4);
    }

    #[test]
    fn test_unknown_interface_rejected() {
        let mut hp = HyperParams::new();
        hp.set("interface", "torch");
        let err = core_defaults(&mut hp).unwrap_err();
        assert!(matches!(err, BenchError::UnknownInterface(_)));
    }
}
