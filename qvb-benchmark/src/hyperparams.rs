//! Hyperparameter mapping
//!
//! A mapping from option name to value with "pop with default" semantics:
//! looking a key up removes it, a missing key yields the caller's default,
//! and unrecognized keys are simply left behind. A recognized key holding
//! the wrong kind of value is malformed input and surfaces as an error.

use std::fmt;

use ndarray::Array2;
use rustc_hash::FxHashMap;

use qvb_core::{Device, Graph, Hamiltonian, Measurement, Template};

use crate::{BenchError, Result};

/// A hyperparameter value.
#[derive(Debug, Clone)]
pub enum HyperValue {
    Int(usize),
    Float(f64),
    Bool(bool),
    Str(String),
    /// Parameter matrix, e.g. entangler weights of shape (n_layers, n_wires).
    ParamMatrix(Array2<f64>),
    /// Flat parameter vector, e.g. excitation amplitudes.
    Params(Vec<f64>),
    Device(Device),
    Hamiltonian(Hamiltonian),
    Graph(Graph),
    Template(Template),
    Measurement(Measurement),
}

impl HyperValue {
    pub fn kind(&self) -> &'static str {
        match self {
            HyperValue::Int(_) => "an integer",
            HyperValue::Float(_) => "a float",
            HyperValue::Bool(_) => "a bool",
            HyperValue::Str(_) => "a string",
            HyperValue::ParamMatrix(_) => "a parameter matrix",
            HyperValue::Params(_) => "a parameter vector",
            HyperValue::Device(_) => "a device",
            HyperValue::Hamiltonian(_) => "a Hamiltonian",
            HyperValue::Graph(_) => "a graph",
            HyperValue::Template(_) => "a template",
            HyperValue::Measurement(_) => "a measurement",
        }
    }
}

impl fmt::Display for HyperValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HyperValue::Int(v) => write!(f, "{v}"),
            HyperValue::Float(v) => write!(f, "{v}"),
            HyperValue::Bool(v) => write!(f, "{v}"),
            HyperValue::Str(v) => write!(f, "{v}"),
            HyperValue::ParamMatrix(m) => write!(f, "params{:?}", m.dim()),
            HyperValue::Params(v) => write!(f, "params[{}]", v.len()),
            HyperValue::Device(d) => write!(f, "{}", d.name()),
            HyperValue::Hamiltonian(h) => write!(f, "hamiltonian[{} terms]", h.n_terms()),
            HyperValue::Graph(g) => write!(f, "graph[{}v,{}e]", g.n_vertices(), g.n_edges()),
            HyperValue::Template(_) => write!(f, "template"),
            HyperValue::Measurement(_) => write!(f, "measurement"),
        }
    }
}

impl From<usize> for HyperValue {
    fn from(v: usize) -> Self {
        HyperValue::Int(v)
    }
}

impl From<f64> for HyperValue {
    fn from(v: f64) -> Self {
        HyperValue::Float(v)
    }
}

impl From<bool> for HyperValue {
    fn from(v: bool) -> Self {
        HyperValue::Bool(v)
    }
}

impl From<&str> for HyperValue {
    fn from(v: &str) -> Self {
        HyperValue::Str(v.to_string())
    }
}

impl From<String> for HyperValue {
    fn from(v: String) -> Self {
        HyperValue::Str(v)
    }
}

impl From<Array2<f64>> for HyperValue {
    fn from(v: Array2<f64>) -> Self {
        HyperValue::ParamMatrix(v)
    }
}

impl From<Vec<f64>> for HyperValue {
    fn from(v: Vec<f64>) -> Self {
        HyperValue::Params(v)
    }
}

impl From<Device> for HyperValue {
    fn from(v: Device) -> Self {
        HyperValue::Device(v)
    }
}

impl From<Hamiltonian> for HyperValue {
    fn from(v: Hamiltonian) -> Self {
        HyperValue::Hamiltonian(v)
    }
}

impl From<Graph> for HyperValue {
    fn from(v: Graph) -> Self {
        HyperValue::Graph(v)
    }
}

impl From<Template> for HyperValue {
    fn from(v: Template) -> Self {
        HyperValue::Template(v)
    }
}

impl From<Measurement> for HyperValue {
    fn from(v: Measurement) -> Self {
        HyperValue::Measurement(v)
    }
}

/// Hyperparameter mapping with pop-with-default lookup.
#[derive(Debug, Clone, Default)]
pub struct HyperParams {
    values: FxHashMap<String, HyperValue>,
}

fn type_error(key: &str, expected: &'static str, got: &HyperValue) -> BenchError {
    BenchError::HyperparamType {
        key: key.to_string(),
        expected,
        got: got.kind(),
    }
}

impl HyperParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: impl Into<HyperValue>) {
        self.values.insert(key.to_string(), value.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Remove and return a raw value.
    pub fn pop(&mut self, key: &str) -> Option<HyperValue> {
        self.values.remove(key)
    }

    pub fn pop_usize(&mut self, key: &str, default: usize) -> Result<usize> {
        match self.values.remove(key) {
            None => Ok(default),
            Some(HyperValue::Int(v)) => Ok(v),
            Some(other) => Err(type_error(key, "an integer", &other)),
        }
    }

    pub fn pop_f64(&mut self, key: &str, default: f64) -> Result<f64> {
        match self.values.remove(key) {
            None => Ok(default),
            Some(HyperValue::Float(v)) => Ok(v),
            Some(other) => Err(type_error(key, "a float", &other)),
        }
    }

    pub fn pop_bool(&mut self, key: &str, default: bool) -> Result<bool> {
        match self.values.remove(key) {
            None => Ok(default),
            Some(HyperValue::Bool(v)) => Ok(v),
            Some(other) => Err(type_error(key, "a bool", &other)),
        }
    }

    pub fn pop_string(&mut self, key: &str, default: &str) -> Result<String> {
        match self.values.remove(key) {
            None => Ok(default.to_string()),
            Some(HyperValue::Str(v)) => Ok(v),
            Some(other) => Err(type_error(key, "a string", &other)),
        }
    }

    pub fn pop_param_matrix(
        &mut self,
        key: &str,
        default: impl FnOnce() -> Array2<f64>,
    ) -> Result<Array2<f64>> {
        match self.values.remove(key) {
            None => Ok(default()),
            Some(HyperValue::ParamMatrix(v)) => Ok(v),
            Some(other) => Err(type_error(key, "a parameter matrix", &other)),
        }
    }

    /// Flat parameter vector; a matrix is accepted and flattened row-major.
    pub fn pop_params(
        &mut self,
        key: &str,
        default: impl FnOnce() -> Vec<f64>,
    ) -> Result<Vec<f64>> {
        match self.values.remove(key) {
            None => Ok(default()),
            Some(HyperValue::Params(v)) => Ok(v),
            Some(HyperValue::ParamMatrix(m)) => Ok(m.iter().copied().collect()),
            Some(other) => Err(type_error(key, "a parameter vector", &other)),
        }
    }

    /// Resolve a device. A string value names a device that is lazily
    /// instantiated with `wires` wires; a constructed device is passed
    /// through unchanged.
    pub fn pop_device(&mut self, key: &str, default_name: &str, wires: usize) -> Result<Device> {
        match self.values.remove(key) {
            None => Ok(Device::new(default_name, wires)?),
            Some(HyperValue::Str(name)) => Ok(Device::new(&name, wires)?),
            Some(HyperValue::Device(device)) => Ok(device),
            Some(other) => Err(type_error(key, "a device or device name", &other)),
        }
    }

    pub fn pop_hamiltonian(
        &mut self,
        key: &str,
        default: impl FnOnce() -> Hamiltonian,
    ) -> Result<Hamiltonian> {
        match self.values.remove(key) {
            None => Ok(default()),
            Some(HyperValue::Hamiltonian(h)) => Ok(h),
            Some(other) => Err(type_error(key, "a Hamiltonian", &other)),
        }
    }

    pub fn pop_graph(&mut self, key: &str, default: impl FnOnce() -> Graph) -> Result<Graph> {
        match self.values.remove(key) {
            None => Ok(default()),
            Some(HyperValue::Graph(g)) => Ok(g),
            Some(other) => Err(type_error(key, "a graph", &other)),
        }
    }

    pub fn pop_template(
        &mut self,
        key: &str,
        default: impl FnOnce() -> Template,
    ) -> Result<Template> {
        match self.values.remove(key) {
            None => Ok(default()),
            Some(HyperValue::Template(t)) => Ok(t),
            Some(other) => Err(type_error(key, "a template", &other)),
        }
    }

    pub fn pop_measurement(&mut self, key: &str, default: Measurement) -> Result<Measurement> {
        match self.values.remove(key) {
            None => Ok(default),
            Some(HyperValue::Measurement(m)) => Ok(m),
            Some(other) => Err(type_error(key, "a measurement", &other)),
        }
    }
}
