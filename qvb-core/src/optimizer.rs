//! Classical optimizers for variational loops
//!
//! Gradient descent, momentum, and Adam, with the update state kept inside
//! the optimizer so benchmark loops are plain `gradient → step` iterations.

use crate::error::{Error, Result};

pub const DEFAULT_STEPSIZE: f64 = 0.01;
pub const DEFAULT_MOMENTUM: f64 = 0.9;
pub const DEFAULT_BETA1: f64 = 0.9;
pub const DEFAULT_BETA2: f64 = 0.999;
pub const DEFAULT_EPSILON: f64 = 1e-8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizerType {
    GradientDescent,
    Momentum,
    Adam,
}

impl OptimizerType {
    pub fn name(&self) -> &'static str {
        match self {
            OptimizerType::GradientDescent => "GradientDescent",
            OptimizerType::Momentum => "Momentum",
            OptimizerType::Adam => "Adam",
        }
    }
}

#[derive(Debug, Clone)]
pub struct OptimizerConfig {
    pub optimizer_type: OptimizerType,
    pub stepsize: f64,
    pub momentum: f64,
    pub beta1: f64,
    pub beta2: f64,
    pub epsilon: f64,
}

impl OptimizerConfig {
    pub fn gradient_descent(stepsize: f64) -> Self {
        OptimizerConfig {
            optimizer_type: OptimizerType::GradientDescent,
            stepsize,
            ..Default::default()
        }
    }

    pub fn momentum(stepsize: f64, momentum: f64) -> Self {
        OptimizerConfig {
            optimizer_type: OptimizerType::Momentum,
            stepsize,
            momentum,
            ..Default::default()
        }
    }

    pub fn adam(stepsize: f64) -> Self {
        OptimizerConfig {
            optimizer_type: OptimizerType::Adam,
            stepsize,
            ..Default::default()
        }
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        OptimizerConfig {
            optimizer_type: OptimizerType::GradientDescent,
            stepsize: DEFAULT_STEPSIZE,
            momentum: DEFAULT_MOMENTUM,
            beta1: DEFAULT_BETA1,
            beta2: DEFAULT_BETA2,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

/// Momentum velocity state
#[derive(Debug, Clone)]
struct MomentumState {
    velocity: Vec<f64>,
}

/// Adam moment estimates
#[derive(Debug, Clone)]
struct AdamState {
    m: Vec<f64>,
    v: Vec<f64>,
    t: usize,
}

#[derive(Debug)]
pub struct Optimizer {
    config: OptimizerConfig,
    params: Vec<f64>,
    momentum_state: Option<MomentumState>,
    adam_state: Option<AdamState>,
    iteration: usize,
}

impl Optimizer {
    pub fn new(config: OptimizerConfig, initial_params: Vec<f64>) -> Self {
        let n = initial_params.len();
        let (momentum_state, adam_state) = match config.optimizer_type {
            OptimizerType::Momentum => (
                Some(MomentumState {
                    velocity: vec![0.0; n],
                }),
                None,
            ),
            OptimizerType::Adam => (
                None,
                Some(AdamState {
                    m: vec![0.0; n],
                    v: vec![0.0; n],
                    t: 0,
                }),
            ),
            OptimizerType::GradientDescent => (None, None),
        };
        Optimizer {
            config,
            params: initial_params,
            momentum_state,
            adam_state,
            iteration: 0,
        }
    }

    pub fn gradient_descent(stepsize: f64, initial_params: Vec<f64>) -> Self {
        Self::new(OptimizerConfig::gradient_descent(stepsize), initial_params)
    }

    pub fn adam(stepsize: f64, initial_params: Vec<f64>) -> Self {
        Self::new(OptimizerConfig::adam(stepsize), initial_params)
    }

    pub fn params(&self) -> &[f64] {
        &self.params
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// One update from the given gradients.
    pub fn step(&mut self, gradients: &[f64]) -> Result<()> {
        if gradients.len() != self.params.len() {
            return Err(Error::ParamCountMismatch {
                expected: self.params.len(),
                got: gradients.len(),
            });
        }

        match self.config.optimizer_type {
            OptimizerType::GradientDescent => {
                for (p, g) in self.params.iter_mut().zip(gradients) {
                    *p -= self.config.stepsize * g;
                }
            }
            OptimizerType::Momentum => {
                let state = self.momentum_state.as_mut().expect("state matches type");
                for ((p, v), g) in self
                    .params
                    .iter_mut()
                    .zip(state.velocity.iter_mut())
                    .zip(gradients)
                {
                    *v = self.config.momentum * *v - self.config.stepsize * g;
                    *p += *v;
                }
            }
            OptimizerType::Adam => {
                let state = self.adam_state.as_mut().expect("state matches type");
                state.t += 1;
                let bias1 = 1.0 - self.config.beta1.powi(state.t as i32);
                let bias2 = 1.0 - self.config.beta2.powi(state.t as i32);
                for (i, g) in gradients.iter().enumerate() {
                    state.m[i] = self.config.beta1 * state.m[i] + (1.0 - self.config.beta1) * g;
                    state.v[i] =
                        self.config.beta2 * state.v[i] + (1.0 - self.config.beta2) * g * g;
                    let m_hat = state.m[i] / bias1;
                    let v_hat = state.v[i] / bias2;
                    self.params[i] -=
                        self.config.stepsize * m_hat / (v_hat.sqrt() + self.config.epsilon);
                }
            }
        }

        self.iteration += 1;
        Ok(())
    }
}
