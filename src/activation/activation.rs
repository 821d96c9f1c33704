use serde::{Serialize, Deserialize};
use std::f64::consts::E;

use crate::math::matrix::Matrix;

/// The two nonlinearities of the network: `Tanh` on the hidden layer and
/// `Sigmoid` on the output unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationFunction {
    Sigmoid,
    Tanh,
}

impl ActivationFunction {
    /// Element-wise activation.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::Tanh => x.tanh(),
        }
    }

    /// Element-wise derivative of the activation at pre-activation `x`.
    pub fn derivative(&self, x: f64) -> f64 {
        self.derivative_from_output(self.function(x))
    }

    /// Derivative expressed through the activation's own output `a = f(x)`.
    ///
    /// Backprop already holds the cached activations, so this avoids
    /// re-evaluating the nonlinearity: σ' = a(1 − a), tanh' = 1 − a².
    pub fn derivative_from_output(&self, a: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => a * (1.0 - a),
            ActivationFunction::Tanh => 1.0 - a * a,
        }
    }

    pub fn apply(&self, z: &Matrix) -> Matrix {
        z.map(|x| self.function(x))
    }
}
