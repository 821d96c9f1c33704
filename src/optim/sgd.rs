use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::math::matrix::Matrix;
use crate::network::backward::Gradients;
use crate::network::network::Parameters;

pub const DEFAULT_LEARNING_RATE: f64 = 1.2;

/// Plain gradient descent with a fixed learning rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientDescent {
    pub learning_rate: f64,
}

impl Default for GradientDescent {
    fn default() -> Self {
        GradientDescent { learning_rate: DEFAULT_LEARNING_RATE }
    }
}

impl GradientDescent {
    pub fn new(learning_rate: f64) -> GradientDescent {
        GradientDescent { learning_rate }
    }

    /// Returns `θ − lr·dθ` for every weight and bias.
    pub fn update(&self, params: &Parameters, grads: &Gradients) -> Result<Parameters> {
        Ok(Parameters {
            w1: self.step(&params.w1, &grads.dw1)?,
            b1: self.step(&params.b1, &grads.db1)?,
            w2: self.step(&params.w2, &grads.dw2)?,
            b2: self.step(&params.b2, &grads.db2)?,
        })
    }

    fn step(&self, value: &Matrix, grad: &Matrix) -> Result<Matrix> {
        value.sub(&(grad * self.learning_rate))
    }
}
