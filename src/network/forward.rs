use crate::activation::activation::ActivationFunction;
use crate::error::Result;
use crate::math::matrix::Matrix;
use crate::network::network::Parameters;

/// Intermediate values of one forward pass, consumed by backprop.
#[derive(Debug, Clone, PartialEq)]
pub struct Cache {
    pub z1: Matrix,
    pub a1: Matrix,
    pub z2: Matrix,
    pub a2: Matrix,
}

/// Runs `x` (n_x × m) through the network and returns the output
/// activations A2 (n_y × m) together with the full cache.
///
/// ```text
/// Z1 = W1·X + b1    A1 = tanh(Z1)
/// Z2 = W2·A1 + b2   A2 = sigmoid(Z2)
/// ```
pub fn forward_propagation(x: &Matrix, params: &Parameters) -> Result<(Matrix, Cache)> {
    let z1 = params.w1.dot(x)?.add_column(&params.b1)?;
    let a1 = ActivationFunction::Tanh.apply(&z1);
    let z2 = params.w2.dot(&a1)?.add_column(&params.b2)?;
    let a2 = ActivationFunction::Sigmoid.apply(&z2);

    Ok((a2.clone(), Cache { z1, a1, z2, a2 }))
}
