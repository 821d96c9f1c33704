use log::info;
use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::math::matrix::Matrix;
use crate::network::spec::LayerSizes;

/// Standard deviation of the initial weights.
pub const INIT_WEIGHT_SCALE: f64 = 0.01;

/// Weights and biases of the two layers.
///
/// `w1` is (n_h × n_x), `b1` is (n_h × 1), `w2` is (n_y × n_h),
/// `b2` is (n_y × 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    pub w1: Matrix,
    pub b1: Matrix,
    pub w2: Matrix,
    pub b2: Matrix,
}

impl Parameters {
    /// Small Gaussian weights and zero biases.
    pub fn initialize<R: Rng + ?Sized>(sizes: LayerSizes, rng: &mut R) -> Parameters {
        info!(
            "Layer sizes: input {}, hidden {}, output {}",
            sizes.n_x, sizes.n_h, sizes.n_y
        );

        let (h, x) = sizes.w1_shape();
        let w1 = Matrix::random_normal(h, x, INIT_WEIGHT_SCALE, rng);
        let (y, h) = sizes.w2_shape();
        let w2 = Matrix::random_normal(y, h, INIT_WEIGHT_SCALE, rng);

        Parameters {
            w1,
            b1: Matrix::zeros(sizes.n_h, 1),
            w2,
            b2: Matrix::zeros(sizes.n_y, 1),
        }
    }

    /// Layer widths implied by the weight shapes.
    pub fn sizes(&self) -> LayerSizes {
        LayerSizes::new(self.w1.cols, self.w1.rows, self.w2.rows)
    }
}
