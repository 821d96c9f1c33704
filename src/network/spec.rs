use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};
use crate::math::matrix::Matrix;

/// Hidden-layer width used when none is configured.
pub const DEFAULT_HIDDEN_SIZE: usize = 4;

/// Layer widths of the network.
///
/// Fields:
/// - `n_x` — input features (rows of the feature matrix)
/// - `n_h` — hidden tanh units
/// - `n_y` — output sigmoid units (rows of the label matrix; 1 for binary
///           classification)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerSizes {
    pub n_x: usize,
    pub n_h: usize,
    pub n_y: usize,
}

impl LayerSizes {
    pub fn new(n_x: usize, n_h: usize, n_y: usize) -> LayerSizes {
        LayerSizes { n_x, n_h, n_y }
    }

    /// Reads `n_x` and `n_y` off the data: `x` is (n_x × m), `y` is (n_y × m).
    pub fn from_data(x: &Matrix, y: &Matrix, n_h: usize) -> Result<LayerSizes> {
        if x.cols != y.cols {
            return Err(Error::ShapeMismatch {
                op: "layer_sizes",
                left: x.shape(),
                right: y.shape(),
            });
        }
        if x.rows == 0 || x.cols == 0 {
            return Err(Error::EmptyData("feature matrix has no rows or columns".into()));
        }
        Ok(LayerSizes { n_x: x.rows, n_h, n_y: y.rows })
    }

    pub fn w1_shape(&self) -> (usize, usize) { (self.n_h, self.n_x) }
    pub fn b1_shape(&self) -> (usize, usize) { (self.n_h, 1) }
    pub fn w2_shape(&self) -> (usize, usize) { (self.n_y, self.n_h) }
    pub fn b2_shape(&self) -> (usize, usize) { (self.n_y, 1) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_come_from_feature_and_label_rows() {
        let x = Matrix::zeros(3, 10);
        let y = Matrix::zeros(1, 10);
        let sizes = LayerSizes::from_data(&x, &y, DEFAULT_HIDDEN_SIZE).unwrap();
        assert_eq!(sizes, LayerSizes::new(3, 4, 1));
        assert_eq!(sizes.w1_shape(), (4, 3));
        assert_eq!(sizes.w2_shape(), (1, 4));
    }

    #[test]
    fn example_counts_must_agree() {
        let x = Matrix::zeros(3, 10);
        let y = Matrix::zeros(1, 9);
        assert!(matches!(
            LayerSizes::from_data(&x, &y, 4),
            Err(Error::ShapeMismatch { .. })
        ));
    }
}
