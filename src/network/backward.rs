use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::error::{Error, Result};
use crate::math::matrix::Matrix;
use crate::network::forward::Cache;
use crate::network::network::Parameters;

/// Gradients of the cost w.r.t. each parameter; shapes equal the
/// corresponding `Parameters` fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradients {
    pub dw1: Matrix,
    pub db1: Matrix,
    pub dw2: Matrix,
    pub db2: Matrix,
}

/// Backprop through the sigmoid output and tanh hidden layer.
///
/// With binary cross-entropy on a sigmoid output the output delta reduces
/// to `dZ2 = A2 − Y`. The hidden delta uses the tanh derivative taken from
/// the cached activations:
///
/// ```text
/// dW2 = dZ2·A1ᵀ / m          db2 = mean_cols(dZ2)
/// dZ1 = (W2ᵀ·dZ2) ⊙ (1 − A1²)
/// dW1 = dZ1·Xᵀ / m           db1 = mean_cols(dZ1)
/// ```
pub fn backward_propagation(
    params: &Parameters,
    cache: &Cache,
    x: &Matrix,
    y: &Matrix,
) -> Result<Gradients> {
    let m = x.cols;
    if m == 0 {
        return Err(Error::EmptyData("backward pass over zero examples".into()));
    }
    if y.cols != m {
        return Err(Error::ShapeMismatch {
            op: "backward_propagation",
            left: x.shape(),
            right: y.shape(),
        });
    }
    let inv_m = 1.0 / m as f64;

    let dz2 = cache.a2.sub(y)?;
    let dw2 = &dz2.dot(&cache.a1.transpose())? * inv_m;
    let db2 = dz2.mean_rows();

    let tanh_grad = cache.a1.map(|a| ActivationFunction::Tanh.derivative_from_output(a));
    let dz1 = params.w2.transpose().dot(&dz2)?.hadamard(&tanh_grad)?;
    let dw1 = &dz1.dot(&x.transpose())? * inv_m;
    let db1 = dz1.mean_rows();

    Ok(Gradients { dw1, db1, dw2, db2 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loss::bce::compute_cost;
    use crate::network::forward::forward_propagation;
    use crate::network::spec::LayerSizes;
    use rand::{rngs::StdRng, SeedableRng};

    fn dataset() -> (Matrix, Matrix) {
        let x = Matrix::from_data(vec![
            vec![0.5, -1.2, 1.8, -0.3, 0.9],
            vec![1.1, 0.4, -0.7, -1.5, 0.2],
            vec![-0.6, 0.8, 0.1, 1.3, -1.0],
        ]).unwrap();
        let y = Matrix::row_vector(vec![1.0, 0.0, 1.0, 0.0, 1.0]);
        (x, y)
    }

    fn params() -> Parameters {
        let mut params = Parameters::initialize(LayerSizes::new(3, 4, 1), &mut StdRng::seed_from_u64(11));
        // Larger weights so the hidden gradients are well above finite-difference noise.
        params.w1 = &params.w1 * 50.0;
        params.w2 = &params.w2 * 50.0;
        params
    }

    fn cost_at(params: &Parameters, x: &Matrix, y: &Matrix) -> f64 {
        let (a2, _) = forward_propagation(x, params).unwrap();
        compute_cost(&a2, y).unwrap()
    }

    #[test]
    fn gradient_shapes_match_parameter_shapes() {
        let (x, y) = dataset();
        let params = params();
        let (_, cache) = forward_propagation(&x, &params).unwrap();
        let grads = backward_propagation(&params, &cache, &x, &y).unwrap();
        assert_eq!(grads.dw1.shape(), params.w1.shape());
        assert_eq!(grads.db1.shape(), params.b1.shape());
        assert_eq!(grads.dw2.shape(), params.w2.shape());
        assert_eq!(grads.db2.shape(), params.b2.shape());
    }

    #[test]
    fn analytic_gradients_match_finite_differences() {
        let (x, y) = dataset();
        let params = params();
        let (_, cache) = forward_propagation(&x, &params).unwrap();
        let grads = backward_propagation(&params, &cache, &x, &y).unwrap();
        let h = 1e-5;

        for i in 0..params.w1.rows {
            for j in 0..params.w1.cols {
                let mut plus = params.clone();
                plus.w1.data[i][j] += h;
                let mut minus = params.clone();
                minus.w1.data[i][j] -= h;
                let numeric = (cost_at(&plus, &x, &y) - cost_at(&minus, &x, &y)) / (2.0 * h);
                let analytic = grads.dw1.data[i][j];
                assert!(
                    (numeric - analytic).abs() < 1e-7,
                    "dW1[{i}][{j}]: numeric {numeric} vs analytic {analytic}"
                );
            }
        }

        for i in 0..params.b1.rows {
            let mut plus = params.clone();
            plus.b1.data[i][0] += h;
            let mut minus = params.clone();
            minus.b1.data[i][0] -= h;
            let numeric = (cost_at(&plus, &x, &y) - cost_at(&minus, &x, &y)) / (2.0 * h);
            assert!((numeric - grads.db1.data[i][0]).abs() < 1e-7);
        }

        for j in 0..params.w2.cols {
            let mut plus = params.clone();
            plus.w2.data[0][j] += h;
            let mut minus = params.clone();
            minus.w2.data[0][j] -= h;
            let numeric = (cost_at(&plus, &x, &y) - cost_at(&minus, &x, &y)) / (2.0 * h);
            assert!((numeric - grads.dw2.data[0][j]).abs() < 1e-7);
        }
    }

    #[test]
    fn label_count_must_match_examples() {
        let (x, _) = dataset();
        let params = params();
        let (_, cache) = forward_propagation(&x, &params).unwrap();
        let y = Matrix::row_vector(vec![1.0, 0.0]);
        assert!(matches!(
            backward_propagation(&params, &cache, &x, &y),
            Err(Error::ShapeMismatch { .. })
        ));
    }
}
