use crate::error::{Error, Result};
use crate::math::matrix::Matrix;
use crate::network::forward::forward_propagation;
use crate::network::network::Parameters;

/// Decision boundary on the sigmoid output.
pub const DECISION_THRESHOLD: f64 = 0.5;

/// Classifies one output activation. Strictly greater than 0.5 is positive,
/// so an activation of exactly 0.5 is negative.
pub fn threshold(a2: f64) -> bool {
    a2 > DECISION_THRESHOLD
}

/// One forward pass over `x` (n_x × m), thresholded per example.
/// Returns `m` predictions in column order.
pub fn predict(params: &Parameters, x: &Matrix) -> Result<Vec<bool>> {
    let (a2, _) = forward_propagation(x, params)?;
    Ok(a2.iter().map(|&a| threshold(a)).collect())
}

/// Percentage of predictions that agree with `labels` (1 × m, 0.0/1.0).
///
/// Counts correct positives and correct negatives alike, over all `m`
/// examples, scaled to [0, 100].
pub fn accuracy(predictions: &[bool], labels: &Matrix) -> Result<f64> {
    if labels.rows != 1 || labels.cols != predictions.len() {
        return Err(Error::ShapeMismatch {
            op: "accuracy",
            left: (1, predictions.len()),
            right: labels.shape(),
        });
    }
    if predictions.is_empty() {
        return Err(Error::EmptyData("accuracy over zero examples".into()));
    }

    let correct = predictions.iter().zip(labels.iter())
        .filter(|&(&predicted, &label)| predicted == (label > DECISION_THRESHOLD))
        .count();
    Ok(correct as f64 / predictions.len() as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::spec::LayerSizes;
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn threshold_is_strict() {
        assert!(!threshold(0.5));
        assert!(threshold(0.6));
        assert!(!threshold(0.4));
    }

    #[test]
    fn biased_output_decides_every_example() {
        let params = Parameters {
            w1: Matrix::zeros(4, 2),
            b1: Matrix::zeros(4, 1),
            w2: Matrix::zeros(1, 4),
            // sigmoid(ln 1.5) = 0.6
            b2: Matrix::row_vector(vec![1.5f64.ln()]),
        };
        let x = Matrix::zeros(2, 3);
        assert_eq!(predict(&params, &x).unwrap(), vec![true, true, true]);

        let mut negative = params.clone();
        // sigmoid(0) = 0.5, which is not positive
        negative.b2 = Matrix::zeros(1, 1);
        assert_eq!(predict(&negative, &x).unwrap(), vec![false, false, false]);
    }

    #[test]
    fn predictions_are_idempotent() {
        let params = Parameters::initialize(LayerSizes::new(2, 4, 1), &mut StdRng::seed_from_u64(8));
        let x = Matrix::from_data(vec![vec![0.3, -1.0, 2.0], vec![1.0, 0.5, -0.5]]).unwrap();
        assert_eq!(predict(&params, &x).unwrap(), predict(&params, &x).unwrap());
    }

    #[test]
    fn accuracy_counts_both_classes() {
        let labels = Matrix::row_vector(vec![1.0, 0.0, 1.0, 0.0]);
        let predictions = [true, false, false, true];
        assert_relative_eq!(accuracy(&predictions, &labels).unwrap(), 50.0);
        assert_relative_eq!(accuracy(&[true, false, true, false], &labels).unwrap(), 100.0);
    }

    #[test]
    fn accuracy_needs_one_label_per_prediction() {
        let labels = Matrix::row_vector(vec![1.0, 0.0]);
        assert!(matches!(accuracy(&[true], &labels), Err(Error::ShapeMismatch { .. })));
    }
}
