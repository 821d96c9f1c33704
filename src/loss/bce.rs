use crate::error::{Error, Result};
use crate::math::matrix::Matrix;

/// Predictions are clipped into [EPS, 1 − EPS] before taking logs.
pub const EPS: f64 = 1e-12;

/// Mean binary cross-entropy over all examples:
///
/// ```text
/// cost = −(1/m) · Σ [ y·ln(a) + (1 − y)·ln(1 − a) ]
/// ```
///
/// `a2` and `y` are both (1 × m). A saturated activation of exactly 0 or 1
/// contributes a large but finite term because of the clipping; a NaN
/// activation still yields `Error::NumericOverflow`.
pub fn compute_cost(a2: &Matrix, y: &Matrix) -> Result<f64> {
    if a2.shape() != y.shape() {
        return Err(Error::ShapeMismatch {
            op: "compute_cost",
            left: a2.shape(),
            right: y.shape(),
        });
    }
    let m = y.cols;
    if m == 0 {
        return Err(Error::EmptyData("cost over zero examples".into()));
    }

    let total: f64 = a2.iter().zip(y.iter())
        .map(|(&a, &label)| {
            let p = a.clamp(EPS, 1.0 - EPS);
            label * p.ln() + (1.0 - label) * (1.0 - p).ln()
        })
        .sum();
    let cost = -total / m as f64;

    if !cost.is_finite() {
        return Err(Error::NumericOverflow(format!("cross-entropy cost is {cost}")));
    }
    Ok(cost)
}
