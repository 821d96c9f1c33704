//! Per-feature standardization.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::math::matrix::Matrix;

/// Standard deviations below this are treated as a constant feature.
const MIN_STD: f64 = 1e-10;

/// How the test split is standardized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMode {
    /// Both splits use the mean/std measured on the training split.
    #[default]
    TrainStatistics,
    /// Each split is standardized with its own mean/std.
    PerSplit,
}

/// Z-score statistics for each feature (row) of an (n_x × m) matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardNormalizer {
    pub mean: Vec<f64>,
    pub std: Vec<f64>,
}

impl StandardNormalizer {
    /// Measures the population mean and standard deviation of every row.
    /// A constant feature gets std 1.0 so it maps to zero instead of NaN.
    pub fn fit(data: &Matrix) -> Result<StandardNormalizer> {
        if data.cols == 0 {
            return Err(Error::EmptyData("cannot fit a normalizer on zero examples".into()));
        }
        let m = data.cols as f64;

        let mut mean = Vec::with_capacity(data.rows);
        let mut std = Vec::with_capacity(data.rows);
        for (feature, row) in data.data.iter().enumerate() {
            let mu = row.iter().sum::<f64>() / m;
            let var = row.iter().map(|x| (x - mu).powi(2)).sum::<f64>() / m;
            let mut sigma = var.sqrt();
            if sigma < MIN_STD {
                warn!("feature {} is constant; leaving it unscaled", feature);
                sigma = 1.0;
            }
            mean.push(mu);
            std.push(sigma);
        }

        Ok(StandardNormalizer { mean, std })
    }

    /// Applies `(x − mean) / std` feature by feature.
    pub fn transform(&self, data: &Matrix) -> Result<Matrix> {
        if data.rows != self.mean.len() {
            return Err(Error::ShapeMismatch {
                op: "normalize",
                left: (self.mean.len(), 1),
                right: data.shape(),
            });
        }
        let rows = data.data.iter()
            .zip(self.mean.iter().zip(self.std.iter()))
            .map(|(row, (mu, sigma))| row.iter().map(|x| (x - mu) / sigma).collect())
            .collect();
        Ok(Matrix { rows: data.rows, cols: data.cols, data: rows })
    }

    pub fn fit_transform(data: &Matrix) -> Result<(StandardNormalizer, Matrix)> {
        let normalizer = StandardNormalizer::fit(data)?;
        let transformed = normalizer.transform(data)?;
        Ok((normalizer, transformed))
    }
}

/// Standardizes a training split and, if present, a test split.
pub fn normalize_splits(
    train: &Matrix,
    test: Option<&Matrix>,
    mode: NormalizationMode,
) -> Result<(Matrix, Option<Matrix>)> {
    let (normalizer, train_norm) = StandardNormalizer::fit_transform(train)?;
    let test_norm = match (test, mode) {
        (None, _) => None,
        (Some(t), NormalizationMode::TrainStatistics) => Some(normalizer.transform(t)?),
        (Some(t), NormalizationMode::PerSplit) => Some(StandardNormalizer::fit_transform(t)?.1),
    };
    Ok((train_norm, test_norm))
}
