//! Comma-delimited numeric files.
//!
//! Feature files hold one example per line (`m` lines of `n_x` values);
//! label files hold one raw label per line, or a single line of `m` values.
//! No header row is expected.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use log::debug;

use crate::error::{Error, Result};
use crate::math::matrix::Matrix;

/// Raw labels strictly above this value are the positive class
/// (the label files encode the two classes as 1 and 2).
pub const DEFAULT_LABEL_THRESHOLD: f64 = 1.0;

/// Parses every non-blank line of `reader` into a row of floats.
/// All rows must have the same number of cells.
pub fn read_matrix<R: Read>(reader: R) -> Result<Vec<Vec<f64>>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map_or(rows.len() + 1, |p| p.line() as usize);

        if record.iter().all(|cell| cell.is_empty()) {
            continue;
        }

        let row = record.iter()
            .map(|cell| {
                cell.parse::<f64>().map_err(|_| Error::Parse {
                    line,
                    message: format!("'{}' is not a number", cell),
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        if let Some(first) = rows.first() {
            if first.len() != row.len() {
                return Err(Error::Parse {
                    line,
                    message: format!("expected {} values, found {}", first.len(), row.len()),
                });
            }
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Loads a feature file and returns it as (n_x × m): one column per example.
pub fn load_features<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    let rows = read_matrix(File::open(path.as_ref())?)?;
    if rows.is_empty() {
        return Err(Error::EmptyData(format!("{} has no rows", path.as_ref().display())));
    }
    debug!("loaded {} examples of {} features from {}", rows.len(), rows[0].len(), path.as_ref().display());
    Ok(Matrix::from_data(rows)?.transpose())
}

/// Loads a label file as a (1 × m) row of 0.0/1.0.
pub fn load_labels<P: AsRef<Path>>(path: P, threshold: f64) -> Result<Matrix> {
    let rows = read_matrix(File::open(path.as_ref())?)?;
    labels_from_rows(rows, threshold)
}

/// Flattens one-value-per-line or one-line-of-values input into a label row.
fn labels_from_rows(rows: Vec<Vec<f64>>, threshold: f64) -> Result<Matrix> {
    if rows.is_empty() {
        return Err(Error::EmptyData("label file has no rows".into()));
    }
    let raw: Vec<f64> = if rows.len() == 1 {
        rows.into_iter().flatten().collect()
    } else if rows[0].len() == 1 {
        rows.into_iter().map(|row| row[0]).collect()
    } else {
        return Err(Error::Parse {
            line: 1,
            message: format!("labels must be a single column or a single row, found {} columns", rows[0].len()),
        });
    };
    Ok(Matrix::row_vector(
        raw.into_iter().map(|v| if v > threshold { 1.0 } else { 0.0 }).collect(),
    ))
}

/// A feature matrix (n_x × m) with its label row (1 × m).
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub features: Matrix,
    pub labels: Matrix,
}

impl Dataset {
    /// Pairs features and labels, checking that the example counts agree.
    pub fn new(features: Matrix, labels: Matrix) -> Result<Dataset> {
        if features.cols != labels.cols {
            return Err(Error::ShapeMismatch {
                op: "dataset",
                left: features.shape(),
                right: labels.shape(),
            });
        }
        Ok(Dataset { features, labels })
    }

    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(features_path: P, labels_path: Q, threshold: f64) -> Result<Dataset> {
        Dataset::new(load_features(features_path)?, load_labels(labels_path, threshold)?)
    }

    pub fn num_examples(&self) -> usize {
        self.features.cols
    }

    pub fn num_features(&self) -> usize {
        self.features.rows
    }
}
