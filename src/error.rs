use thiserror::Error;

/// Errors produced while loading data, training, or predicting.
#[derive(Debug, Error)]
pub enum Error {
    /// Two operands of a linear-algebra operation have incompatible shapes.
    /// Shapes are reported as `(rows, cols)`.
    #[error("shape mismatch in {op}: {left:?} vs {right:?}")]
    ShapeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("numeric overflow: {0}")]
    NumericOverflow(String),

    #[error("empty data: {0}")]
    EmptyData(String),

    /// A delimited-file cell could not be read as a number. `line` is 1-based.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
