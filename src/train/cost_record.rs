use serde::{Serialize, Deserialize};

/// One sample of the cost curve.
///
/// `nn_model` emits one `CostRecord` every `record_every` iterations; the
/// sequence is what the report writes out for plotting cost against
/// iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostRecord {
    /// 0-based iteration the cost was measured at (before that iteration's update).
    pub iteration: usize,
    pub cost: f64,
}
