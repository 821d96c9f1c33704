use serde::{Serialize, Deserialize};

use crate::data::normalize::NormalizationMode;
use crate::network::spec::LayerSizes;
use crate::train::cost_record::CostRecord;

/// Summary of a training run: architecture, hyperparameters, the sampled
/// cost curve and the resulting accuracies (percent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    pub sizes: LayerSizes,
    pub learning_rate: f64,
    pub num_iterations: usize,
    pub normalization: NormalizationMode,
    pub costs: Vec<CostRecord>,
    pub train_accuracy: f64,
    /// Absent when no test split was supplied.
    #[serde(default)]
    pub test_accuracy: Option<f64>,
}

impl TrainReport {
    /// Serializes the report to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> crate::error::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a report from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> crate::error::Result<TrainReport> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Final recorded cost, if any was recorded.
    pub fn final_cost(&self) -> Option<f64> {
        self.costs.last().map(|record| record.cost)
    }
}
