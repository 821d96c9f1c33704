pub mod train_config;
pub mod cost_record;
pub mod loop_fn;

pub use train_config::TrainConfig;
pub use cost_record::CostRecord;
pub use loop_fn::{nn_model, train_from, TrainOutcome};
