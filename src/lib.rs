pub mod error;
pub mod math;
pub mod activation;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod eval;
pub mod data;
pub mod report;

// Convenience re-exports
pub use error::{Error, Result};
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use network::{backward_propagation, forward_propagation, Cache, Gradients, LayerSizes, Parameters};
pub use loss::bce::compute_cost;
pub use optim::sgd::GradientDescent;
pub use train::{nn_model, TrainConfig, TrainOutcome};
pub use eval::predict::{accuracy, predict};
pub use data::{Dataset, NormalizationMode, StandardNormalizer};
pub use report::TrainReport;
