pub mod sgd;

pub use sgd::{GradientDescent, DEFAULT_LEARNING_RATE};
