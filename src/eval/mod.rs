pub mod predict;

pub use predict::{accuracy, predict, threshold, DECISION_THRESHOLD};
