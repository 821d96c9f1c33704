pub mod bce;

pub use bce::compute_cost;
