pub mod spec;
pub mod network;
pub mod forward;
pub mod backward;

pub use spec::{LayerSizes, DEFAULT_HIDDEN_SIZE};
pub use network::Parameters;
pub use forward::{forward_propagation, Cache};
pub use backward::{backward_propagation, Gradients};
