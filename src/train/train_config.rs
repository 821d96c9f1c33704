use serde::{Serialize, Deserialize};

use crate::network::spec::DEFAULT_HIDDEN_SIZE;
use crate::optim::sgd::DEFAULT_LEARNING_RATE;

/// Configuration for a `nn_model` run.
///
/// # Fields
/// - `num_iterations` — full-batch gradient-descent steps
/// - `hidden_size`    — hidden tanh units (`n_h`)
/// - `learning_rate`  — fixed step size
/// - `print_cost`     — log the cost every `print_every` iterations
/// - `record_every`   — push the cost into the history every N iterations;
///                      `0` disables the history
/// - `print_every`    — logging interval used when `print_cost` is set
/// - `seed`           — seeds weight initialization; `None` draws from entropy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub num_iterations: usize,
    pub hidden_size: usize,
    pub learning_rate: f64,
    pub print_cost: bool,
    pub record_every: usize,
    pub print_every: usize,
    pub seed: Option<u64>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            num_iterations: 10_000,
            hidden_size: DEFAULT_HIDDEN_SIZE,
            learning_rate: DEFAULT_LEARNING_RATE,
            print_cost: false,
            record_every: 50,
            print_every: 1000,
            seed: None,
        }
    }
}

impl TrainConfig {
    pub fn new(num_iterations: usize) -> Self {
        TrainConfig { num_iterations, ..TrainConfig::default() }
    }

    pub fn with_hidden_size(mut self, hidden_size: usize) -> Self {
        self.hidden_size = hidden_size;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_print_cost(mut self, print_cost: bool) -> Self {
        self.print_cost = print_cost;
        self
    }

    pub fn with_record_every(mut self, record_every: usize) -> Self {
        self.record_every = record_every;
        self
    }

    pub fn with_print_every(mut self, print_every: usize) -> Self {
        self.print_every = print_every;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
