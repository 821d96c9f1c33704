use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use crate::error::Result;
use crate::loss::bce::compute_cost;
use crate::math::matrix::Matrix;
use crate::network::backward::backward_propagation;
use crate::network::forward::forward_propagation;
use crate::network::network::Parameters;
use crate::network::spec::LayerSizes;
use crate::optim::sgd::GradientDescent;
use crate::train::cost_record::CostRecord;
use crate::train::train_config::TrainConfig;

/// Result of a training run.
#[derive(Debug, Clone)]
pub struct TrainOutcome {
    pub parameters: Parameters,
    pub costs: Vec<CostRecord>,
}

impl TrainOutcome {
    /// The recorded costs without their iteration numbers.
    pub fn cost_values(&self) -> Vec<f64> {
        self.costs.iter().map(|record| record.cost).collect()
    }
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Initializes a network sized from `x` (n_x × m) and `y` (1 × m) and trains
/// it for `config.num_iterations` full-batch gradient-descent steps.
///
/// There is no convergence check or early stop: a learning rate that makes
/// the cost diverge still runs every iteration.
pub fn nn_model(x: &Matrix, y: &Matrix, config: &TrainConfig) -> Result<TrainOutcome> {
    let sizes = LayerSizes::from_data(x, y, config.hidden_size)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let parameters = Parameters::initialize(sizes, &mut rng);
    train_from(parameters, x, y, config)
}

/// Runs the training loop starting from the given parameters.
/// `config.hidden_size` and `config.seed` are ignored.
pub fn train_from(
    mut parameters: Parameters,
    x: &Matrix,
    y: &Matrix,
    config: &TrainConfig,
) -> Result<TrainOutcome> {
    let optimizer = GradientDescent::new(config.learning_rate);
    let mut costs = Vec::new();

    for i in 0..config.num_iterations {
        let (a2, cache) = forward_propagation(x, &parameters)?;
        let cost = compute_cost(&a2, y)?;
        let grads = backward_propagation(&parameters, &cache, x, y)?;
        parameters = optimizer.update(&parameters, &grads)?;

        if config.print_cost && due(i, config.print_every) {
            info!("Cost after iteration {}: {:.6}", i, cost);
        }
        if due(i, config.record_every) {
            debug!("recorded cost {:.6} at iteration {}", cost, i);
            costs.push(CostRecord { iteration: i, cost });
        }
    }

    Ok(TrainOutcome { parameters, costs })
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn due(iteration: usize, every: usize) -> bool {
    every != 0 && iteration % every == 0
}
