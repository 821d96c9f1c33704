//! Train the single-hidden-layer classifier on delimited files and report accuracy.
//!
//! Usage:
//!   shallow-net --train-data traindata.csv --train-labels trainlabel.csv \
//!               --test-data testdata.csv --test-labels testlabel.csv --report report.json

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use shallow_net::data::{normalize_splits, Dataset, NormalizationMode, DEFAULT_LABEL_THRESHOLD};
use shallow_net::eval::{accuracy, predict};
use shallow_net::network::DEFAULT_HIDDEN_SIZE;
use shallow_net::optim::DEFAULT_LEARNING_RATE;
use shallow_net::{nn_model, LayerSizes, TrainConfig, TrainReport};

#[derive(Parser)]
#[command(name = "shallow-net")]
#[command(about = "Train a one-hidden-layer binary classifier with gradient descent", long_about = None)]
struct Cli {
    /// Training features, one example per line
    #[arg(long)]
    train_data: String,

    /// Training labels, one value per line
    #[arg(long)]
    train_labels: String,

    /// Test features
    #[arg(long, requires = "test_labels")]
    test_data: Option<String>,

    /// Test labels
    #[arg(long, requires = "test_data")]
    test_labels: Option<String>,

    /// Gradient-descent iterations
    #[arg(short, long, default_value_t = 2000)]
    iterations: usize,

    /// Fixed learning rate
    #[arg(short, long, default_value_t = DEFAULT_LEARNING_RATE)]
    learning_rate: f64,

    /// Hidden tanh units
    #[arg(long, default_value_t = DEFAULT_HIDDEN_SIZE)]
    hidden: usize,

    /// Raw labels above this value are the positive class
    #[arg(long, default_value_t = DEFAULT_LABEL_THRESHOLD)]
    label_threshold: f64,

    /// Standardize the test split with its own statistics instead of the training ones
    #[arg(long)]
    per_split_normalization: bool,

    /// Seed for weight initialization
    #[arg(long)]
    seed: Option<u64>,

    /// Write the cost curve and accuracies to this JSON file
    #[arg(long)]
    report: Option<String>,

    /// Only print the accuracy lines
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let train = Dataset::load(&cli.train_data, &cli.train_labels, cli.label_threshold)
        .with_context(|| format!("loading training data from {}", cli.train_data))?;
    info!(
        "Training set: {} features x {} examples",
        train.num_features(),
        train.num_examples()
    );

    let test = match (&cli.test_data, &cli.test_labels) {
        (Some(data), Some(labels)) => Some(
            Dataset::load(data, labels, cli.label_threshold)
                .with_context(|| format!("loading test data from {}", data))?,
        ),
        _ => None,
    };

    let mode = if cli.per_split_normalization {
        NormalizationMode::PerSplit
    } else {
        NormalizationMode::TrainStatistics
    };
    let (train_x, test_x) = normalize_splits(&train.features, test.as_ref().map(|t| &t.features), mode)?;

    let mut config = TrainConfig::new(cli.iterations)
        .with_hidden_size(cli.hidden)
        .with_learning_rate(cli.learning_rate)
        .with_print_cost(!cli.quiet);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let outcome = nn_model(&train_x, &train.labels, &config)?;

    let train_accuracy = accuracy(&predict(&outcome.parameters, &train_x)?, &train.labels)?;
    println!("Accuracy train data: {}%", train_accuracy as u32);

    let test_accuracy = match (&test, &test_x) {
        (Some(test), Some(test_x)) => {
            let acc = accuracy(&predict(&outcome.parameters, test_x)?, &test.labels)?;
            println!("Accuracy test data: {}%", acc as u32);
            Some(acc)
        }
        _ => None,
    };

    if let Some(path) = &cli.report {
        let report = TrainReport {
            sizes: LayerSizes::from_data(&train_x, &train.labels, cli.hidden)?,
            learning_rate: cli.learning_rate,
            num_iterations: cli.iterations,
            normalization: mode,
            costs: outcome.costs,
            train_accuracy,
            test_accuracy,
        };
        report.save_json(path).with_context(|| format!("writing report to {}", path))?;
        info!("Report written to {}", path);
    }

    Ok(())
}
