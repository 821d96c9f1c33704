use std::fs;
use std::path::PathBuf;

use shallow_net::data::{normalize_splits, NormalizationMode};
use shallow_net::{accuracy, nn_model, predict, Dataset, Matrix, TrainConfig, TrainReport};

/// Four points split by the sign of the first coordinate.
fn four_points() -> (Matrix, Matrix) {
    let x = Matrix::from_data(vec![
        vec![-2.0, -1.0, 1.0, 2.0],
        vec![1.0, -1.0, 1.0, -1.0],
    ]).unwrap();
    let y = Matrix::row_vector(vec![0.0, 0.0, 1.0, 1.0]);
    (x, y)
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("shallow-net-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn separable_points_are_learned() {
    let (x, y) = four_points();
    let config = TrainConfig::new(2000).with_learning_rate(1.2).with_seed(2024);
    let outcome = nn_model(&x, &y, &config).unwrap();

    let acc = accuracy(&predict(&outcome.parameters, &x).unwrap(), &y).unwrap();
    assert!(acc > 90.0, "training accuracy {acc}%");

    let costs = outcome.cost_values();
    assert_eq!(costs.len(), 40);
    assert!(costs[39] < costs[0]);
}

#[test]
fn diverging_learning_rate_still_runs_to_completion() {
    let (x, y) = four_points();
    let config = TrainConfig::new(300).with_learning_rate(500.0).with_seed(7);
    let outcome = nn_model(&x, &y, &config).unwrap();
    assert_eq!(outcome.costs.len(), 6);
}

#[test]
fn files_to_accuracy_pipeline() {
    let dir = scratch_dir("pipeline");
    let train_data = dir.join("traindata.csv");
    let train_labels = dir.join("trainlabel.csv");
    let test_data = dir.join("testdata.csv");
    let test_labels = dir.join("testlabel.csv");

    fs::write(&train_data, "10,5\n12,4\n30,6\n32,5\n11,6\n31,4\n").unwrap();
    fs::write(&train_labels, "1\n1\n2\n2\n1\n2\n").unwrap();
    fs::write(&test_data, "9,5\n33,5\n").unwrap();
    fs::write(&test_labels, "1\n2\n").unwrap();

    let train = Dataset::load(&train_data, &train_labels, 1.0).unwrap();
    let test = Dataset::load(&test_data, &test_labels, 1.0).unwrap();
    assert_eq!(train.num_features(), 2);
    assert_eq!(train.num_examples(), 6);
    assert_eq!(train.labels, Matrix::row_vector(vec![0.0, 0.0, 1.0, 1.0, 0.0, 1.0]));

    let (train_x, test_x) =
        normalize_splits(&train.features, Some(&test.features), NormalizationMode::TrainStatistics).unwrap();
    let test_x = test_x.unwrap();

    let outcome = nn_model(&train_x, &train.labels, &TrainConfig::new(1000).with_seed(5)).unwrap();
    let train_acc = accuracy(&predict(&outcome.parameters, &train_x).unwrap(), &train.labels).unwrap();
    let test_acc = accuracy(&predict(&outcome.parameters, &test_x).unwrap(), &test.labels).unwrap();
    assert_eq!(train_acc, 100.0);
    assert_eq!(test_acc, 100.0);

    let report = TrainReport {
        sizes: outcome.parameters.sizes(),
        learning_rate: 1.2,
        num_iterations: 1000,
        normalization: NormalizationMode::TrainStatistics,
        costs: outcome.costs.clone(),
        train_accuracy: train_acc,
        test_accuracy: Some(test_acc),
    };
    let report_path = dir.join("report.json");
    report.save_json(report_path.to_str().unwrap()).unwrap();
    let loaded = TrainReport::load_json(report_path.to_str().unwrap()).unwrap();
    assert_eq!(loaded.costs.len(), 20);
    assert_eq!(loaded.test_accuracy, Some(100.0));

    fs::remove_dir_all(&dir).ok();
}
