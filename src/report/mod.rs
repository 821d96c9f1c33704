pub mod train_report;

pub use train_report::TrainReport;
