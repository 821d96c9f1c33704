pub mod loader;
pub mod normalize;

pub use loader::{load_features, load_labels, read_matrix, Dataset, DEFAULT_LABEL_THRESHOLD};
pub use normalize::{normalize_splits, NormalizationMode, StandardNormalizer};
