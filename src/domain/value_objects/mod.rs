pub mod severity;
pub mod thresholds;

pub use severity::Severity;
pub use thresholds::ThresholdSet;
