use thiserror::Error;

use crate::domain::entities::sample::HealthSample;

/// Failure to read a single metric. Never aborts a collection: the adapter
/// downgrades each failed probe to the unknown sentinel in the sample.
#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("metric unavailable: {0}")]
    MetricUnavailable(String),
    #[error("permission denied: {0}")]
    PermissionDenied(String),
}

pub trait HealthCollector: Send + Sync {
    /// Collect a fully populated health sample.
    ///
    /// Infallible by contract: any field that cannot be read comes back as
    /// `None` (or `ServiceState::Unknown`) instead of an error, so one
    /// broken metric source never loses the rest of the sample.
    fn collect(&self) -> HealthSample;
}
