use thiserror::Error;

use crate::domain::entities::sample::ServiceState;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("service manager unavailable: {0}")]
    Unavailable(String),
    #[error("failed to query unit {unit}: {reason}")]
    QueryFailed { unit: String, reason: String },
    #[error("failed to start unit {unit}: {reason}")]
    StartFailed { unit: String, reason: String },
}

pub trait ServiceManager: Send + Sync {
    /// Query the current run-state of a named service unit.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if the service manager cannot be reached or
    /// the query fails. Callers monitoring health treat any error as
    /// `ServiceState::Unknown`.
    fn query_state(&self, unit: &str) -> Result<ServiceState, ServiceError>;

    /// Request that the service manager start a named unit.
    ///
    /// One-shot and best-effort: success means the start request was
    /// accepted, not that the unit came up. Start requests are idempotent at
    /// the service-manager level, so overlapping invocations are benign.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if the request could not be issued or was
    /// rejected.
    fn start(&self, unit: &str) -> Result<(), ServiceError>;
}
