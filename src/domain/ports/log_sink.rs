use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogSinkError {
    #[error("log sink unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write log line: {0}")]
    WriteFailed(String),
}

/// Write-only sink for the single machine-readable summary line per run.
pub trait LogSink: Send + Sync {
    /// Write one free-text line to the sink.
    ///
    /// # Errors
    ///
    /// Returns `LogSinkError` if the sink is unavailable or the write fails.
    /// Callers downgrade both cases to a logged warning: the stdout report
    /// has already been produced by the time the sink is touched.
    fn write_line(&self, line: &str) -> Result<(), LogSinkError>;
}
