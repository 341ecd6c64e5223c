use std::process::Command;

use crate::domain::ports::log_sink::{LogSink, LogSinkError};

pub const DEFAULT_TAG: &str = "monitoring";

/// System log sink backed by the `logger` binary. Each line lands in
/// syslog/journald tagged for downstream collectors to filter on.
pub struct SyslogSink {
    tag: String,
}

impl SyslogSink {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}

impl Default for SyslogSink {
    fn default() -> Self {
        Self::new(DEFAULT_TAG)
    }
}

impl LogSink for SyslogSink {
    fn write_line(&self, line: &str) -> Result<(), LogSinkError> {
        let output = Command::new("logger")
            .args(["-t", &self.tag, "--", line])
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    LogSinkError::Unavailable("logger not found".to_string())
                } else {
                    LogSinkError::WriteFailed(e.to_string())
                }
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(LogSinkError::WriteFailed(format!(
                "logger exited with {}: {}",
                output.status,
                stderr.trim()
            )))
        }
    }
}
