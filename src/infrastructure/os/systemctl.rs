use std::process::Command;

use crate::domain::entities::sample::ServiceState;
use crate::domain::ports::service_manager::{ServiceError, ServiceManager};

/// Service manager backed by the `systemctl` binary.
pub struct SystemctlManager;

impl SystemctlManager {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for SystemctlManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceManager for SystemctlManager {
    fn query_state(&self, unit: &str) -> Result<ServiceState, ServiceError> {
        let output = Command::new("systemctl")
            .args(["is-active", unit])
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ServiceError::Unavailable("systemctl not found".to_string())
                } else {
                    ServiceError::QueryFailed {
                        unit: unit.to_string(),
                        reason: e.to_string(),
                    }
                }
            })?;

        // `is-active` exits non-zero for inactive/failed units but still
        // prints the state on stdout, so the exit status is ignored here.
        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(ServiceState::from_label(&stdout))
    }

    fn start(&self, unit: &str) -> Result<(), ServiceError> {
        let output = Command::new("systemctl")
            .args(["start", unit])
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ServiceError::Unavailable("systemctl not found".to_string())
                } else {
                    ServiceError::StartFailed {
                        unit: unit.to_string(),
                        reason: e.to_string(),
                    }
                }
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(ServiceError::StartFailed {
                unit: unit.to_string(),
                reason: format!("systemctl exited with {}: {}", output.status, stderr.trim()),
            })
        }
    }
}
