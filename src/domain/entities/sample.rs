use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One point-in-time snapshot of host resource metrics and one service's
/// run-state. Built fresh on every run and discarded at process exit.
///
/// Numeric fields are `None` when the underlying OS query failed. The
/// report renders them as the literal `unknown` so an operator can tell
/// "value is fine" from "value could not be read".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthSample {
    pub timestamp: DateTime<Utc>,
    pub hostname: String,
    pub cpu_percent: Option<f64>,
    pub memory_percent: Option<f64>,
    pub disk_percent: Option<f64>,
    pub load_average: Option<f64>,
    pub service_state: ServiceState,
}

/// Run-state of the monitored service as reported by the service manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceState {
    Active,
    Inactive,
    Failed,
    Unknown,
}

impl ServiceState {
    /// Maps a service-manager state label to a closed variant.
    ///
    /// Anything unrecognized ("activating", "deactivating", garbage) maps to
    /// `Unknown`, which the evaluator treats as down.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "active" => Self::Active,
            "inactive" => Self::Inactive,
            "failed" => Self::Failed,
            _ => Self::Unknown,
        }
    }

    /// True only for the `Active` variant.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl std::fmt::Display for ServiceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
            Self::Failed => write!(f, "failed"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}
