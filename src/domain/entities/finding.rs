use serde::{Deserialize, Serialize};

use crate::domain::value_objects::severity::Severity;

/// A single threshold breach or service-down condition produced by evaluating
/// a `HealthSample`. Resource variants carry the offending value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Finding {
    CpuHigh(f64),
    MemoryHigh(f64),
    DiskHigh(f64),
    ServiceDown,
}

impl Finding {
    /// Resource breaches warn; a down service is critical.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::CpuHigh(_) | Self::MemoryHigh(_) | Self::DiskHigh(_) => Severity::Warning,
            Self::ServiceDown => Severity::Critical,
        }
    }

    /// Name of the rule that produced this finding.
    #[must_use]
    pub const fn rule(&self) -> &'static str {
        match self {
            Self::CpuHigh(_) => "cpu_high",
            Self::MemoryHigh(_) => "memory_high",
            Self::DiskHigh(_) => "disk_high",
            Self::ServiceDown => "service_down",
        }
    }
}
