use serde::{Deserialize, Serialize};

/// Thresholds a `HealthSample` is evaluated against.
///
/// Comparison is strict greater-than everywhere: a metric exactly equal to
/// its threshold does not trigger a finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSet {
    /// CPU usage percentage above which CPU is flagged
    pub cpu_percent: f64,
    /// Memory usage percentage above which memory is flagged
    pub memory_percent: f64,
    /// Root filesystem usage percentage above which disk is flagged
    pub disk_percent: f64,
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self {
            cpu_percent: 80.0,
            memory_percent: 80.0,
            disk_percent: 85.0,
        }
    }
}
