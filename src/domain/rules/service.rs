use crate::domain::entities::finding::Finding;
use crate::domain::entities::sample::HealthSample;
use crate::domain::value_objects::thresholds::ThresholdSet;

use super::Rule;

/// Flags the monitored service whenever it is not reported `active`.
///
/// `Unknown` counts as down: when the service manager cannot be queried we
/// fail toward alerting, not toward silence.
pub struct ServiceDownRule;

impl Rule for ServiceDownRule {
    fn name(&self) -> &'static str {
        "service_down"
    }

    fn evaluate(&self, sample: &HealthSample, _thresholds: &ThresholdSet) -> Option<Finding> {
        if sample.service_state.is_active() {
            None
        } else {
            Some(Finding::ServiceDown)
        }
    }
}
