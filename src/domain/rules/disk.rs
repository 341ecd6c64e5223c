use crate::domain::entities::finding::Finding;
use crate::domain::entities::sample::HealthSample;
use crate::domain::value_objects::thresholds::ThresholdSet;

use super::Rule;

pub struct DiskHighRule;

impl Rule for DiskHighRule {
    fn name(&self) -> &'static str {
        "disk_high"
    }

    fn evaluate(&self, sample: &HealthSample, thresholds: &ThresholdSet) -> Option<Finding> {
        sample
            .disk_percent
            .filter(|value| *value > thresholds.disk_percent)
            .map(Finding::DiskHigh)
    }
}
