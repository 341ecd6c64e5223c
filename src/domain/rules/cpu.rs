use crate::domain::entities::finding::Finding;
use crate::domain::entities::sample::HealthSample;
use crate::domain::value_objects::thresholds::ThresholdSet;

use super::Rule;

pub struct CpuHighRule;

impl Rule for CpuHighRule {
    fn name(&self) -> &'static str {
        "cpu_high"
    }

    fn evaluate(&self, sample: &HealthSample, thresholds: &ThresholdSet) -> Option<Finding> {
        // Unknown metric produces no finding; the report already shows it.
        sample
            .cpu_percent
            .filter(|value| *value > thresholds.cpu_percent)
            .map(Finding::CpuHigh)
    }
}
