use crate::domain::entities::finding::Finding;
use crate::domain::entities::sample::HealthSample;
use crate::domain::value_objects::thresholds::ThresholdSet;

use super::Rule;

pub struct MemoryHighRule;

impl Rule for MemoryHighRule {
    fn name(&self) -> &'static str {
        "memory_high"
    }

    fn evaluate(&self, sample: &HealthSample, thresholds: &ThresholdSet) -> Option<Finding> {
        sample
            .memory_percent
            .filter(|value| *value > thresholds.memory_percent)
            .map(Finding::MemoryHigh)
    }
}
