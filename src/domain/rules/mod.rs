pub mod cpu;
pub mod disk;
pub mod memory;
pub mod service;

use crate::domain::entities::finding::Finding;
use crate::domain::entities::sample::HealthSample;
use crate::domain::value_objects::thresholds::ThresholdSet;

/// A deterministic rule that inspects one aspect of a health sample.
/// Rules are pure functions: sample + thresholds in, at most one finding out.
/// No I/O.
pub trait Rule: Send + Sync {
    /// Returns the unique name of this rule
    fn name(&self) -> &'static str;

    /// Evaluates the rule against a sample using the given thresholds
    fn evaluate(&self, sample: &HealthSample, thresholds: &ThresholdSet) -> Option<Finding>;
}

/// Returns the default rules in report order: cpu, memory, disk, service.
#[must_use]
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(cpu::CpuHighRule),
        Box::new(memory::MemoryHighRule),
        Box::new(disk::DiskHighRule),
        Box::new(service::ServiceDownRule),
    ]
}

/// Runs a fixed list of rules against a sample, preserving rule order.
pub struct Evaluator {
    rules: Vec<Box<dyn Rule>>,
}

impl Evaluator {
    #[must_use]
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Evaluates every rule, collecting findings in rule order.
    #[must_use]
    pub fn evaluate(&self, sample: &HealthSample, thresholds: &ThresholdSet) -> Vec<Finding> {
        self.rules
            .iter()
            .filter_map(|rule| rule.evaluate(sample, thresholds))
            .collect()
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::sample::ServiceState;
    use chrono::Utc;

    fn make_sample() -> HealthSample {
        HealthSample {
            timestamp: Utc::now(),
            hostname: "host".to_string(),
            cpu_percent: Some(10.0),
            memory_percent: Some(20.0),
            disk_percent: Some(30.0),
            load_average: Some(0.5),
            service_state: ServiceState::Active,
        }
    }

    struct NoopRule;
    impl Rule for NoopRule {
        fn name(&self) -> &'static str {
            "noop"
        }
        fn evaluate(&self, _: &HealthSample, _: &ThresholdSet) -> Option<Finding> {
            None
        }
    }

    struct FixedFindingRule {
        finding: Finding,
    }
    impl Rule for FixedFindingRule {
        fn name(&self) -> &'static str {
            "fixed"
        }
        fn evaluate(&self, _: &HealthSample, _: &ThresholdSet) -> Option<Finding> {
            Some(self.finding.clone())
        }
    }

    #[test]
    fn evaluator_with_no_rules_returns_empty() {
        let evaluator = Evaluator::new(vec![]);
        let findings = evaluator.evaluate(&make_sample(), &ThresholdSet::default());
        assert!(findings.is_empty());
    }

    #[test]
    fn evaluator_with_noop_rule_returns_empty() {
        let noop = NoopRule;
        assert_eq!(noop.name(), "noop");
        let evaluator = Evaluator::new(vec![Box::new(noop)]);
        let findings = evaluator.evaluate(&make_sample(), &ThresholdSet::default());
        assert!(findings.is_empty());
    }

    #[test]
    fn evaluator_preserves_rule_order() {
        let evaluator = Evaluator::new(vec![
            Box::new(FixedFindingRule {
                finding: Finding::MemoryHigh(90.0),
            }),
            Box::new(FixedFindingRule {
                finding: Finding::ServiceDown,
            }),
            Box::new(FixedFindingRule {
                finding: Finding::CpuHigh(95.0),
            }),
        ]);
        let findings = evaluator.evaluate(&make_sample(), &ThresholdSet::default());
        assert_eq!(
            findings,
            vec![
                Finding::MemoryHigh(90.0),
                Finding::ServiceDown,
                Finding::CpuHigh(95.0),
            ]
        );
    }

    #[test]
    fn default_rules_returns_all_rules_in_report_order() {
        let rules = default_rules();
        let names: Vec<&str> = rules.iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            vec!["cpu_high", "memory_high", "disk_high", "service_down"]
        );
    }

    #[test]
    fn default_rules_produce_no_findings_on_healthy_sample() {
        let evaluator = Evaluator::default();
        let findings = evaluator.evaluate(&make_sample(), &ThresholdSet::default());
        assert!(findings.is_empty());
    }

    #[test]
    fn breach_sample_yields_findings_in_report_order() {
        let evaluator = Evaluator::default();
        let sample = HealthSample {
            cpu_percent: Some(95.0),
            memory_percent: Some(90.0),
            disk_percent: Some(50.0),
            service_state: ServiceState::Failed,
            ..make_sample()
        };
        let findings = evaluator.evaluate(&sample, &ThresholdSet::default());
        assert_eq!(
            findings,
            vec![
                Finding::CpuHigh(95.0),
                Finding::MemoryHigh(90.0),
                Finding::ServiceDown,
            ]
        );
    }
}
