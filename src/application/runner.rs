use crate::domain::entities::finding::Finding;
use crate::domain::entities::sample::HealthSample;
use crate::domain::ports::collector::HealthCollector;
use crate::domain::ports::log_sink::LogSink;
use crate::domain::ports::service_manager::ServiceManager;
use crate::domain::rules::Evaluator;
use crate::domain::value_objects::thresholds::ThresholdSet;
use crate::presentation::report;

/// Output mode for the stdout report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Result of a single health-check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub findings: usize,
    pub remediation_attempted: bool,
    pub log_written: bool,
}

/// Orchestrates one check cycle: collect, evaluate, report, remediate, log.
///
/// Never fails: every error along the way is downgraded to a logged warning
/// at the point of occurrence, so the monitor itself cannot crash and the
/// process always exits 0. Remediation success is deliberately not verified;
/// the next scheduled invocation observes the outcome.
pub struct HealthCheckRunner<'a> {
    collector: &'a dyn HealthCollector,
    evaluator: &'a Evaluator,
    thresholds: &'a ThresholdSet,
    services: &'a dyn ServiceManager,
    log_sink: &'a dyn LogSink,
    service_unit: &'a str,
}

impl<'a> HealthCheckRunner<'a> {
    #[must_use]
    pub fn new(
        collector: &'a dyn HealthCollector,
        evaluator: &'a Evaluator,
        thresholds: &'a ThresholdSet,
        services: &'a dyn ServiceManager,
        log_sink: &'a dyn LogSink,
        service_unit: &'a str,
    ) -> Self {
        Self {
            collector,
            evaluator,
            thresholds,
            services,
            log_sink,
            service_unit,
        }
    }

    /// Runs one full cycle and returns what happened.
    ///
    /// Stdout output is completed before the log sink is touched, so an
    /// operator watching the console is never blocked by a logging failure.
    pub fn run_once(&self, format: OutputFormat) -> RunSummary {
        let sample = self.collector.collect();
        let findings = self.evaluator.evaluate(&sample, self.thresholds);

        match format {
            OutputFormat::Text => {
                report::print_report(&sample);
                report::print_findings(&findings, self.service_unit);
            }
            OutputFormat::Json => print_json(&sample, &findings),
        }

        if findings.is_empty() {
            tracing::debug!("system healthy, no findings");
        } else {
            tracing::warn!("{} finding(s) detected", findings.len());
        }

        let remediation_attempted = self.remediate_if_needed(&findings);

        let log_written = match self.log_sink.write_line(&report::summary_line(&sample)) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("summary log write failed: {e}");
                false
            }
        };

        RunSummary {
            findings: findings.len(),
            remediation_attempted,
            log_written,
        }
    }

    /// Issues exactly one start request iff a `ServiceDown` finding is
    /// present. One-shot and best-effort: no retry, no verification.
    fn remediate_if_needed(&self, findings: &[Finding]) -> bool {
        if !findings.iter().any(|f| matches!(f, Finding::ServiceDown)) {
            return false;
        }

        tracing::warn!("service {} is down, requesting start", self.service_unit);
        if let Err(e) = self.services.start(self.service_unit) {
            tracing::warn!("remediation failed: {e}");
        }
        true
    }
}

fn print_json(sample: &HealthSample, findings: &[Finding]) {
    let value = serde_json::json!({
        "sample": sample,
        "findings": findings,
    });
    match serde_json::to_string_pretty(&value) {
        Ok(output) => println!("{output}"),
        Err(e) => tracing::warn!("json serialization failed: {e}"),
    }
}
