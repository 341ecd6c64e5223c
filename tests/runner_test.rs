#![allow(clippy::expect_used)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use chrono::Utc;
use hostpulse::application::runner::{HealthCheckRunner, OutputFormat};
use hostpulse::domain::entities::finding::Finding;
use hostpulse::domain::entities::sample::{HealthSample, ServiceState};
use hostpulse::domain::ports::collector::HealthCollector;
use hostpulse::domain::ports::log_sink::{LogSink, LogSinkError};
use hostpulse::domain::ports::service_manager::{ServiceError, ServiceManager};
use hostpulse::domain::rules::Evaluator;
use hostpulse::domain::value_objects::severity::Severity;
use hostpulse::domain::value_objects::thresholds::ThresholdSet;
use hostpulse::presentation::report;

struct FixedCollector {
    sample: HealthSample,
}

impl HealthCollector for FixedCollector {
    fn collect(&self) -> HealthSample {
        self.sample.clone()
    }
}

struct CountingServiceManager {
    starts: AtomicUsize,
}

impl CountingServiceManager {
    fn new() -> Self {
        Self {
            starts: AtomicUsize::new(0),
        }
    }

    fn start_calls(&self) -> usize {
        self.starts.load(Ordering::SeqCst)
    }
}

impl ServiceManager for CountingServiceManager {
    fn query_state(&self, _unit: &str) -> Result<ServiceState, ServiceError> {
        Ok(ServiceState::Active)
    }

    fn start(&self, _unit: &str) -> Result<(), ServiceError> {
        self.starts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct RecordingLogSink {
    lines: Mutex<Vec<String>>,
}

impl RecordingLogSink {
    fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    fn recorded(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl LogSink for RecordingLogSink {
    fn write_line(&self, line: &str) -> Result<(), LogSinkError> {
        self.lines
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(line.to_string());
        Ok(())
    }
}

fn make_sample(
    cpu: f64,
    memory: f64,
    disk: f64,
    load: f64,
    service_state: ServiceState,
) -> HealthSample {
    HealthSample {
        timestamp: Utc::now(),
        hostname: "web01".to_string(),
        cpu_percent: Some(cpu),
        memory_percent: Some(memory),
        disk_percent: Some(disk),
        load_average: Some(load),
        service_state,
    }
}

#[test]
fn healthy_host_produces_no_findings_and_no_remediation() {
    let sample = make_sample(45.0, 60.0, 70.0, 0.5, ServiceState::Active);
    let evaluator = Evaluator::default();
    let thresholds = ThresholdSet::default();

    let findings = evaluator.evaluate(&sample, &thresholds);
    assert!(findings.is_empty());
    assert!(report::render_warnings(&findings, "nginx").is_empty());

    let collector = FixedCollector { sample };
    let services = CountingServiceManager::new();
    let sink = RecordingLogSink::new();
    let runner =
        HealthCheckRunner::new(&collector, &evaluator, &thresholds, &services, &sink, "nginx");

    let summary = runner.run_once(OutputFormat::Text);

    assert_eq!(summary.findings, 0);
    assert!(!summary.remediation_attempted);
    assert_eq!(services.start_calls(), 0);
    assert_eq!(
        sink.recorded(),
        vec!["CPU: 45.0% | MEM: 60.0% | DISK: 70.0% | SERVICE: active"]
    );
}

#[test]
fn breached_host_warns_and_restarts_the_service() {
    let sample = make_sample(95.0, 90.0, 50.0, 2.1, ServiceState::Failed);
    let evaluator = Evaluator::default();
    let thresholds = ThresholdSet::default();

    let findings = evaluator.evaluate(&sample, &thresholds);
    assert_eq!(
        findings,
        vec![
            Finding::CpuHigh(95.0),
            Finding::MemoryHigh(90.0),
            Finding::ServiceDown,
        ]
    );

    let lines = report::render_warnings(&findings, "nginx");
    let warnings = lines.iter().filter(|l| l.starts_with("WARNING:")).count();
    let criticals = lines.iter().filter(|l| l.starts_with("CRITICAL:")).count();
    assert_eq!(warnings, 2);
    assert_eq!(criticals, 1);

    let collector = FixedCollector { sample };
    let services = CountingServiceManager::new();
    let sink = RecordingLogSink::new();
    let runner =
        HealthCheckRunner::new(&collector, &evaluator, &thresholds, &services, &sink, "nginx");

    let summary = runner.run_once(OutputFormat::Text);

    assert_eq!(summary.findings, 3);
    assert!(summary.remediation_attempted);
    assert_eq!(services.start_calls(), 1);
    assert_eq!(
        sink.recorded(),
        vec!["CPU: 95.0% | MEM: 90.0% | DISK: 50.0% | SERVICE: failed"]
    );
}

#[test]
fn threshold_boundary_is_strict_greater_than() {
    let evaluator = Evaluator::default();
    let thresholds = ThresholdSet::default();

    let at_threshold = make_sample(80.0, 80.0, 85.0, 0.5, ServiceState::Active);
    assert!(evaluator.evaluate(&at_threshold, &thresholds).is_empty());

    let one_above = make_sample(81.0, 81.0, 86.0, 0.5, ServiceState::Active);
    assert_eq!(
        evaluator.evaluate(&one_above, &thresholds),
        vec![
            Finding::CpuHigh(81.0),
            Finding::MemoryHigh(81.0),
            Finding::DiskHigh(86.0),
        ]
    );
}

#[test]
fn every_non_active_state_counts_as_down() {
    let evaluator = Evaluator::default();
    let thresholds = ThresholdSet::default();

    for state in [
        ServiceState::Inactive,
        ServiceState::Failed,
        ServiceState::Unknown,
    ] {
        let sample = make_sample(10.0, 10.0, 10.0, 0.1, state);
        let findings = evaluator.evaluate(&sample, &thresholds);
        assert_eq!(findings, vec![Finding::ServiceDown], "state: {state}");
        assert_eq!(findings[0].severity(), Severity::Critical);
    }
}

#[test]
fn unknown_metrics_still_produce_a_full_run() {
    // Disk unreadable: the field is unknown, the run completes, the sink
    // records the degraded summary line.
    let sample = HealthSample {
        disk_percent: None,
        ..make_sample(45.0, 60.0, 0.0, 0.5, ServiceState::Active)
    };
    let evaluator = Evaluator::default();
    let thresholds = ThresholdSet::default();

    let rendered = report::render_report(&sample);
    assert!(rendered.contains("Disk:     unknown"));
    assert!(rendered.contains("CPU:      45.0%"));

    let collector = FixedCollector { sample };
    let services = CountingServiceManager::new();
    let sink = RecordingLogSink::new();
    let runner =
        HealthCheckRunner::new(&collector, &evaluator, &thresholds, &services, &sink, "nginx");

    let summary = runner.run_once(OutputFormat::Text);

    assert_eq!(summary.findings, 0);
    assert_eq!(
        sink.recorded(),
        vec!["CPU: 45.0% | MEM: 60.0% | DISK: unknown | SERVICE: active"]
    );
}

#[test]
fn custom_thresholds_change_evaluation_without_touching_globals() {
    let evaluator = Evaluator::default();
    let tight = ThresholdSet {
        cpu_percent: 40.0,
        memory_percent: 50.0,
        disk_percent: 60.0,
    };

    let sample = make_sample(45.0, 60.0, 70.0, 0.5, ServiceState::Active);
    let findings = evaluator.evaluate(&sample, &tight);
    assert_eq!(
        findings,
        vec![
            Finding::CpuHigh(45.0),
            Finding::MemoryHigh(60.0),
            Finding::DiskHigh(70.0),
        ]
    );

    // Same sample against the defaults stays clean.
    assert!(evaluator
        .evaluate(&sample, &ThresholdSet::default())
        .is_empty());
}
