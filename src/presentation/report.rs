use std::fmt::Write;

use colored::Colorize;

use crate::domain::entities::finding::Finding;
use crate::domain::entities::sample::HealthSample;
use crate::domain::value_objects::severity::Severity;

const BANNER_WIDTH: usize = 40;

/// Renders an unknown-aware percentage, e.g. `45.0%` or `unknown`.
fn fmt_percent(value: Option<f64>) -> String {
    value.map_or_else(|| "unknown".to_string(), |v| format!("{v:.1}%"))
}

fn fmt_load(value: Option<f64>) -> String {
    value.map_or_else(|| "unknown".to_string(), |v| format!("{v:.2}"))
}

/// Renders the fixed-format human-readable report block.
///
/// Pure formatting, no decision logic: calling it twice on the same sample
/// produces byte-identical output.
#[must_use]
pub fn render_report(sample: &HealthSample) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let mut out = String::new();
    let _ = writeln!(out, "{banner}");
    let _ = writeln!(out, " Host Health Report");
    let _ = writeln!(out, "{banner}");
    let _ = writeln!(
        out,
        "Time:     {}",
        sample.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(out, "Host:     {}", sample.hostname);
    let _ = writeln!(out, "CPU:      {}", fmt_percent(sample.cpu_percent));
    let _ = writeln!(out, "Memory:   {}", fmt_percent(sample.memory_percent));
    let _ = writeln!(out, "Disk:     {}", fmt_percent(sample.disk_percent));
    let _ = writeln!(out, "Load:     {}", fmt_load(sample.load_average));
    let _ = writeln!(out, "Service:  {}", sample.service_state);
    let _ = write!(out, "{banner}");
    out
}

/// Human message for one finding, without the severity prefix.
fn finding_message(finding: &Finding, service: &str) -> String {
    match finding {
        Finding::CpuHigh(value) => format!("CPU usage is high: {value:.1}%"),
        Finding::MemoryHigh(value) => format!("Memory usage is high: {value:.1}%"),
        Finding::DiskHigh(value) => format!("Disk usage is high: {value:.1}%"),
        Finding::ServiceDown => format!("Service {service} is not running"),
    }
}

/// One line per finding, prefixed `WARNING:` or `CRITICAL:`.
///
/// The prefixes are a stable contract: downstream tooling greps for them.
#[must_use]
pub fn render_warnings(findings: &[Finding], service: &str) -> Vec<String> {
    findings
        .iter()
        .map(|finding| format!("{}: {}", finding.severity(), finding_message(finding, service)))
        .collect()
}

/// The single machine-readable summary line written to the system log.
#[must_use]
pub fn summary_line(sample: &HealthSample) -> String {
    format!(
        "CPU: {} | MEM: {} | DISK: {} | SERVICE: {}",
        fmt_percent(sample.cpu_percent),
        fmt_percent(sample.memory_percent),
        fmt_percent(sample.disk_percent),
        sample.service_state
    )
}

/// Prints the report block to stdout.
pub fn print_report(sample: &HealthSample) {
    println!("{}", render_report(sample));
}

/// Prints one severity-prefixed line per finding, colorizing the prefix on a
/// terminal. Off-tty the output is plain text, so the grep contract holds.
pub fn print_findings(findings: &[Finding], service: &str) {
    for finding in findings {
        let severity = finding.severity();
        let prefix = match severity {
            Severity::Warning => severity.to_string().yellow().bold(),
            Severity::Critical => severity.to_string().red().bold(),
        };
        println!("{prefix}: {}", finding_message(finding, service));
    }
}
