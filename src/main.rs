use clap::Parser;
use tracing_subscriber::EnvFilter;

use hostpulse::application::config::AppConfig;
use hostpulse::application::runner::{HealthCheckRunner, OutputFormat};
use hostpulse::domain::rules::Evaluator;
use hostpulse::domain::value_objects::thresholds::ThresholdSet;
use hostpulse::infrastructure::collectors::SysinfoCollector;
use hostpulse::infrastructure::os::{SyslogSink, SystemctlManager};
use hostpulse::presentation::cli::Cli;

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// A broken config file degrades to defaults: the monitor must run and
/// exit 0 regardless.
fn load_config(cli: &Cli) -> AppConfig {
    let Some(ref path) = cli.config else {
        return AppConfig::default();
    };
    match AppConfig::load_from(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("failed to load config, using defaults: {e:#}");
            AppConfig::default()
        }
    }
}

fn resolve_thresholds(cli: &Cli, config: &AppConfig) -> ThresholdSet {
    let mut thresholds = config.thresholds();
    if let Some(value) = cli.cpu_threshold {
        thresholds.cpu_percent = value;
    }
    if let Some(value) = cli.memory_threshold {
        thresholds.memory_percent = value;
    }
    if let Some(value) = cli.disk_threshold {
        thresholds.disk_percent = value;
    }
    thresholds
}

fn main() {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    let config = load_config(&cli);
    let thresholds = resolve_thresholds(&cli, &config);
    let service = cli
        .service
        .clone()
        .unwrap_or_else(|| config.service.name.clone());

    let services = SystemctlManager::new();
    let collector = SysinfoCollector::new(service.clone(), Box::new(SystemctlManager::new()));
    let evaluator = Evaluator::default();
    let log_sink = SyslogSink::new(config.log.tag.clone());

    let runner = HealthCheckRunner::new(
        &collector,
        &evaluator,
        &thresholds,
        &services,
        &log_sink,
        &service,
    );

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let summary = runner.run_once(format);

    tracing::debug!(
        "run complete: {} finding(s), remediation attempted: {}, log written: {}",
        summary.findings,
        summary.remediation_attempted,
        summary.log_written
    );
    // Exit code is always 0: breaches and internal failures are reported
    // through stdout and the log, never through the exit status.
}
