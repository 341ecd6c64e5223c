use clap::Parser;
use std::path::PathBuf;

/// hostpulse: single-shot host health monitor
///
/// Samples CPU, memory, disk and load, checks one service's run-state,
/// prints a report, restarts the service if it is down, and writes one
/// summary line to the system log. Always exits 0; meant to be invoked
/// periodically by cron or a systemd timer.
#[derive(Parser, Debug)]
#[command(name = "hostpulse")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Path to custom config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// CPU usage percentage above which to warn
    #[arg(long)]
    pub cpu_threshold: Option<f64>,

    /// Memory usage percentage above which to warn
    #[arg(long)]
    pub memory_threshold: Option<f64>,

    /// Disk usage percentage above which to warn
    #[arg(long)]
    pub disk_threshold: Option<f64>,

    /// Service unit to watch and restart when down
    #[arg(long)]
    pub service: Option<String>,

    /// Output the sample and findings as JSON instead of the report block
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
