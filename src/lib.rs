//! hostpulse: single-shot host health monitor.
//!
//! One invocation samples host resource metrics and one service's run-state,
//! evaluates fixed thresholds, prints a report, restarts the service if it is
//! down, and writes one summary line to the system log. Designed to be driven
//! by an external scheduler (cron, systemd timer); holds no state between runs.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
