use std::sync::Mutex;

use chrono::{DateTime, Utc};
use sysinfo::{Disks, System};

use crate::domain::entities::sample::{HealthSample, ServiceState};
use crate::domain::ports::collector::{CollectionError, HealthCollector};
use crate::domain::ports::service_manager::{ServiceError, ServiceManager};

/// Returns `(numerator / denominator) * 100.0`, or an error when
/// `denominator` is zero.
#[allow(clippy::cast_precision_loss)]
fn safe_percent(numerator: u64, denominator: u64, what: &str) -> Result<f64, CollectionError> {
    if denominator > 0 {
        Ok((numerator as f64 / denominator as f64) * 100.0)
    } else {
        Err(CollectionError::MetricUnavailable(format!(
            "{what}: total reported as zero"
        )))
    }
}

/// Assembles a sample from individual probe results, downgrading each failed
/// probe to its unknown sentinel. A broken metric source costs one field,
/// never the run.
fn sample_from_probes(
    timestamp: DateTime<Utc>,
    hostname: String,
    cpu: Result<f64, CollectionError>,
    memory: Result<f64, CollectionError>,
    disk: Result<f64, CollectionError>,
    load: Result<f64, CollectionError>,
    service: Result<ServiceState, ServiceError>,
) -> HealthSample {
    let unknown_on_error = |name: &str, result: Result<f64, CollectionError>| match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("{name} probe failed: {e}");
            None
        }
    };

    let service_state = match service {
        Ok(state) => state,
        Err(e) => {
            tracing::warn!("service state query failed: {e}");
            ServiceState::Unknown
        }
    };

    HealthSample {
        timestamp,
        hostname,
        cpu_percent: unknown_on_error("cpu", cpu),
        memory_percent: unknown_on_error("memory", memory),
        disk_percent: unknown_on_error("disk", disk),
        load_average: unknown_on_error("load average", load),
        service_state,
    }
}

/// Collects host metrics using the `sysinfo` crate and the service run-state
/// through a `ServiceManager`.
///
/// Uses `Mutex<System>` for interior mutability since the `HealthCollector`
/// trait requires `&self` but `sysinfo::System` needs `&mut self` for refresh.
pub struct SysinfoCollector {
    sys: Mutex<System>,
    services: Box<dyn ServiceManager>,
    service_unit: String,
}

impl SysinfoCollector {
    /// Creates a collector watching `service_unit` through `services`.
    #[must_use]
    pub fn new(service_unit: impl Into<String>, services: Box<dyn ServiceManager>) -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();
        Self {
            sys: Mutex::new(sys),
            services,
            service_unit: service_unit.into(),
        }
    }

    fn read_cpu(&self) -> Result<f64, CollectionError> {
        let mut sys = self
            .sys
            .lock()
            .map_err(|e| CollectionError::MetricUnavailable(format!("system lock poisoned: {e}")))?;

        // CPU usage is a delta between two refreshes; a single refresh
        // reports zero on a fresh System.
        sys.refresh_cpu();
        std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
        sys.refresh_cpu();

        let cpus = sys.cpus();
        if cpus.is_empty() {
            return Err(CollectionError::MetricUnavailable(
                "no cpu reported".to_string(),
            ));
        }

        #[allow(clippy::cast_precision_loss)]
        let avg = cpus.iter().map(sysinfo::Cpu::cpu_usage).sum::<f32>() / cpus.len() as f32;
        Ok(f64::from(avg))
    }

    fn read_memory(&self) -> Result<f64, CollectionError> {
        let mut sys = self
            .sys
            .lock()
            .map_err(|e| CollectionError::MetricUnavailable(format!("system lock poisoned: {e}")))?;
        sys.refresh_memory();
        safe_percent(sys.used_memory(), sys.total_memory(), "physical memory")
    }

    fn read_root_disk(&self) -> Result<f64, CollectionError> {
        let disks = Disks::new_with_refreshed_list();
        let root = disks
            .iter()
            .find(|disk| disk.mount_point() == std::path::Path::new("/"))
            .ok_or_else(|| {
                CollectionError::MetricUnavailable("root filesystem not found".to_string())
            })?;

        let total = root.total_space();
        let used = total.saturating_sub(root.available_space());
        safe_percent(used, total, "root filesystem")
    }

    fn read_load_average(&self) -> Result<f64, CollectionError> {
        Ok(System::load_average().one)
    }
}

impl HealthCollector for SysinfoCollector {
    fn collect(&self) -> HealthSample {
        let cpu = self.read_cpu();
        let memory = self.read_memory();
        let disk = self.read_root_disk();
        let load = self.read_load_average();
        let service = self.services.query_state(&self.service_unit);

        let hostname = System::host_name().unwrap_or_else(|| "unknown".to_string());

        sample_from_probes(Utc::now(), hostname, cpu, memory, disk, load, service)
    }
}
