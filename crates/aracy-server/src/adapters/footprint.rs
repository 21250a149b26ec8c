//! Process resource sampling via sysinfo.

use sysinfo::{get_current_pid, System, MINIMUM_CPU_UPDATE_INTERVAL};

/// Resident memory and CPU load of this server process
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProcessSample {
    pub memory_mb: f64,
    pub cpu_percent: f32,
}

/// Operating system name, e.g. "Linux" or "Darwin"
pub fn system_name() -> String {
    System::name().unwrap_or_else(|| std::env::consts::OS.to_string())
}

/// Sample the current process. CPU usage needs two refreshes, so this
/// blocks for sysinfo's minimum update interval on the blocking pool.
pub async fn sample_process() -> ProcessSample {
    match tokio::task::spawn_blocking(sample_blocking).await {
        Ok(Some(sample)) => sample,
        Ok(None) => {
            tracing::warn!("⚠️  Current process not visible to sysinfo");
            ProcessSample::default()
        }
        Err(e) => {
            tracing::warn!("⚠️  Process sampling task failed: {}", e);
            ProcessSample::default()
        }
    }
}

fn sample_blocking() -> Option<ProcessSample> {
    let pid = get_current_pid().ok()?;
    let mut system = System::new();

    system.refresh_process(pid);
    std::thread::sleep(MINIMUM_CPU_UPDATE_INTERVAL);
    system.refresh_process(pid);

    let process = system.process(pid)?;
    Some(ProcessSample {
        memory_mb: to_megabytes(process.memory()),
        cpu_percent: process.cpu_usage(),
    })
}

/// Bytes to MB, rounded to two decimals
fn to_megabytes(bytes: u64) -> f64 {
    let mb = bytes as f64 / (1024.0 * 1024.0);
    (mb * 100.0).round() / 100.0
}
