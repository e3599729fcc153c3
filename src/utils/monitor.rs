use std::sync::Mutex;
use std::time::Instant;
use sysinfo::{Pid, System};

/// Logs process memory and elapsed time per pipeline phase when enabled.
///
/// The system handle is only built for monitored runs; a disabled monitor
/// costs nothing beyond the timestamp.
pub struct SystemMonitor {
    system: Option<Mutex<System>>,
    pid: Option<Pid>,
    start_time: Instant,
}

impl SystemMonitor {
    pub fn new(enabled: bool) -> Self {
        Self {
            system: enabled.then(|| Mutex::new(System::new_all())),
            pid: enabled
                .then(|| sysinfo::get_current_pid().ok())
                .flatten(),
            start_time: Instant::now(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.system.is_some()
    }

    fn memory_mb(&self) -> Option<u64> {
        let pid = self.pid?;
        let mut system = self.system.as_ref()?.lock().ok()?;
        system.refresh_all();
        let process = system.process(pid)?;
        Some(process.memory() / 1024 / 1024)
    }

    pub fn log_phase(&self, phase: &str) {
        if let Some(memory_mb) = self.memory_mb() {
            tracing::info!(
                "{} - memory: {}MB, elapsed: {:?}",
                phase,
                memory_mb,
                self.start_time.elapsed()
            );
        }
    }

    pub fn log_final_stats(&self) {
        if self.is_enabled() {
            tracing::info!("total time: {:?}", self.start_time.elapsed());
        }
    }
}

impl Default for SystemMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}
