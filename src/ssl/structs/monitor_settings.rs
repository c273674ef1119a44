use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorSettings {
    /// Quiet period that must pass after the last relevant event before reloading.
    pub debounce: Duration,
    /// Consecutive reload failures that trigger an error-level alert; `0` disables it.
    pub failure_alert_threshold: u32,
}
