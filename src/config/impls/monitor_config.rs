use crate::config::structs::monitor_config::MonitorConfig;
use crate::ssl::structs::monitor_settings::MonitorSettings;
use std::time::Duration;

impl MonitorConfig {
    pub(crate) fn default_debounce_ms() -> u64 {
        100
    }

    pub fn settings(&self) -> MonitorSettings {
        MonitorSettings {
            debounce: Duration::from_millis(self.debounce_ms),
            failure_alert_threshold: self.failure_alert_threshold,
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            debounce_ms: Self::default_debounce_ms(),
            failure_alert_threshold: 0,
        }
    }
}
