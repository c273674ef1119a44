use crate::ssl::structs::monitor_settings::MonitorSettings;
use std::time::Duration;

impl MonitorSettings {
    pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            debounce: Self::DEFAULT_DEBOUNCE,
            failure_alert_threshold: 0,
        }
    }
}
