use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorConfig {
    #[serde(default = "MonitorConfig::default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default)]
    pub failure_alert_threshold: u32,
}
