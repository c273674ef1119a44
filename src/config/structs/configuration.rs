use crate::config::structs::credential_config::CredentialConfig;
use crate::config::structs::monitor_config::MonitorConfig;
use crate::config::structs::trust_config::TrustConfig;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    #[serde(default = "Configuration::default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub trust: TrustConfig,
    #[serde(default)]
    pub credential: CredentialConfig,
    #[serde(default)]
    pub monitor: MonitorConfig,
}
