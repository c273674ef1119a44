use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CredentialConfig {
    pub cert_path: Option<PathBuf>,
    pub key_path: Option<PathBuf>,
    /// One of `none`, `request`, `require`, `verify`, `requireverify`.
    #[serde(default = "CredentialConfig::default_client_auth")]
    pub client_auth: String,
    #[serde(default)]
    pub insecure_skip_verify: bool,
}
