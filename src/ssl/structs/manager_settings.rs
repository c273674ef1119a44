use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::client_auth_policy::ClientAuthPolicy;
use crate::ssl::structs::certificate_paths::CertificatePaths;
use crate::ssl::structs::credential_cell::CredentialCell;
use crate::ssl::structs::file_change_monitor::FileChangeMonitor;
use crate::ssl::structs::monitor_settings::MonitorSettings;
use std::sync::Arc;

/// Builds and starts the monitor for a set of credential files.
pub(crate) type MonitorStarter = fn(
    &CertificatePaths,
    Arc<CredentialCell>,
    MonitorSettings,
) -> Result<FileChangeMonitor, CertificateError>;

#[derive(Debug, Clone)]
pub(crate) struct ManagerSettings {
    pub(crate) credential_files: Option<CertificatePaths>,
    pub(crate) pending_load: bool,
    /// The next load goes into a fresh cell instead of the current one.
    pub(crate) rebind_cell: bool,
    pub(crate) client_auth: ClientAuthPolicy,
    pub(crate) insecure_skip_verify: bool,
    pub(crate) monitor: MonitorSettings,
    pub(crate) live_reload_disabled: bool,
    pub(crate) start_monitor: MonitorStarter,
}
