use crate::ssl::structs::credential_cell::CredentialCell;
use crate::ssl::structs::monitor_settings::MonitorSettings;
use crate::ssl::structs::monitor_stats::MonitorCounters;
use std::path::PathBuf;
use std::sync::Arc;

/// State moved onto the monitor thread.
pub(crate) struct ReloadWorker {
    pub(crate) targets: Vec<PathBuf>,
    pub(crate) cert_path: PathBuf,
    pub(crate) key_path: PathBuf,
    pub(crate) cell: Arc<CredentialCell>,
    pub(crate) settings: MonitorSettings,
    pub(crate) counters: Arc<MonitorCounters>,
}
