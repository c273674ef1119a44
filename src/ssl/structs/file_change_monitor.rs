use crate::ssl::enums::monitor_state::MonitorState;
use crate::ssl::structs::credential_cell::CredentialCell;
use crate::ssl::structs::monitor_settings::MonitorSettings;
use crate::ssl::structs::monitor_stats::MonitorCounters;
use notify::RecommendedWatcher;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::JoinHandle;

/// Watches the directories holding the certificate and key files and
/// republishes the credential when either file changes.
pub struct FileChangeMonitor {
    pub(crate) cert_path: PathBuf,
    pub(crate) key_path: PathBuf,
    pub(crate) cell: Arc<CredentialCell>,
    pub(crate) settings: MonitorSettings,
    pub(crate) state: MonitorState,
    pub(crate) counters: Arc<MonitorCounters>,
    pub(crate) watcher: Option<RecommendedWatcher>,
    pub(crate) shutdown: Option<crossbeam::channel::Sender<()>>,
    pub(crate) worker: Option<JoinHandle<()>>,
}
