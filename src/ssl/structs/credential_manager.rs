use crate::ssl::enums::manager_state::ManagerState;
use crate::ssl::structs::credential_cell::CredentialCell;
use crate::ssl::structs::file_change_monitor::FileChangeMonitor;
use crate::ssl::structs::manager_settings::ManagerSettings;
use crate::ssl::structs::trust_pool::TrustPool;
use arc_swap::ArcSwap;
use parking_lot::{Mutex, RwLock};
use rustls::crypto::CryptoProvider;
use std::sync::Arc;

/// Owns the trust pool, the credential cell and the file monitor, and hands
/// out server and client TLS configurations built from them.
///
/// Each credential source gets its own cell. Configurations already handed
/// out stay bound to the cell they were built from, so only the monitor's
/// rotation of the same files reaches them.
pub struct CredentialManager {
    pub(crate) provider: Arc<CryptoProvider>,
    pub(crate) trust_pool: TrustPool,
    pub(crate) cell: ArcSwap<CredentialCell>,
    pub(crate) settings: RwLock<ManagerSettings>,
    pub(crate) monitor: Mutex<Option<FileChangeMonitor>>,
    pub(crate) state: Mutex<ManagerState>,
}
