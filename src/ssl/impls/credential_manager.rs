use crate::common::common::check_regular_file;
use crate::config::structs::configuration::Configuration;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::client_auth_policy::ClientAuthPolicy;
use crate::ssl::enums::manager_state::ManagerState;
use crate::ssl::enums::monitor_state::MonitorState;
use crate::ssl::enums::trust_source::TrustSource;
use crate::ssl::ssl::{MIN_PROTOCOL_VERSION, default_crypto_provider};
use crate::ssl::structs::certificate_paths::CertificatePaths;
use crate::ssl::structs::client_tls_config::ClientTlsConfig;
use crate::ssl::structs::credential::Credential;
use crate::ssl::structs::credential_cell::CredentialCell;
use crate::ssl::structs::credential_manager::CredentialManager;
use crate::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
use crate::ssl::structs::file_change_monitor::FileChangeMonitor;
use crate::ssl::structs::manager_settings::ManagerSettings;
use crate::ssl::structs::monitor_settings::MonitorSettings;
use crate::ssl::structs::monitor_stats::MonitorStats;
use crate::ssl::structs::server_tls_config::ServerTlsConfig;
use crate::ssl::structs::trust_pool::TrustPool;
use arc_swap::ArcSwap;
use parking_lot::{Mutex, RwLock};
use rustls::crypto::CryptoProvider;
use std::path::PathBuf;
use std::sync::Arc;

impl std::fmt::Debug for CredentialManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialManager")
            .field("state", &self.state())
            .field("trust_pool", &self.trust_pool)
            .field("credential", &self.cell.load().current())
            .field("watching", &self.is_watching())
            .finish()
    }
}

impl CredentialManager {
    /// Creates a manager in the `Configuring` state, optionally seeding the
    /// trust pool with the bundled Mozilla roots.
    pub fn new(use_system_roots: bool) -> Self {
        Self::with_provider(use_system_roots, default_crypto_provider())
    }

    pub fn with_provider(use_system_roots: bool, provider: Arc<CryptoProvider>) -> Self {
        Self {
            provider,
            trust_pool: TrustPool::new(use_system_roots),
            cell: ArcSwap::from_pointee(CredentialCell::new()),
            settings: RwLock::new(ManagerSettings {
                credential_files: None,
                pending_load: false,
                rebind_cell: false,
                client_auth: ClientAuthPolicy::default(),
                insecure_skip_verify: false,
                monitor: MonitorSettings::default(),
                live_reload_disabled: false,
                start_monitor: FileChangeMonitor::spawn,
            }),
            monitor: Mutex::new(None),
            state: Mutex::new(ManagerState::Configuring),
        }
    }

    /// Builds a manager from a validated configuration: trust files, then
    /// trust directories, then the credential section.
    pub fn from_configuration(config: &Configuration) -> Result<Self, CertificateError> {
        config.validate()?;
        let manager = Self::new(config.trust.use_system_roots);
        let sources = config
            .trust
            .files
            .iter()
            .cloned()
            .map(TrustSource::File)
            .chain(config.trust.directories.iter().cloned().map(TrustSource::Directory));
        manager.configure_trust(sources)?;
        manager.set_monitor_settings(config.monitor.settings());
        manager.set_client_auth_policy(config.credential.client_auth.parse()?);
        manager.set_insecure_skip_verify(config.credential.insecure_skip_verify);
        if let (Some(cert_path), Some(key_path)) =
            (&config.credential.cert_path, &config.credential.key_path)
        {
            manager.set_credential_files(cert_path, key_path)?;
        }
        Ok(manager)
    }

    pub fn state(&self) -> ManagerState {
        *self.state.lock()
    }

    fn ensure_open(&self) -> Result<(), CertificateError> {
        if self.state() == ManagerState::Closed {
            return Err(CertificateError::Configuration(
                "credential manager is closed".to_string(),
            ));
        }
        Ok(())
    }

    fn mark_active(&self) {
        let mut state = self.state.lock();
        if *state == ManagerState::Configuring {
            *state = ManagerState::Active;
            log::info!("[MANAGER] Credential manager is active");
        }
    }

    /// Feeds `sources` to the trust pool in order; the first failure aborts.
    pub fn configure_trust<I>(&self, sources: I) -> Result<(), CertificateError>
    where
        I: IntoIterator<Item = TrustSource>,
    {
        self.ensure_open()?;
        for (index, source) in sources.into_iter().enumerate() {
            log::debug!("[TRUST] Loading {}", source);
            match &source {
                TrustSource::Bytes(pem) => self
                    .trust_pool
                    .add_pem(pem, &format!("trust source #{} (in-memory PEM)", index))?,
                TrustSource::File(path) => self.trust_pool.add_from_file(path)?,
                TrustSource::Directory(path) => self.trust_pool.add_from_directory(path)?,
            }
        }
        log::info!("[TRUST] Trust pool holds {} anchor(s)", self.trust_pool.len());
        Ok(())
    }

    /// Stores the credential file paths after checking both are regular
    /// files. Loading happens on the next configuration request.
    pub fn set_credential_files(
        &self,
        cert_path: impl Into<PathBuf>,
        key_path: impl Into<PathBuf>,
    ) -> Result<(), CertificateError> {
        self.ensure_open()?;
        let paths = CertificatePaths {
            cert_path: cert_path.into(),
            key_path: key_path.into(),
        };
        check_regular_file(&paths.cert_path)?;
        check_regular_file(&paths.key_path)?;

        let changed = {
            let mut settings = self.settings.write();
            let changed = settings.credential_files.as_ref() != Some(&paths);
            settings.credential_files = Some(paths.clone());
            settings.pending_load = true;
            settings.rebind_cell |= changed;
            settings.live_reload_disabled = false;
            changed
        };
        if changed {
            self.retire_monitor();
        }
        log::info!(
            "[CREDENTIAL] Using {} and {}",
            paths.cert_path.display(),
            paths.key_path.display()
        );
        Ok(())
    }

    /// Loads and publishes an in-memory credential. Any file-based source and
    /// its monitor are dropped.
    pub fn set_credential_bytes(&self, cert_pem: &[u8], key_pem: &[u8]) -> Result<(), CertificateError> {
        self.ensure_open()?;
        let credential = Credential::from_pem(cert_pem, key_pem)?;
        {
            let mut settings = self.settings.write();
            settings.credential_files = None;
            settings.pending_load = false;
            settings.rebind_cell = false;
        }
        self.retire_monitor();
        let cell = CredentialCell::new();
        cell.publish(credential);
        self.cell.store(Arc::new(cell));
        log::info!("[CREDENTIAL] Published in-memory credential");
        Ok(())
    }

    /// Applies to configurations produced after this call.
    pub fn set_client_auth_policy(&self, policy: ClientAuthPolicy) {
        self.settings.write().client_auth = policy;
        log::debug!("[MANAGER] Client auth policy set to {}", policy);
    }

    pub fn client_auth_policy(&self) -> ClientAuthPolicy {
        self.settings.read().client_auth
    }

    /// Makes produced client configurations accept any server certificate.
    pub fn set_insecure_skip_verify(&self, enabled: bool) {
        self.settings.write().insecure_skip_verify = enabled;
        if enabled {
            log::warn!("[MANAGER] Server certificate verification disabled for client configurations");
        }
    }

    /// Applies to monitors started after this call.
    pub fn set_monitor_settings(&self, monitor: MonitorSettings) {
        self.settings.write().monitor = monitor;
    }

    /// Loads the configured files when they have not been loaded yet (or were
    /// changed since), returning the paths in use.
    fn load_pending(&self) -> Result<Option<CertificatePaths>, CertificateError> {
        let (paths, pending, rebind) = {
            let settings = self.settings.read();
            (
                settings.credential_files.clone(),
                settings.pending_load,
                settings.rebind_cell,
            )
        };
        let Some(paths) = paths else {
            return Ok(None);
        };
        if pending || rebind || self.cell.load().is_empty() {
            let credential = Credential::load_from_files(&paths.cert_path, &paths.key_path)?;
            let mut settings = self.settings.write();
            let unchanged = settings.credential_files.as_ref() == Some(&paths);
            if unchanged && settings.rebind_cell {
                let cell = CredentialCell::new();
                cell.publish(credential);
                self.cell.store(Arc::new(cell));
            } else {
                self.cell.load().publish(credential);
            }
            if unchanged {
                settings.pending_load = false;
                settings.rebind_cell = false;
            }
            log::info!(
                "[CREDENTIAL] Loaded credential from {} and {}",
                paths.cert_path.display(),
                paths.key_path.display()
            );
        }
        Ok(Some(paths))
    }

    /// Produces a server configuration from the current credential, starting
    /// the file monitor on first use when credentials come from disk.
    ///
    /// # Panics
    ///
    /// When neither `set_credential_files` nor `set_credential_bytes` was
    /// ever called.
    pub fn server_config(&self) -> Result<ServerTlsConfig, CertificateError> {
        self.ensure_open()?;
        if let Some(paths) = self.load_pending()? {
            self.ensure_monitor(&paths);
        }
        let cell = self.cell.load_full();
        let Some(credential) = cell.current() else {
            panic!("[MANAGER] server_config() called with no credential source configured");
        };
        self.mark_active();
        Ok(ServerTlsConfig {
            credential,
            client_roots: self.trust_pool.snapshot(),
            min_protocol_version: MIN_PROTOCOL_VERSION,
            client_auth: self.client_auth_policy(),
            resolver: Arc::new(DynamicCertificateResolver::new(cell)),
            provider: Arc::clone(&self.provider),
        })
    }

    /// Produces a client configuration. A configured credential is presented
    /// for mutual TLS; the file monitor is not started by this path.
    pub fn client_config(&self) -> Result<ClientTlsConfig, CertificateError> {
        self.ensure_open()?;
        self.load_pending()?;
        self.mark_active();
        Ok(ClientTlsConfig {
            server_roots: self.trust_pool.snapshot(),
            credential: self.cell.load().current(),
            min_protocol_version: MIN_PROTOCOL_VERSION,
            insecure_skip_verify: self.settings.read().insecure_skip_verify,
            provider: Arc::clone(&self.provider),
        })
    }

    pub fn verify_external_cert(&self, pem: &[u8]) -> Result<(), CertificateError> {
        self.trust_pool.verify(pem)
    }

    fn ensure_monitor(&self, paths: &CertificatePaths) {
        let (settings, disabled, start_monitor) = {
            let settings = self.settings.read();
            (settings.monitor, settings.live_reload_disabled, settings.start_monitor)
        };
        if disabled {
            return;
        }
        let mut slot = self.monitor.lock();
        if self.state() == ManagerState::Closed {
            return;
        }
        if let Some(existing) = slot.as_ref() {
            if existing.cert_path() == paths.cert_path
                && existing.key_path() == paths.key_path
                && existing.state() == MonitorState::Watching
            {
                return;
            }
        }
        if let Some(mut stale) = slot.take() {
            stale.stop();
        }
        match start_monitor(paths, self.cell.load_full(), settings) {
            Ok(monitor) => *slot = Some(monitor),
            Err(error) => {
                log::warn!(
                    "[MANAGER] Live reload unavailable, serving the credential loaded at startup: {}",
                    error
                );
                self.settings.write().live_reload_disabled = true;
            }
        }
    }

    fn retire_monitor(&self) {
        let retired = self.monitor.lock().take();
        if let Some(mut monitor) = retired {
            monitor.stop();
        }
    }

    pub fn is_watching(&self) -> bool {
        self.monitor
            .lock()
            .as_ref()
            .is_some_and(|monitor| monitor.state() == MonitorState::Watching)
    }

    pub fn monitor_stats(&self) -> Option<MonitorStats> {
        self.monitor.lock().as_ref().map(FileChangeMonitor::stats)
    }

    pub fn current_credential(&self) -> Option<Arc<Credential>> {
        self.cell.load().current()
    }

    pub fn trust_pool(&self) -> &TrustPool {
        &self.trust_pool
    }

    /// Stops the file monitor. Safe to call repeatedly; later configuration
    /// calls fail with a configuration error.
    pub fn close(&self) {
        {
            let mut state = self.state.lock();
            if *state == ManagerState::Closed {
                return;
            }
            *state = ManagerState::Closed;
        }
        self.retire_monitor();
        log::info!("[MANAGER] Credential manager closed");
    }
}

impl Drop for CredentialManager {
    fn drop(&mut self) {
        self.close();
    }
}
