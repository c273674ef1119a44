use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::monitor_state::MonitorState;
use crate::ssl::ssl::{watch_aliases, watch_directory};
use crate::ssl::structs::certificate_paths::CertificatePaths;
use crate::ssl::structs::credential_cell::CredentialCell;
use crate::ssl::structs::file_change_monitor::FileChangeMonitor;
use crate::ssl::structs::monitor_settings::MonitorSettings;
use crate::ssl::structs::monitor_stats::{MonitorCounters, MonitorStats};
use crate::ssl::structs::reload_worker::ReloadWorker;
use notify::{RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::Arc;

impl std::fmt::Debug for FileChangeMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileChangeMonitor")
            .field("cert_path", &self.cert_path)
            .field("key_path", &self.key_path)
            .field("state", &self.state)
            .field("stats", &self.stats())
            .finish()
    }
}

impl FileChangeMonitor {
    pub fn new(
        cert_path: impl Into<PathBuf>,
        key_path: impl Into<PathBuf>,
        cell: Arc<CredentialCell>,
        settings: MonitorSettings,
    ) -> Self {
        Self {
            cert_path: cert_path.into(),
            key_path: key_path.into(),
            cell,
            settings,
            state: MonitorState::Uninitialized,
            counters: Arc::new(MonitorCounters::default()),
            watcher: None,
            shutdown: None,
            worker: None,
        }
    }

    /// Creates a monitor for `paths` and starts it.
    pub fn spawn(
        paths: &CertificatePaths,
        cell: Arc<CredentialCell>,
        settings: MonitorSettings,
    ) -> Result<Self, CertificateError> {
        let mut monitor = Self::new(paths.cert_path.clone(), paths.key_path.clone(), cell, settings);
        monitor.start()?;
        Ok(monitor)
    }

    pub fn state(&self) -> MonitorState {
        self.state
    }

    pub fn stats(&self) -> MonitorStats {
        self.counters.snapshot()
    }

    pub fn cert_path(&self) -> &Path {
        &self.cert_path
    }

    pub fn key_path(&self) -> &Path {
        &self.key_path
    }

    /// Starts watching. A no-op while already watching; a stopped monitor
    /// cannot be started again.
    pub fn start(&mut self) -> Result<(), CertificateError> {
        match self.state {
            MonitorState::Watching => return Ok(()),
            MonitorState::Stopped => {
                return Err(CertificateError::Watcher(
                    "monitor has been stopped and cannot be restarted".to_string(),
                ));
            }
            MonitorState::Uninitialized => {}
        }

        let mut directories = vec![watch_directory(&self.cert_path)];
        let key_directory = watch_directory(&self.key_path);
        if !directories.contains(&key_directory) {
            directories.push(key_directory);
        }
        let mut targets = watch_aliases(&self.cert_path);
        targets.extend(watch_aliases(&self.key_path));

        let (event_tx, event_rx) = crossbeam::channel::unbounded();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
            let _ = event_tx.send(res);
        })
        .map_err(|e| CertificateError::Watcher(format!("initializing watcher: {}", e)))?;
        for directory in &directories {
            watcher
                .watch(directory, RecursiveMode::NonRecursive)
                .map_err(|e| {
                    CertificateError::Watcher(format!("watching {}: {}", directory.display(), e))
                })?;
        }

        let (shutdown_tx, shutdown_rx) = crossbeam::channel::bounded(1);
        let worker = ReloadWorker {
            targets,
            cert_path: self.cert_path.clone(),
            key_path: self.key_path.clone(),
            cell: Arc::clone(&self.cell),
            settings: self.settings,
            counters: Arc::clone(&self.counters),
        };
        let handle = std::thread::Builder::new()
            .name("credential-monitor".to_string())
            .spawn(move || worker.run(event_rx, shutdown_rx))
            .map_err(|e| CertificateError::Watcher(format!("spawning monitor thread: {}", e)))?;

        self.watcher = Some(watcher);
        self.shutdown = Some(shutdown_tx);
        self.worker = Some(handle);
        self.state = MonitorState::Watching;
        log::info!(
            "[MONITOR] Watching {} and {} for changes",
            self.cert_path.display(),
            self.key_path.display()
        );
        Ok(())
    }

    /// Stops the monitor thread and releases the OS watch handles. Safe to
    /// call repeatedly and on a monitor that never started.
    pub fn stop(&mut self) {
        if self.state == MonitorState::Stopped {
            return;
        }
        let was_watching = self.state == MonitorState::Watching;
        self.state = MonitorState::Stopped;
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        drop(self.watcher.take());
        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                log::error!("[MONITOR] Monitor thread panicked");
            }
        }
        if was_watching {
            log::info!(
                "[MONITOR] Stopped watching {} and {}",
                self.cert_path.display(),
                self.key_path.display()
            );
        }
    }
}

impl Drop for FileChangeMonitor {
    fn drop(&mut self) {
        self.stop();
    }
}
