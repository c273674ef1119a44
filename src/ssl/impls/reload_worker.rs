use crate::ssl::structs::credential::Credential;
use crate::ssl::structs::reload_worker::ReloadWorker;
use crossbeam::channel::{Receiver, select};
use notify::event::{AccessKind, AccessMode, ModifyKind};
use notify::{Event, EventKind};
use std::time::Instant;

impl ReloadWorker {
    /// Monitor thread body. Relevant events push the reload deadline out by
    /// one debounce window; the reload runs once the window passes quietly.
    pub(crate) fn run(self, events: Receiver<notify::Result<Event>>, shutdown: Receiver<()>) {
        let mut deadline: Option<Instant> = None;
        loop {
            let timer = match deadline {
                Some(at) => crossbeam::channel::at(at),
                None => crossbeam::channel::never(),
            };
            select! {
                recv(shutdown) -> _ => break,
                recv(events) -> message => match message {
                    Ok(Ok(event)) => {
                        if self.is_relevant(&event) {
                            log::debug!("[MONITOR] {:?} on {:?}", event.kind, event.paths);
                            deadline = Some(Instant::now() + self.settings.debounce);
                        }
                    }
                    Ok(Err(error)) => {
                        log::warn!("[MONITOR] Watcher reported an error: {}", error);
                    }
                    Err(_) => break,
                },
                recv(timer) -> _ => {
                    deadline = None;
                    self.reload();
                }
            }
        }
        log::debug!("[MONITOR] Monitor thread exiting");
    }

    pub(crate) fn is_relevant(&self, event: &Event) -> bool {
        let kind_matches = matches!(
            event.kind,
            EventKind::Any
                | EventKind::Create(_)
                | EventKind::Modify(
                    ModifyKind::Any | ModifyKind::Data(_) | ModifyKind::Name(_) | ModifyKind::Other
                )
                | EventKind::Access(AccessKind::Close(AccessMode::Write))
        );
        kind_matches
            && event
                .paths
                .iter()
                .any(|path| self.targets.iter().any(|target| target == path))
    }

    /// Loads the files and publishes the result. On failure the previously
    /// published credential stays in the cell.
    pub(crate) fn reload(&self) {
        match Credential::load_from_files(&self.cert_path, &self.key_path) {
            Ok(credential) => {
                self.cell.publish(credential);
                self.counters.record_success();
                log::info!(
                    "[MONITOR] Reloaded credential from {} and {}",
                    self.cert_path.display(),
                    self.key_path.display()
                );
            }
            Err(error) => {
                let consecutive = self.counters.record_failure();
                log::warn!(
                    "[MONITOR] Reload failed, keeping the previous credential: {}",
                    error
                );
                let threshold = u64::from(self.settings.failure_alert_threshold);
                if threshold > 0 && consecutive == threshold {
                    self.counters.record_alert();
                    log::error!(
                        "[MONITOR] Reload failing repeatedly ({} consecutive failures), still serving the previous credential",
                        consecutive
                    );
                }
            }
        }
    }
}
