use crate::ssl::structs::monitor_stats::{MonitorCounters, MonitorStats};
use std::sync::atomic::Ordering;

impl MonitorCounters {
    pub(crate) fn record_success(&self) {
        self.reloads.fetch_add(1, Ordering::Relaxed);
        self.consecutive_failures.store(0, Ordering::Relaxed);
    }

    /// Returns the length of the current failure streak.
    pub(crate) fn record_failure(&self) -> u64 {
        self.failures.fetch_add(1, Ordering::Relaxed);
        self.consecutive_failures.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub(crate) fn record_alert(&self) {
        self.alerts.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> MonitorStats {
        MonitorStats {
            reloads: self.reloads.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            consecutive_failures: self.consecutive_failures.load(Ordering::Relaxed),
            alerts: self.alerts.load(Ordering::Relaxed),
        }
    }
}
