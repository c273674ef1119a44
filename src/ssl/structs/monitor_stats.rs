use std::sync::atomic::AtomicU64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonitorStats {
    pub reloads: u64,
    pub failures: u64,
    pub consecutive_failures: u64,
    pub alerts: u64,
}

#[derive(Debug, Default)]
pub(crate) struct MonitorCounters {
    pub(crate) reloads: AtomicU64,
    pub(crate) failures: AtomicU64,
    pub(crate) consecutive_failures: AtomicU64,
    pub(crate) alerts: AtomicU64,
}
