/// Lifecycle of a [`FileChangeMonitor`](crate::ssl::structs::file_change_monitor::FileChangeMonitor).
///
/// `Uninitialized -> Watching -> Stopped`; a stopped monitor never watches again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    Uninitialized,
    Watching,
    Stopped,
}
