use arc_swap::ArcSwap;
use parking_lot::Mutex;
use rustls::RootCertStore;

/// Set of trusted certificate authorities.
///
/// Readers take a snapshot of the current store; writers build a copy and
/// swap it in, so verification never observes a half-updated pool.
pub struct TrustPool {
    pub(crate) roots: ArcSwap<RootCertStore>,
    pub(crate) write_lock: Mutex<()>,
}
