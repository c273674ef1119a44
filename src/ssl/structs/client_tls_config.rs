use crate::ssl::structs::credential::Credential;
use rustls::crypto::CryptoProvider;
use rustls::{ProtocolVersion, RootCertStore};
use std::sync::Arc;

/// Client-side negotiation settings for outbound connections.
#[derive(Clone)]
pub struct ClientTlsConfig {
    /// Pool used to verify server certificates.
    pub server_roots: Arc<RootCertStore>,
    /// Certificate presented for mutual TLS, if one is configured.
    pub credential: Option<Arc<Credential>>,
    pub min_protocol_version: ProtocolVersion,
    pub insecure_skip_verify: bool,
    pub(crate) provider: Arc<CryptoProvider>,
}
