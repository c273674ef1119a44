use crate::ssl::enums::client_auth_policy::ClientAuthPolicy;
use crate::ssl::structs::credential::Credential;
use crate::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
use rustls::crypto::CryptoProvider;
use rustls::{ProtocolVersion, RootCertStore};
use std::sync::Arc;

/// Server-side negotiation settings, frozen when `server_config()` was called.
#[derive(Clone)]
pub struct ServerTlsConfig {
    /// Credential current at the time this configuration was produced.
    pub credential: Arc<Credential>,
    /// Pool used to verify client certificates.
    pub client_roots: Arc<RootCertStore>,
    pub min_protocol_version: ProtocolVersion,
    pub client_auth: ClientAuthPolicy,
    pub(crate) resolver: Arc<DynamicCertificateResolver>,
    pub(crate) provider: Arc<CryptoProvider>,
}
