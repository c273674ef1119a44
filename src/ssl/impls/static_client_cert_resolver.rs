use crate::ssl::structs::static_client_cert_resolver::StaticClientCertResolver;
use rustls::SignatureScheme;
use rustls::client::ResolvesClientCert;
use rustls::sign::CertifiedKey;
use std::sync::Arc;

impl StaticClientCertResolver {
    pub fn new(certified_key: Arc<CertifiedKey>) -> Self {
        Self { certified_key }
    }
}

impl ResolvesClientCert for StaticClientCertResolver {
    fn resolve(
        &self,
        _root_hint_subjects: &[&[u8]],
        _sigschemes: &[SignatureScheme],
    ) -> Option<Arc<CertifiedKey>> {
        Some(Arc::clone(&self.certified_key))
    }

    fn has_certs(&self) -> bool {
        true
    }
}
