use crate::ssl::structs::credential_cell::CredentialCell;
use crate::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
use rustls::server::{ClientHello, ResolvesServerCert};
use rustls::sign::CertifiedKey;
use std::sync::Arc;

impl std::fmt::Debug for DynamicCertificateResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicCertificateResolver")
            .field("has_certificate", &self.has_certificate())
            .finish()
    }
}

impl DynamicCertificateResolver {
    pub fn new(cell: Arc<CredentialCell>) -> Self {
        Self { cell }
    }

    pub fn has_certificate(&self) -> bool {
        !self.cell.is_empty()
    }
}

impl ResolvesServerCert for DynamicCertificateResolver {
    fn resolve(&self, _client_hello: ClientHello<'_>) -> Option<Arc<CertifiedKey>> {
        self.cell.certified_key()
    }
}
