use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::credential::Credential;
use crate::ssl::structs::credential_cell::CredentialCell;
use arc_swap::ArcSwapOption;
use rustls::sign::CertifiedKey;
use std::path::Path;
use std::sync::Arc;

impl std::fmt::Debug for CredentialCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialCell")
            .field("current", &self.current.load().as_deref())
            .finish()
    }
}

impl Default for CredentialCell {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialCell {
    pub fn new() -> Self {
        Self {
            current: ArcSwapOption::empty(),
        }
    }

    /// Makes `credential` the value every later `current()` returns.
    pub fn publish(&self, credential: impl Into<Arc<Credential>>) {
        self.current.store(Some(credential.into()));
    }

    pub fn current(&self) -> Option<Arc<Credential>> {
        self.current.load_full()
    }

    pub fn is_empty(&self) -> bool {
        self.current.load().is_none()
    }

    /// Handshake path: hands out the signing material without cloning the credential.
    pub fn certified_key(&self) -> Option<Arc<CertifiedKey>> {
        self.current
            .load()
            .as_ref()
            .map(|credential| Arc::clone(&credential.certified_key))
    }

    /// Loads a credential from disk; the caller decides whether to publish it.
    pub fn load_from_files(
        cert_path: impl AsRef<Path>,
        key_path: impl AsRef<Path>,
    ) -> Result<Credential, CertificateError> {
        Credential::load_from_files(cert_path, key_path)
    }
}
