use crate::common::common::read_file;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::credential_origin::CredentialOrigin;
use crate::ssl::ssl::{parse_certificates, parse_private_key};
use crate::ssl::structs::credential::Credential;
use rustls::InconsistentKeys;
use rustls::pki_types::CertificateDer;
use rustls::sign::CertifiedKey;
use std::path::Path;
use std::sync::Arc;

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("certs_count", &self.certified_key.cert.len())
            .field("origin", &self.origin)
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

impl Credential {
    pub fn load_from_files(
        cert_path: impl AsRef<Path>,
        key_path: impl AsRef<Path>,
    ) -> Result<Self, CertificateError> {
        let cert_path = cert_path.as_ref();
        let key_path = key_path.as_ref();
        let cert_pem = read_file(cert_path)?;
        let key_pem = read_file(key_path)?;
        Self::build(
            &cert_pem,
            &key_pem,
            CredentialOrigin::Files {
                cert_path: cert_path.to_path_buf(),
                key_path: key_path.to_path_buf(),
            },
        )
    }

    pub fn from_pem(cert_pem: &[u8], key_pem: &[u8]) -> Result<Self, CertificateError> {
        Self::build(cert_pem, key_pem, CredentialOrigin::Memory)
    }

    fn build(
        cert_pem: &[u8],
        key_pem: &[u8],
        origin: CredentialOrigin,
    ) -> Result<Self, CertificateError> {
        let label = origin.to_string();
        let certs = parse_certificates(cert_pem, &label)?;
        let key = parse_private_key(key_pem, &label)?;
        let signing_key = rustls::crypto::ring::sign::any_supported_type(&key)
            .map_err(|e| CertificateError::Parse {
                origin: label.clone(),
                reason: e.to_string(),
            })?;
        let certified_key = CertifiedKey::new(certs, signing_key);
        Self::check_keys_match(&certified_key, &label)?;
        Ok(Self {
            certified_key: Arc::new(certified_key),
            origin,
            loaded_at: chrono::Utc::now(),
        })
    }

    fn check_keys_match(certified_key: &CertifiedKey, label: &str) -> Result<(), CertificateError> {
        match certified_key.keys_match() {
            Ok(()) => Ok(()),
            Err(rustls::Error::InconsistentKeys(InconsistentKeys::KeyMismatch)) => {
                Err(CertificateError::KeyMismatch { origin: label.to_string() })
            }
            // The signing key cannot report its public half; nothing to compare.
            Err(rustls::Error::InconsistentKeys(InconsistentKeys::Unknown)) => {
                log::debug!("[CREDENTIAL] Skipped key match check for {}", label);
                Ok(())
            }
            Err(e) => Err(CertificateError::Parse {
                origin: label.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Re-checks that the chain parses and the key matches the leaf.
    pub fn validate(&self) -> Result<(), CertificateError> {
        Self::check_keys_match(&self.certified_key, &self.origin.to_string())
    }

    pub fn certificates(&self) -> &[CertificateDer<'static>] {
        &self.certified_key.cert
    }

    pub fn leaf(&self) -> &CertificateDer<'static> {
        // non-empty by construction
        &self.certified_key.cert[0]
    }

    pub fn certified_key(&self) -> Arc<CertifiedKey> {
        Arc::clone(&self.certified_key)
    }

    pub fn origin(&self) -> &CredentialOrigin {
        &self.origin
    }

    pub fn loaded_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.loaded_at
    }
}
