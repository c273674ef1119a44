use crate::ssl::enums::credential_origin::CredentialOrigin;
use rustls::sign::CertifiedKey;
use std::sync::Arc;

/// An end-entity certificate chain paired with its private key.
///
/// A `Credential` only exists once the chain parsed and the key was checked
/// against the leaf certificate; it is never mutated afterwards.
pub struct Credential {
    pub(crate) certified_key: Arc<CertifiedKey>,
    pub(crate) origin: CredentialOrigin,
    pub(crate) loaded_at: chrono::DateTime<chrono::Utc>,
}
