use std::path::PathBuf;

/// Where a [`Credential`](crate::ssl::structs::credential::Credential) was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialOrigin {
    Files { cert_path: PathBuf, key_path: PathBuf },
    Memory,
}
