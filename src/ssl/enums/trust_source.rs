use std::path::PathBuf;

/// One input accepted by `CredentialManager::configure_trust`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrustSource {
    Bytes(Vec<u8>),
    File(PathBuf),
    Directory(PathBuf),
}
