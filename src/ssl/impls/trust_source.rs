use crate::ssl::enums::trust_source::TrustSource;
use std::path::PathBuf;

impl TrustSource {
    pub fn bytes(pem: impl Into<Vec<u8>>) -> Self {
        TrustSource::Bytes(pem.into())
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        TrustSource::File(path.into())
    }

    pub fn directory(path: impl Into<PathBuf>) -> Self {
        TrustSource::Directory(path.into())
    }
}

impl std::fmt::Display for TrustSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrustSource::Bytes(pem) => write!(f, "Bytes({} bytes)", pem.len()),
            TrustSource::File(path) => write!(f, "File({})", path.display()),
            TrustSource::Directory(path) => write!(f, "Directory({})", path.display()),
        }
    }
}
