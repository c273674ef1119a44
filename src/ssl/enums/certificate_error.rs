use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CertificateError {
    #[error("{} does not exist", path.display())]
    NotFound { path: PathBuf },
    #[error("{} could not be read: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {origin}: {reason}")]
    Parse { origin: String, reason: String },
    #[error("Private key does not match the leaf certificate of {origin}")]
    KeyMismatch { origin: String },
    #[error("Certificate is not trusted: {0}")]
    Untrusted(#[source] rustls::Error),
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("File watcher error: {0}")]
    Watcher(String),
}
