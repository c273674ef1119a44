use crate::ssl::enums::certificate_error::CertificateError;
use rustls::crypto::CryptoProvider;
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use rustls::{ProtocolVersion, SupportedProtocolVersion};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Lowest protocol version any produced configuration will negotiate.
pub const MIN_PROTOCOL_VERSION: ProtocolVersion = ProtocolVersion::TLSv1_2;

/// File extensions picked up by trust directory scans, compared case-insensitively.
pub const TRUST_FILE_EXTENSIONS: [&str; 2] = ["crt", "pem"];

pub fn default_crypto_provider() -> Arc<CryptoProvider> {
    CryptoProvider::get_default()
        .cloned()
        .unwrap_or_else(|| Arc::new(rustls::crypto::ring::default_provider()))
}

pub fn protocol_versions_from(
    min_version: ProtocolVersion,
) -> Vec<&'static SupportedProtocolVersion> {
    rustls::ALL_VERSIONS
        .iter()
        .copied()
        .filter(|supported| u16::from(supported.version) >= u16::from(min_version))
        .collect()
}

pub fn is_trust_file(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            TRUST_FILE_EXTENSIONS
                .iter()
                .any(|allowed| extension.eq_ignore_ascii_case(allowed))
        })
}

/// Parses every `CERTIFICATE` block in `pem`; fails when there are none.
pub fn parse_certificates(
    pem: &[u8],
    origin: &str,
) -> Result<Vec<CertificateDer<'static>>, CertificateError> {
    let mut reader = pem;
    let certs: Vec<CertificateDer<'static>> = rustls_pemfile::certs(&mut reader)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| CertificateError::Parse {
            origin: origin.to_string(),
            reason: e.to_string(),
        })?;
    if certs.is_empty() {
        return Err(CertificateError::Parse {
            origin: origin.to_string(),
            reason: "no certificates found".to_string(),
        });
    }
    Ok(certs)
}

/// Parses the first PKCS#8, PKCS#1 or SEC1 private key in `pem`.
pub fn parse_private_key(
    pem: &[u8],
    origin: &str,
) -> Result<PrivateKeyDer<'static>, CertificateError> {
    let mut reader = pem;
    rustls_pemfile::private_key(&mut reader)
        .map_err(|e| CertificateError::Parse {
            origin: origin.to_string(),
            reason: e.to_string(),
        })?
        .ok_or_else(|| CertificateError::Parse {
            origin: origin.to_string(),
            reason: "no private key found".to_string(),
        })
}

/// Directory to watch for `path`: its parent, or `.` for a bare file name.
pub fn watch_directory(path: &Path) -> PathBuf {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    parent
        .canonicalize()
        .or_else(|_| std::path::absolute(parent))
        .unwrap_or_else(|_| parent.to_path_buf())
}

/// Every spelling under which a watcher may report `path`.
pub fn watch_aliases(path: &Path) -> Vec<PathBuf> {
    let mut aliases = Vec::with_capacity(3);
    if let Some(file_name) = path.file_name() {
        aliases.push(watch_directory(path).join(file_name));
    }
    if let Ok(absolute) = std::path::absolute(path) {
        aliases.push(absolute);
    }
    aliases.push(path.to_path_buf());
    aliases.dedup();
    aliases
}
