use crate::common::common::{io_error, read_file};
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::ssl::{default_crypto_provider, is_trust_file, parse_certificates};
use crate::ssl::structs::trust_pool::TrustPool;
use arc_swap::ArcSwap;
use rustls::RootCertStore;
use rustls::client::verify_server_cert_signed_by_trust_anchor;
use rustls::pki_types::{CertificateDer, UnixTime};
use rustls::server::ParsedCertificate;
use rustls_pemfile::Item;
use std::path::Path;
use std::sync::Arc;

impl std::fmt::Debug for TrustPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrustPool")
            .field("anchors_count", &self.len())
            .finish()
    }
}

impl Default for TrustPool {
    fn default() -> Self {
        Self::empty()
    }
}

impl TrustPool {
    /// Creates a pool, optionally seeded with the bundled Mozilla root program.
    pub fn new(use_system_roots: bool) -> Self {
        let roots = if use_system_roots {
            let store = RootCertStore::from_iter(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
            if store.is_empty() {
                log::warn!("[TRUST] No system trust anchors available, starting from an empty pool");
            } else {
                log::debug!("[TRUST] Seeded pool with {} system trust anchors", store.len());
            }
            store
        } else {
            RootCertStore::empty()
        };
        Self {
            roots: ArcSwap::from_pointee(roots),
            write_lock: parking_lot::Mutex::new(()),
        }
    }

    pub fn empty() -> Self {
        Self::new(false)
    }

    pub fn with_system_roots() -> Self {
        Self::new(true)
    }

    pub fn len(&self) -> usize {
        self.roots.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.load().is_empty()
    }

    /// The store as it is right now; later additions do not show up in it.
    pub fn snapshot(&self) -> Arc<RootCertStore> {
        self.roots.load_full()
    }

    /// Adds every certificate found in `pem`; other PEM blocks are skipped.
    pub fn add_from_bytes(&self, pem: &[u8]) -> Result<(), CertificateError> {
        self.add_pem(pem, "in-memory PEM")
    }

    pub fn add_from_file(&self, path: impl AsRef<Path>) -> Result<(), CertificateError> {
        let path = path.as_ref();
        let pem = read_file(path)?;
        self.add_pem(&pem, &path.display().to_string())
    }

    /// Loads the `.crt` and `.pem` files directly inside `path`, in name order.
    /// Subdirectories and other entries are ignored.
    pub fn add_from_directory(&self, path: impl AsRef<Path>) -> Result<(), CertificateError> {
        let dir = path.as_ref();
        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(|e| io_error(dir, e))? {
            let entry = entry.map_err(|e| io_error(dir, e))?;
            let file_type = entry.file_type().map_err(|e| io_error(&entry.path(), e))?;
            let entry_path = entry.path();
            if file_type.is_file() && is_trust_file(&entry_path) {
                files.push(entry_path);
            }
        }
        files.sort();
        for file in &files {
            self.add_from_file(file)?;
        }
        log::info!(
            "[TRUST] Loaded {} trust file(s) from {}",
            files.len(),
            dir.display()
        );
        Ok(())
    }

    pub(crate) fn add_pem(&self, pem: &[u8], origin: &str) -> Result<(), CertificateError> {
        let _guard = self.write_lock.lock();
        let mut next = RootCertStore::clone(&self.roots.load_full());
        let mut added = 0usize;
        let mut reader = pem;
        for item in rustls_pemfile::read_all(&mut reader) {
            let item = item.map_err(|e| CertificateError::Parse {
                origin: origin.to_string(),
                reason: e.to_string(),
            })?;
            if let Item::X509Certificate(der) = item {
                if Self::insert_anchor(&mut next, der).map_err(|e| CertificateError::Parse {
                    origin: origin.to_string(),
                    reason: e.to_string(),
                })? {
                    added += 1;
                }
            }
        }
        self.roots.store(Arc::new(next));
        log::debug!("[TRUST] Added {} trust anchor(s) from {}", added, origin);
        Ok(())
    }

    fn insert_anchor(
        store: &mut RootCertStore,
        der: CertificateDer<'_>,
    ) -> Result<bool, rustls::Error> {
        let mut parsed = RootCertStore::empty();
        parsed.add(der)?;
        let mut inserted = false;
        for anchor in parsed.roots {
            if !store.roots.contains(&anchor) {
                store.roots.push(anchor);
                inserted = true;
            }
        }
        Ok(inserted)
    }

    /// Verifies a PEM chain (leaf first, then intermediates) against the pool.
    pub fn verify(&self, pem: &[u8]) -> Result<(), CertificateError> {
        let chain = parse_certificates(pem, "certificate to verify")?;
        self.verify_chain(&chain)
    }

    pub fn verify_chain(&self, chain: &[CertificateDer<'_>]) -> Result<(), CertificateError> {
        let Some((leaf, intermediates)) = chain.split_first() else {
            return Err(CertificateError::Parse {
                origin: "certificate to verify".to_string(),
                reason: "empty certificate chain".to_string(),
            });
        };
        let parsed = ParsedCertificate::try_from(leaf).map_err(|e| CertificateError::Parse {
            origin: "certificate to verify".to_string(),
            reason: e.to_string(),
        })?;
        let roots = self.roots.load_full();
        let provider = default_crypto_provider();
        verify_server_cert_signed_by_trust_anchor(
            &parsed,
            &roots,
            intermediates,
            UnixTime::now(),
            provider.signature_verification_algorithms.all,
        )
        .map_err(CertificateError::Untrusted)
    }
}
