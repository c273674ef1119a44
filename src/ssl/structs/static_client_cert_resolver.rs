use rustls::sign::CertifiedKey;
use std::sync::Arc;

#[derive(Debug)]
pub struct StaticClientCertResolver {
    pub(crate) certified_key: Arc<CertifiedKey>,
}
