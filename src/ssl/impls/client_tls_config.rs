use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::ssl::protocol_versions_from;
use crate::ssl::structs::client_tls_config::ClientTlsConfig;
use crate::ssl::structs::insecure_server_cert_verifier::InsecureServerCertVerifier;
use crate::ssl::structs::static_client_cert_resolver::StaticClientCertResolver;
use rustls::ClientConfig;
use std::sync::Arc;

impl std::fmt::Debug for ClientTlsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientTlsConfig")
            .field("server_roots_count", &self.server_roots.len())
            .field("credential", &self.credential)
            .field("min_protocol_version", &self.min_protocol_version)
            .field("insecure_skip_verify", &self.insecure_skip_verify)
            .finish()
    }
}

impl ClientTlsConfig {
    pub fn rustls_config(&self) -> Result<Arc<ClientConfig>, CertificateError> {
        let builder = ClientConfig::builder_with_provider(Arc::clone(&self.provider))
            .with_protocol_versions(&protocol_versions_from(self.min_protocol_version))
            .map_err(|e| CertificateError::Configuration(format!("client protocol versions: {}", e)))?;
        let builder = if self.insecure_skip_verify {
            log::warn!("[MANAGER] Server certificate verification is disabled for this client configuration");
            builder
                .dangerous()
                .with_custom_certificate_verifier(Arc::new(InsecureServerCertVerifier::new(
                    self.provider.signature_verification_algorithms,
                )))
        } else {
            builder.with_root_certificates(Arc::clone(&self.server_roots))
        };
        let config = match &self.credential {
            Some(credential) => builder.with_client_cert_resolver(Arc::new(
                StaticClientCertResolver::new(credential.certified_key()),
            )),
            None => builder.with_no_client_auth(),
        };
        Ok(Arc::new(config))
    }
}
