use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::client_auth_policy::ClientAuthPolicy;
use crate::ssl::ssl::protocol_versions_from;
use crate::ssl::structs::accept_any_client_cert::AcceptAnyClientCert;
use crate::ssl::structs::server_tls_config::ServerTlsConfig;
use rustls::ServerConfig;
use rustls::server::WebPkiClientVerifier;
use rustls::server::danger::ClientCertVerifier;
use std::sync::Arc;

impl std::fmt::Debug for ServerTlsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerTlsConfig")
            .field("credential", &self.credential)
            .field("client_roots_count", &self.client_roots.len())
            .field("min_protocol_version", &self.min_protocol_version)
            .field("client_auth", &self.client_auth)
            .finish()
    }
}

impl ServerTlsConfig {
    /// Builds a rustls server configuration. The certificate is resolved from
    /// the credential cell on every handshake, so the result keeps rotating.
    pub fn rustls_config(&self) -> Result<Arc<ServerConfig>, CertificateError> {
        let builder = ServerConfig::builder_with_provider(Arc::clone(&self.provider))
            .with_protocol_versions(&protocol_versions_from(self.min_protocol_version))
            .map_err(|e| CertificateError::Configuration(format!("server protocol versions: {}", e)))?;
        let builder = if self.client_auth.requests_certificate() {
            builder.with_client_cert_verifier(self.client_verifier(self.client_auth)?)
        } else {
            builder.with_no_client_auth()
        };
        Ok(Arc::new(builder.with_cert_resolver(self.resolver.clone())))
    }

    fn client_verifier(
        &self,
        policy: ClientAuthPolicy,
    ) -> Result<Arc<dyn ClientCertVerifier>, CertificateError> {
        let algorithms = self.provider.signature_verification_algorithms;
        if !policy.verifies_certificate() {
            return Ok(Arc::new(AcceptAnyClientCert::new(
                policy.requires_certificate(),
                algorithms,
            )));
        }
        let builder = WebPkiClientVerifier::builder_with_provider(
            Arc::clone(&self.client_roots),
            Arc::clone(&self.provider),
        );
        let builder = if policy.requires_certificate() {
            builder
        } else {
            builder.allow_unauthenticated()
        };
        builder.build().map_err(|e| {
            CertificateError::Configuration(format!(
                "client auth policy '{}' needs a usable trust pool: {}",
                policy, e
            ))
        })
    }
}
