use rustls::crypto::WebPkiSupportedAlgorithms;

/// Client certificate verifier that checks handshake signatures but not the chain.
#[derive(Debug)]
pub struct AcceptAnyClientCert {
    pub(crate) mandatory: bool,
    pub(crate) algorithms: WebPkiSupportedAlgorithms,
}
