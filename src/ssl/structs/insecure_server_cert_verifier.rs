use rustls::crypto::WebPkiSupportedAlgorithms;

#[derive(Debug)]
pub struct InsecureServerCertVerifier {
    pub(crate) algorithms: WebPkiSupportedAlgorithms,
}
