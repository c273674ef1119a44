use crate::config::enums::configuration_error::ConfigurationError;
use crate::ssl::enums::certificate_error::CertificateError;

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigurationError::IOError(e) => e.fmt(f),
            ConfigurationError::ParseError(e) => e.fmt(f),
            ConfigurationError::SerializeError(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for ConfigurationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigurationError::IOError(e) => Some(e),
            ConfigurationError::ParseError(e) => Some(e),
            ConfigurationError::SerializeError(e) => Some(e),
        }
    }
}

impl From<ConfigurationError> for CertificateError {
    fn from(error: ConfigurationError) -> Self {
        CertificateError::Configuration(error.to_string())
    }
}
