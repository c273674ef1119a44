use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::credential_config::CredentialConfig;
use crate::config::structs::monitor_config::MonitorConfig;
use crate::config::structs::trust_config::TrustConfig;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::client_auth_policy::ClientAuthPolicy;
use std::fs::File;
use std::io::Write;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: Self::default_log_level(),
            trust: TrustConfig::default(),
            credential: CredentialConfig::default(),
            monitor: MonitorConfig::default(),
        }
    }

    pub(crate) fn default_log_level() -> String {
        String::from("info")
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => Self::load(data.as_slice()).map_err(ConfigurationError::ParseError),
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => match file.write_all(data.as_bytes()) {
                Ok(_) => Ok(()),
                Err(e) => Err(ConfigurationError::IOError(e)),
            },
            Err(e) => Err(ConfigurationError::IOError(e)),
        }
    }

    pub fn to_toml(&self) -> Result<String, ConfigurationError> {
        toml::to_string(self).map_err(ConfigurationError::SerializeError)
    }

    pub fn validate(&self) -> Result<(), CertificateError> {
        self.credential.client_auth.parse::<ClientAuthPolicy>()?;
        match (&self.credential.cert_path, &self.credential.key_path) {
            (Some(_), None) => {
                return Err(CertificateError::Configuration(
                    "credential.cert_path is set but credential.key_path is missing".to_string(),
                ));
            }
            (None, Some(_)) => {
                return Err(CertificateError::Configuration(
                    "credential.key_path is set but credential.cert_path is missing".to_string(),
                ));
            }
            _ => {}
        }
        if self.monitor.debounce_ms == 0 {
            return Err(CertificateError::Configuration(
                "monitor.debounce_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}

impl CredentialConfig {
    pub(crate) fn default_client_auth() -> String {
        ClientAuthPolicy::None.to_string()
    }
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            cert_path: None,
            key_path: None,
            client_auth: Self::default_client_auth(),
            insecure_skip_verify: false,
        }
    }
}
