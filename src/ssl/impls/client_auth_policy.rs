use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::client_auth_policy::ClientAuthPolicy;
use std::str::FromStr;

impl ClientAuthPolicy {
    pub const ALL: [ClientAuthPolicy; 5] = [
        ClientAuthPolicy::None,
        ClientAuthPolicy::Request,
        ClientAuthPolicy::RequireAny,
        ClientAuthPolicy::VerifyIfGiven,
        ClientAuthPolicy::RequireAndVerify,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClientAuthPolicy::None => "none",
            ClientAuthPolicy::Request => "request",
            ClientAuthPolicy::RequireAny => "require",
            ClientAuthPolicy::VerifyIfGiven => "verify",
            ClientAuthPolicy::RequireAndVerify => "requireverify",
        }
    }

    /// Whether the server asks the client for a certificate at all.
    pub fn requests_certificate(&self) -> bool {
        !matches!(self, ClientAuthPolicy::None)
    }

    /// Whether a handshake without a client certificate is rejected.
    pub fn requires_certificate(&self) -> bool {
        matches!(self, ClientAuthPolicy::RequireAny | ClientAuthPolicy::RequireAndVerify)
    }

    /// Whether a presented certificate is checked against the trust pool.
    pub fn verifies_certificate(&self) -> bool {
        matches!(self, ClientAuthPolicy::VerifyIfGiven | ClientAuthPolicy::RequireAndVerify)
    }
}

impl FromStr for ClientAuthPolicy {
    type Err = CertificateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        ClientAuthPolicy::ALL
            .into_iter()
            .find(|policy| policy.as_str() == normalized)
            .ok_or_else(|| {
                CertificateError::Configuration(format!(
                    "unknown client auth policy '{}', expected one of none, request, require, verify, requireverify",
                    value
                ))
            })
    }
}

impl TryFrom<String> for ClientAuthPolicy {
    type Error = CertificateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClientAuthPolicy> for String {
    fn from(policy: ClientAuthPolicy) -> Self {
        policy.as_str().to_string()
    }
}

impl std::fmt::Display for ClientAuthPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
