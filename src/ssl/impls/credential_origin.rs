use crate::ssl::enums::credential_origin::CredentialOrigin;

impl std::fmt::Display for CredentialOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialOrigin::Files { cert_path, key_path } => {
                write!(f, "{} + {}", cert_path.display(), key_path.display())
            }
            CredentialOrigin::Memory => write!(f, "in-memory credential"),
        }
    }
}
