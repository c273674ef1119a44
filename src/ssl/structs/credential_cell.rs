use crate::ssl::structs::credential::Credential;
use arc_swap::ArcSwapOption;

/// Single-slot holder for the current [`Credential`].
pub struct CredentialCell {
    pub(crate) current: ArcSwapOption<Credential>,
}
