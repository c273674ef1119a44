use serde::{Deserialize, Serialize};

/// How the server role treats certificates presented by clients.
///
/// The external string form is one of `none`, `request`, `require`,
/// `verify` or `requireverify`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(try_from = "String", into = "String")]
pub enum ClientAuthPolicy {
    /// No client certificate is requested.
    #[default]
    None,
    /// A certificate is requested but neither required nor verified.
    Request,
    /// A certificate is required but not verified against the trust pool.
    RequireAny,
    /// A certificate is optional, but when sent it must verify.
    VerifyIfGiven,
    /// A certificate is required and must verify.
    RequireAndVerify,
}
