use crate::ssl::structs::credential_cell::CredentialCell;
use std::sync::Arc;

pub struct DynamicCertificateResolver {
    pub(crate) cell: Arc<CredentialCell>,
}
