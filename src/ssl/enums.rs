pub mod certificate_error;
pub mod client_auth_policy;
pub mod credential_origin;
pub mod manager_state;
pub mod monitor_state;
pub mod trust_source;
