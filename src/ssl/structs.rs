pub mod accept_any_client_cert;
pub mod certificate_paths;
pub mod client_tls_config;
pub mod credential;
pub mod credential_cell;
pub mod credential_manager;
pub mod dynamic_certificate_resolver;
pub mod file_change_monitor;
pub mod insecure_server_cert_verifier;
pub mod manager_settings;
pub mod monitor_settings;
pub mod monitor_stats;
pub mod reload_worker;
pub mod server_tls_config;
pub mod static_client_cert_resolver;
pub mod trust_pool;
