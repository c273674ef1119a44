pub mod configuration;
pub mod configuration_error;
pub mod monitor_config;
