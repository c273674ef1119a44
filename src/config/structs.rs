//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Trust pool sources.
pub mod trust_config;

/// End-entity credential and client auth settings.
pub mod credential_config;

/// File monitor tuning.
pub mod monitor_config;
