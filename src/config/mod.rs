//! Configuration management module.
//!
//! Loads, saves and validates the TOML file describing where trust material
//! and the end-entity credential live, which client-auth policy servers use,
//! and how the file monitor is tuned.
//!
//! # Configuration Structure
//!
//! - **log_level**: level handed to `setup_logging`
//! - **trust**: bundled roots, CA files and CA directories
//! - **credential**: certificate/key paths, client auth policy, skip-verify flag
//! - **monitor**: debounce window and failure alert threshold
//!
//! # Example
//!
//! ```rust,ignore
//! use hotcert::config::structs::configuration::Configuration;
//! use hotcert::ssl::structs::credential_manager::CredentialManager;
//!
//! let config = Configuration::load_file("hotcert.toml")?;
//! let manager = CredentialManager::from_configuration(&config)?;
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
