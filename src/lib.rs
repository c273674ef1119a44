//! # hotcert
//!
//! Live TLS credential management on top of rustls.
//!
//! ## Overview
//!
//! hotcert keeps a trust pool of CA certificates and an end-entity
//! certificate/key pair, hands out server and client TLS configurations built
//! from them, and rotates the end-entity certificate when its files change on
//! disk. Handshakes in flight keep the certificate they started with; new
//! handshakes pick up the replacement without a restart.
//!
//! ## Features
//!
//! - **Trust Pool**: CA certificates from PEM bytes, files or `.crt`/`.pem` directories
//! - **Atomic rotation**: readers always see a complete credential, never a torn one
//! - **File monitor**: watches the parent directories, debounces bursts, keeps the old
//!   credential when a reload fails
//! - **Client auth**: `none`, `request`, `require`, `verify` and `requireverify`
//! - **TLS 1.2 floor** on every produced configuration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hotcert::ssl::enums::trust_source::TrustSource;
//! use hotcert::ssl::structs::credential_manager::CredentialManager;
//!
//! let manager = CredentialManager::new(false);
//! manager.configure_trust([TrustSource::file("ca.pem")])?;
//! manager.set_credential_files("tls.crt", "tls.key")?;
//!
//! let server_config = manager.server_config()?.rustls_config()?;
//! // hand `server_config` to the listener
//!
//! manager.close();
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup and filesystem helpers
//! - [`config`] - TOML configuration
//! - [`ssl`] - Trust pool, credentials, file monitor and the credential manager

/// Common utilities and shared functionality.
///
/// Contains logging setup and the file helpers used when loading trust
/// material and credentials.
pub mod common;

/// Configuration management module.
///
/// Handles loading, saving and validating the TOML configuration that
/// describes trust sources, credential files and monitor tuning.
pub mod config;

/// TLS credential management module.
///
/// Provides the trust pool, the credential cell, the file change monitor and
/// the credential manager producing server and client configurations.
pub mod ssl;
