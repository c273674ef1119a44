//! Live TLS credential management.
//!
//! This module holds the trust pool, the current end-entity credential and
//! the machinery that keeps that credential fresh while a server runs.
//!
//! # Components
//!
//! - [`TrustPool`](structs::trust_pool::TrustPool): trusted CA certificates,
//!   loaded from PEM bytes, files or directories
//! - [`CredentialCell`](structs::credential_cell::CredentialCell): the
//!   current certificate chain and key, swapped atomically
//! - [`FileChangeMonitor`](structs::file_change_monitor::FileChangeMonitor):
//!   watches the certificate and key directories and reloads on change
//! - [`CredentialManager`](structs::credential_manager::CredentialManager):
//!   ties the above together and hands out server and client configurations
//!
//! # Hot Reload
//!
//! Server configurations resolve their certificate from the cell on every
//! handshake. When the files on disk are replaced, the monitor waits for the
//! debounce window to pass quietly, loads the new pair and publishes it. A
//! pair that fails to load is logged and the previous credential stays.
//!
//! # Example
//!
//! ```rust,ignore
//! use hotcert::ssl::enums::client_auth_policy::ClientAuthPolicy;
//! use hotcert::ssl::enums::trust_source::TrustSource;
//! use hotcert::ssl::structs::credential_manager::CredentialManager;
//!
//! let manager = CredentialManager::new(false);
//! manager.configure_trust([TrustSource::directory("/etc/hotcert/ca")])?;
//! manager.set_credential_files("/etc/hotcert/tls.crt", "/etc/hotcert/tls.key")?;
//! manager.set_client_auth_policy("verify".parse::<ClientAuthPolicy>()?);
//!
//! let server = manager.server_config()?.rustls_config()?;
//! ```

/// Enumerations for errors, policies and lifecycle states.
pub mod enums;

/// Trait and method implementations.
pub mod impls;

/// Data structures for trust, credentials, monitoring and produced configurations.
pub mod structs;

/// Constants and PEM/path helpers.
#[allow(clippy::module_inception)]
pub mod ssl;
