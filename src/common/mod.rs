//! Common utilities and shared functionality.
//!
//! Logging setup and the small filesystem helpers used by the trust pool,
//! the credential loader and the manager.
//!
//! # Example
//!
//! ```rust,ignore
//! use hotcert::common::common::setup_logging;
//!
//! setup_logging("info");
//! ```

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;
