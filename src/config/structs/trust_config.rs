use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TrustConfig {
    /// Seed the pool with the bundled Mozilla root program.
    #[serde(default)]
    pub use_system_roots: bool,
    #[serde(default)]
    pub files: Vec<PathBuf>,
    /// Scanned after `files`, non-recursively, for `.crt` and `.pem` files.
    #[serde(default)]
    pub directories: Vec<PathBuf>,
}
