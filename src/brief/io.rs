//! File I/O for brief files.

use super::Brief;
use crate::error::{MercatoError, Result};
use std::path::Path;

impl Brief {
    /// Load a brief from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            MercatoError::UserError(format!(
                "failed to read brief file '{}': {} (run `mercato init` to create one)",
                path.display(),
                e
            ))
        })?;
        serde_yaml::from_str(&content).map_err(|e| {
            MercatoError::ConfigError(format!(
                "failed to parse brief file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Atomically save the brief to disk.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| MercatoError::ConfigError(format!("failed to serialize brief: {}", e)))?;
        crate::fs::atomic_write_file(path, &content)
    }
}
