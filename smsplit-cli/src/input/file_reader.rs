//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Reads message files as UTF-8 text
pub struct FileReader;

impl FileReader {
    /// Read a whole file as one message
    pub fn read_text(path: &Path) -> Result<String> {
        match fs::read_to_string(path) {
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(CliError::FileNotFound(path.display().to_string()).into())
            }
            result => result
                .with_context(|| format!("Failed to read message file: {}", path.display())),
        }
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }
}
