//! JSON File Registry Writer
//!
//! Writes the registry as a single minified JSON array. The document is
//! written to a sibling temporary file first and renamed over the target, so
//! the artifact is either fully replaced or left untouched.

use std::fs;
use std::path::PathBuf;

use super::dto::RegistryEntryDto;
use crate::domain::gateways::RegistryWriter;
use crate::domain::models::address_book::RegistryEntry;
use crate::shared::errors::RepositoryError;

/// File-backed implementation of RegistryWriter
pub struct JsonFileRegistryWriter {
    path: PathBuf,
}

impl JsonFileRegistryWriter {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Serialize entries to the artifact's byte form
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Serialization` if serialization fails.
    pub fn render(entries: &[RegistryEntry]) -> Result<Vec<u8>, RepositoryError> {
        let dtos: Vec<RegistryEntryDto<'_>> = entries.iter().map(RegistryEntryDto::from).collect();
        Ok(serde_json::to_vec(&dtos)?)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl RegistryWriter for JsonFileRegistryWriter {
    fn write(&self, entries: &[RegistryEntry]) -> Result<(), RepositoryError> {
        let bytes = Self::render(entries)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| RepositoryError::io(parent, e))?;
        }

        let temp_path = self.temp_path();
        if let Err(e) = fs::write(&temp_path, &bytes) {
            let _ = fs::remove_file(&temp_path);
            return Err(RepositoryError::io(&temp_path, e));
        }
        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(RepositoryError::io(&self.path, e));
        }

        tracing::info!(path = %self.path.display(), bytes = bytes.len(), "Registry written");
        Ok(())
    }
}
