//! Registry Writer Gateway
//!
//! Abstract trait defining how the consolidated registry is persisted.

#[cfg(test)]
use mockall::automock;

use crate::domain::models::address_book::RegistryEntry;
use crate::shared::errors::RepositoryError;

/// Persists the consolidated registry
#[cfg_attr(test, automock)]
pub trait RegistryWriter {
    /// Replace any prior artifact with the given entries
    fn write(&self, entries: &[RegistryEntry]) -> Result<(), RepositoryError>;
}
