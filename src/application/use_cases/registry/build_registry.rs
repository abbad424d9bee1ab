//! Build Registry Use Case
//!
//! Validates the declared chains, merges each chain's address books into
//! sections, and persists the consolidated registry.

use std::collections::HashSet;
use std::sync::Arc;

use validator::Validate;

use crate::domain::gateways::{AddressBookSource, RegistryWriter};
use crate::domain::models::address_book::{AddressSections, RegistryEntry};
use crate::domain::models::chain::{ChainId, ChainRecord, ChainRecordData};
use crate::shared::errors::{validation_messages, DomainError, UseCaseError};

/// Use case for building the chain registry artifact
pub struct BuildRegistryUseCase {
    address_book_source: Arc<dyn AddressBookSource>,
    registry_writer: Arc<dyn RegistryWriter>,
}

impl BuildRegistryUseCase {
    /// Create a new BuildRegistryUseCase
    #[must_use]
    pub fn new(address_book_source: Arc<dyn AddressBookSource>, registry_writer: Arc<dyn RegistryWriter>) -> Self {
        Self {
            address_book_source,
            registry_writer,
        }
    }

    /// Execute the use case
    ///
    /// Nothing is written unless every chain was assembled successfully.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` if any declared chain is invalid.
    /// Returns `UseCaseError::Domain` on duplicate chain ids or a non-object address book.
    /// Returns `UseCaseError::Repository` if an address book cannot be read or parsed,
    /// or the registry cannot be written.
    pub fn execute(&self, chains: Vec<ChainRecordData>) -> Result<Vec<RegistryEntry>, UseCaseError> {
        tracing::info!(chains = chains.len(), "Building chain registry");

        let chains = Self::validate(chains)?;
        let entries = self.assemble(&chains)?;
        self.registry_writer.write(&entries)?;

        tracing::info!(chains = entries.len(), "Chain registry built successfully");
        Ok(entries)
    }

    /// Merge address books for each chain without persisting anything
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` for a non-object address book and
    /// `UseCaseError::Repository` when an address book cannot be loaded.
    pub fn assemble(&self, chains: &[ChainRecord]) -> Result<Vec<RegistryEntry>, UseCaseError> {
        chains
            .iter()
            .map(|chain| {
                let addresses = self.collect_sections(chain.chain_id())?;
                tracing::info!(
                    chain_id = %chain.chain_id(),
                    name = chain.name(),
                    sections = addresses.len(),
                    "Chain address books merged"
                );
                Ok(RegistryEntry::new(chain.clone(), addresses))
            })
            .collect()
    }

    fn collect_sections(&self, chain_id: ChainId) -> Result<AddressSections, UseCaseError> {
        let mut sections = AddressSections::new();

        for file in self.address_book_source.load(chain_id)? {
            let Some(section) = file.section() else {
                tracing::debug!(chain_id = %chain_id, file = %file.file_name, "Skipping non address book file");
                continue;
            };
            let file_name = file.file_name.clone();
            let book = file.into_book(chain_id)?;

            if sections.merge(section.clone(), book) {
                tracing::debug!(chain_id = %chain_id, section = %section, file = %file_name, "Merged into existing section");
            } else {
                tracing::debug!(chain_id = %chain_id, section = %section, file = %file_name, "Added section");
            }
        }

        Ok(sections)
    }

    fn validate(chains: Vec<ChainRecordData>) -> Result<Vec<ChainRecord>, UseCaseError> {
        let errors: Vec<String> = chains
            .iter()
            .filter_map(|chain| chain.validate().err().map(|e| validation_messages(&chain.name, &e)))
            .flatten()
            .collect();
        if !errors.is_empty() {
            tracing::warn!(errors = errors.len(), "Chain catalog failed validation");
            return Err(UseCaseError::Validation(errors));
        }

        let mut seen = HashSet::with_capacity(chains.len());
        for chain in &chains {
            let chain_id = ChainId::new(chain.chain_id);
            if !seen.insert(chain_id) {
                tracing::warn!(chain_id = %chain_id, "Chain id declared more than once");
                return Err(DomainError::ChainIdConflict(chain_id).into());
            }
        }

        Ok(chains.into_iter().map(ChainRecord::from).collect())
    }
}
