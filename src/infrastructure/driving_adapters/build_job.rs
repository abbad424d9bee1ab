//! Registry Build Job
//!
//! Wires the filesystem adapters into the build use case and runs it once.

use std::sync::Arc;

use crate::application::use_cases::registry::BuildRegistryUseCase;
use crate::domain::catalog::supported_chains;
use crate::domain::models::address_book::RegistryEntry;
use crate::domain::models::chain::ChainRecordData;
use crate::infrastructure::driven_adapters::{BuilderConfig, FsAddressBookSource, JsonFileRegistryWriter};
use crate::shared::errors::UseCaseError;

/// Build the registry for the supported chain catalog
///
/// # Errors
///
/// Returns the first error encountered; no artifact is written in that case.
pub fn run(config: &BuilderConfig) -> Result<Vec<RegistryEntry>, UseCaseError> {
    run_with_chains(config, supported_chains())
}

/// Build the registry for an explicit chain list
///
/// # Errors
///
/// Returns the first error encountered; no artifact is written in that case.
pub fn run_with_chains(config: &BuilderConfig, chains: Vec<ChainRecordData>) -> Result<Vec<RegistryEntry>, UseCaseError> {
    tracing::debug!(
        primary_dir = %config.addresses.primary_dir.display(),
        override_dir = %config.addresses.override_dir.display(),
        output = %config.output.path.display(),
        "Starting registry build"
    );

    let source = Arc::new(FsAddressBookSource::new(config.addresses.roots()));
    let writer = Arc::new(JsonFileRegistryWriter::new(config.output.path.clone()));

    BuildRegistryUseCase::new(source, writer).execute(chains)
}
