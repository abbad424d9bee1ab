//! Error Types
//!
//! Domain, repository and use case errors for the registry build.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::models::chain::ChainId;

/// Domain-level errors representing business rule violations
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Chain with chain_id {0} is declared more than once")]
    ChainIdConflict(ChainId),

    #[error("Address book '{file}' for chain {chain_id} is not a JSON object")]
    NonObjectAddressBook { chain_id: ChainId, file: String },
}

/// Repository-level errors for filesystem access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in '{}': {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize registry: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RepositoryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Flatten validator field errors into `"<chain>.<field>: <message>"` lines
#[must_use]
pub fn validation_messages(chain: &str, errors: &validator::ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |e| {
                format!(
                    "{}.{}: {}",
                    chain,
                    field,
                    e.message.as_ref().map_or("invalid", |m| m.as_ref())
                )
            })
        })
        .collect();
    messages.sort();
    messages
}
