//! Address Book Source Gateway
//!
//! Abstract trait defining where per-chain address books come from.

use crate::domain::models::address_book::AddressBookFile;
use crate::domain::models::chain::ChainId;
use crate::shared::errors::RepositoryError;

/// Source of address books for a chain
pub trait AddressBookSource {
    /// Load every address book belonging to a chain, in merge order
    ///
    /// Books from lower-precedence locations come first. A chain with no
    /// address books yields an empty list.
    fn load(&self, chain_id: ChainId) -> Result<Vec<AddressBookFile>, RepositoryError>;
}
