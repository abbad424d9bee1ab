//! Address Book Domain Model
//!
//! Address books are JSON objects of contract bindings, grouped per chain into
//! named sections. Sections are merged shallowly: later books overwrite keys of
//! earlier ones wholesale.

use serde::Serialize;
use serde_json::{Map, Value};

use super::chain::{ChainId, ChainRecord};
use crate::shared::errors::DomainError;

/// File name suffix identifying an address book
pub const ADDRESS_BOOK_SUFFIX: &str = "Addresses.json";

/// Suffix appended to the file base name to form a section key
pub const SECTION_SUFFIX: &str = "Addrs";

/// Parsed contents of one address book file
pub type AddressBook = Map<String, Value>;

/// An address book as read from storage, not yet checked to be an object
#[derive(Debug, Clone, PartialEq)]
pub struct AddressBookFile {
    pub file_name: String,
    pub contents: Value,
}

impl AddressBookFile {
    #[must_use]
    pub fn new(file_name: impl Into<String>, contents: Value) -> Self {
        Self {
            file_name: file_name.into(),
            contents,
        }
    }

    /// Section key for this file, `None` if the name lacks the address book suffix
    #[must_use]
    pub fn section(&self) -> Option<String> {
        section_name(&self.file_name)
    }

    /// Unwrap the top-level object
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NonObjectAddressBook` when the top-level value is not an object.
    pub fn into_book(self, chain_id: ChainId) -> Result<AddressBook, DomainError> {
        match self.contents {
            Value::Object(book) => Ok(book),
            _ => Err(DomainError::NonObjectAddressBook {
                chain_id,
                file: self.file_name,
            }),
        }
    }
}

/// Whether a directory entry name denotes an address book
#[must_use]
pub fn is_address_book(file_name: &str) -> bool {
    file_name.ends_with(ADDRESS_BOOK_SUFFIX)
}

/// Derive the section key for an address book file name
///
/// `VaultAddresses.json` becomes `vaultAddrs` and `EVKFactoryAddresses.json`
/// becomes `eVKFactoryAddrs`. Only the first character is lower-cased.
#[must_use]
pub fn section_name(file_name: &str) -> Option<String> {
    let base = file_name.strip_suffix(ADDRESS_BOOK_SUFFIX)?;
    let raw = format!("{base}{SECTION_SUFFIX}");

    let mut chars = raw.chars();
    let section = match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => raw,
    };
    Some(section)
}

/// Address book sections of a single chain, keyed by section name
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AddressSections(Map<String, Value>);

impl AddressSections {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a book into a section
    ///
    /// Returns `true` when the section already existed and was merged into.
    pub fn merge(&mut self, section: String, book: AddressBook) -> bool {
        match self.0.get_mut(&section) {
            Some(Value::Object(existing)) => {
                for (key, value) in book {
                    existing.insert(key, value);
                }
                true
            }
            _ => {
                self.0.insert(section, Value::Object(book));
                false
            }
        }
    }

    #[must_use]
    pub fn get(&self, section: &str) -> Option<&Value> {
        self.0.get(section)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A declared chain together with its merged address sections
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryEntry {
    chain: ChainRecord,
    addresses: AddressSections,
}

impl RegistryEntry {
    #[must_use]
    pub fn new(chain: ChainRecord, addresses: AddressSections) -> Self {
        Self { chain, addresses }
    }

    #[must_use]
    pub fn chain(&self) -> &ChainRecord {
        &self.chain
    }

    #[must_use]
    pub fn addresses(&self) -> &AddressSections {
        &self.addresses
    }
}
