//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod address_book;
pub mod chain;

pub use address_book::{AddressBook, AddressBookFile, AddressSections, RegistryEntry};
pub use chain::{ChainId, ChainRecord, ChainRecordData, ChainStatus};
