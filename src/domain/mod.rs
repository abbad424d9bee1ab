//! Domain Layer
//!
//! Contains the chain catalog, domain models, and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod catalog;
pub mod gateways;
pub mod models;

pub use gateways::{AddressBookSource, RegistryWriter};
pub use models::{AddressSections, ChainId, ChainRecord, ChainRecordData, ChainStatus, RegistryEntry};
