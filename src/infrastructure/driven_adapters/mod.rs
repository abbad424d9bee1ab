//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Address book sources
//! - Registry writers
//! - Configuration

pub mod address_book_source;
pub mod config;
pub mod registry_writer;

pub use address_book_source::FsAddressBookSource;
pub use config::BuilderConfig;
pub use registry_writer::JsonFileRegistryWriter;
