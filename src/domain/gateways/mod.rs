//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod address_book_source;
pub mod registry_writer;

pub use address_book_source::AddressBookSource;
pub use registry_writer::RegistryWriter;
