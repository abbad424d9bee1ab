//! Address Book Source Implementations

mod filesystem;

pub use filesystem::FsAddressBookSource;
