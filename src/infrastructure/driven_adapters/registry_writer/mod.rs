//! Registry Writer Implementations

mod dto;
mod json_file;

pub use dto::RegistryEntryDto;
pub use json_file::JsonFileRegistryWriter;
