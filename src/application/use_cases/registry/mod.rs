//! Registry Use Cases
//!
//! Use cases for assembling and persisting the chain registry.

mod build_registry;

pub use build_registry::BuildRegistryUseCase;
