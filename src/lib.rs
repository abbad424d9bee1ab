//! Chain Registry Builder
//!
//! Merges per-chain JSON address books into a static registry of supported
//! blockchain networks and writes one consolidated JSON artifact. Laid out
//! following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
