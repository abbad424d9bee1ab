//! Use Cases
//!
//! Application-specific business rules.

pub mod registry;
