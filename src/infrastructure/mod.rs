//! Infrastructure Layer
//!
//! Contains all external concerns: driving adapters (the build job) and
//! driven adapters (filesystem sources, artifact writers, configuration).

pub mod driven_adapters;
pub mod driving_adapters;
