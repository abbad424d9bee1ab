//! Driving Adapters
//!
//! Entry points that invoke the application's use cases.

pub mod build_job;
