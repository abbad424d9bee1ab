//! Common test utilities for build tests
//!
//! Provides a throwaway workspace laid out like the repository root: an
//! `addresses/` tree, a `config/addresses/` override tree, and the artifact
//! path.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use serde_json::Value;
use tempfile::TempDir;

use chain_registry_builder::domain::models::chain::{ChainRecordData, ChainStatus};
use chain_registry_builder::infrastructure::driven_adapters::config::BuilderConfig;

/// Test workspace context
pub struct TestWorkspace {
    pub config: BuilderConfig,
    _dir: TempDir,
}

impl TestWorkspace {
    /// Create a new empty workspace in a temporary directory
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = BuilderConfig::rooted_at(dir.path());
        Self { config, _dir: dir }
    }

    /// Write an address book under the primary root
    pub fn primary_book(&self, chain_id: u64, file_name: &str, contents: &str) -> &Self {
        write_file(&self.config.addresses.primary_dir.join(chain_id.to_string()).join(file_name), contents);
        self
    }

    /// Write an address book under the override root
    pub fn override_book(&self, chain_id: u64, file_name: &str, contents: &str) -> &Self {
        write_file(&self.config.addresses.override_dir.join(chain_id.to_string()).join(file_name), contents);
        self
    }

    pub fn output_path(&self) -> &Path {
        &self.config.output.path
    }

    pub fn output_bytes(&self) -> Vec<u8> {
        fs::read(self.output_path()).expect("Failed to read artifact")
    }

    pub fn output_json(&self) -> Value {
        serde_json::from_slice(&self.output_bytes()).expect("Artifact is not valid JSON")
    }

    pub fn output_exists(&self) -> bool {
        self.output_path().exists()
    }
}

fn write_file(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().expect("path has a parent")).expect("Failed to create dir");
    fs::write(path, contents).expect("Failed to write file");
}

/// Chain record matching the reference Ethereum entry
pub fn ethereum() -> ChainRecordData {
    ChainRecordData {
        chain_id: 1,
        name: "ethereum".to_string(),
        viem_name: None,
        safe_base_url: "https://app.safe.global".to_string(),
        safe_address_prefix: "eth".to_string(),
        status: ChainStatus::Production,
    }
}

/// Arbitrary chain record
pub fn chain(chain_id: u64, name: &str, status: ChainStatus) -> ChainRecordData {
    ChainRecordData {
        chain_id,
        name: name.to_string(),
        viem_name: None,
        safe_base_url: "https://app.safe.global".to_string(),
        safe_address_prefix: name.to_lowercase(),
        status,
    }
}
