//! Chain Domain Model
//!
//! Represents a supported blockchain network in the registry.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    /// Regex for validating Safe address prefixes (EIP-3770 short names)
    static ref SAFE_ADDRESS_PREFIX_REGEX: Regex = Regex::new(r"^[a-z0-9][a-z0-9-]*$").expect("valid regex");
}

/// Newtype wrapper for a numeric chain identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(u64);

impl ChainId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rollout status of a chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainStatus {
    Production,
    Beta,
    Testing,
}

impl std::fmt::Display for ChainStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            Self::Production => "production",
            Self::Beta => "beta",
            Self::Testing => "testing",
        };
        f.write_str(status)
    }
}

/// Validates a URL format (must start with http:// or https://)
fn validate_url(url: &str) -> Result<(), validator::ValidationError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        let mut error = validator::ValidationError::new("url");
        error.message = Some("URL must start with http:// or https://".into());
        return Err(error);
    }

    let without_protocol = url.strip_prefix("https://").or_else(|| url.strip_prefix("http://")).unwrap_or("");
    if without_protocol.is_empty() || without_protocol.starts_with('/') {
        let mut error = validator::ValidationError::new("url");
        error.message = Some("URL must include a valid host".into());
        return Err(error);
    }

    Ok(())
}

/// Validates a Safe address prefix (lowercase alphanumerics and dashes)
fn validate_address_prefix(prefix: &str) -> Result<(), validator::ValidationError> {
    if SAFE_ADDRESS_PREFIX_REGEX.is_match(prefix) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("address_prefix");
        error.message = Some("safe_address_prefix must be lowercase alphanumerics and dashes".into());
        Err(error)
    }
}

/// Declarative data describing a supported chain
#[derive(Debug, Clone, Validate)]
pub struct ChainRecordData {
    #[validate(range(min = 1, message = "chain_id must be at least 1"))]
    pub chain_id: u64,

    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "viem_name must be between 1 and 100 characters"))]
    pub viem_name: Option<String>,

    #[validate(length(max = 500, message = "safe_base_url must be at most 500 characters"))]
    #[validate(custom(function = "validate_url"))]
    pub safe_base_url: String,

    #[validate(custom(function = "validate_address_prefix"))]
    pub safe_address_prefix: String,

    pub status: ChainStatus,
}

/// Chain domain entity, immutable once declared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainRecord {
    chain_id: ChainId,
    name: String,
    viem_name: Option<String>,
    safe_base_url: String,
    safe_address_prefix: String,
    status: ChainStatus,
}

impl ChainRecord {
    /// Create a new ChainRecord from declarative data
    ///
    /// Callers are expected to have run `ChainRecordData::validate` first.
    #[must_use]
    pub fn new(data: ChainRecordData) -> Self {
        Self {
            chain_id: ChainId::new(data.chain_id),
            name: data.name,
            viem_name: data.viem_name,
            safe_base_url: data.safe_base_url,
            safe_address_prefix: data.safe_address_prefix,
            status: data.status,
        }
    }

    // Getters

    #[must_use]
    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn viem_name(&self) -> Option<&str> {
        self.viem_name.as_deref()
    }

    #[must_use]
    pub fn safe_base_url(&self) -> &str {
        &self.safe_base_url
    }

    #[must_use]
    pub fn safe_address_prefix(&self) -> &str {
        &self.safe_address_prefix
    }

    #[must_use]
    pub fn status(&self) -> ChainStatus {
        self.status
    }
}

impl From<ChainRecordData> for ChainRecord {
    fn from(data: ChainRecordData) -> Self {
        Self::new(data)
    }
}
