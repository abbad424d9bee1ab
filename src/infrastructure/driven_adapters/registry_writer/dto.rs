//! Registry DTOs
//!
//! Serialized shape of one registry artifact element.

use serde::Serialize;

use crate::domain::models::address_book::{AddressSections, RegistryEntry};
use crate::domain::models::chain::{ChainId, ChainStatus};

/// Registry entry as written to the artifact
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryEntryDto<'a> {
    pub chain_id: ChainId,
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viem_name: Option<&'a str>,
    pub safe_base_url: &'a str,
    pub safe_address_prefix: &'a str,
    pub status: ChainStatus,
    pub addresses: &'a AddressSections,
}

impl<'a> From<&'a RegistryEntry> for RegistryEntryDto<'a> {
    fn from(entry: &'a RegistryEntry) -> Self {
        let chain = entry.chain();
        Self {
            chain_id: chain.chain_id(),
            name: chain.name(),
            viem_name: chain.viem_name(),
            safe_base_url: chain.safe_base_url(),
            safe_address_prefix: chain.safe_address_prefix(),
            status: chain.status(),
            addresses: entry.addresses(),
        }
    }
}
