//! Chain Catalog
//!
//! The declarative list of supported chains, in artifact order.

use super::models::chain::{ChainRecordData, ChainStatus};

fn chain(
    chain_id: u64,
    name: &str,
    viem_name: Option<&str>,
    safe_base_url: &str,
    safe_address_prefix: &str,
    status: ChainStatus,
) -> ChainRecordData {
    ChainRecordData {
        chain_id,
        name: name.to_string(),
        viem_name: viem_name.map(str::to_string),
        safe_base_url: safe_base_url.to_string(),
        safe_address_prefix: safe_address_prefix.to_string(),
        status,
    }
}

/// All chains included in the registry
#[must_use]
#[allow(clippy::unreadable_literal)]
pub fn supported_chains() -> Vec<ChainRecordData> {
    use ChainStatus::{Production, Testing};

    vec![
        // Production
        chain(1, "ethereum", Some("mainnet"), "https://app.safe.global", "eth", Production),
        chain(8453, "base", None, "https://app.safe.global", "base", Production),
        chain(1923, "swell", Some("swellchain"), "https://safe.optimism.io", "swell-l2", Production),
        chain(146, "sonic", None, "https://app.safe.global", "sonic", Production),
        chain(60808, "BOB", Some("bob"), "https://safe.gobob.xyz", "bob", Production),
        chain(80094, "berachain", None, "https://safe.berachain.com", "berachain", Production),
        chain(43114, "avalanche", None, "https://app.safe.global", "avax", Production),
        chain(56, "BSC", Some("bsc"), "https://app.safe.global", "bnb", Production),
        chain(130, "unichain", None, "https://app.safe.global", "unichain", Production),
        chain(42161, "arbitrum", None, "https://app.safe.global", "arb1", Production),
        chain(239, "TAC", Some("tac"), "https://safe.tac.build", "tac", Production),
        chain(59144, "linea", None, "https://app.safe.global", "linea", Production),
        chain(999, "hyperEVM", None, "https://app.safe.global", "hyper-evm", Production),
        chain(9745, "plasma", None, "https://app.safe.global", "plasma", Production),
        chain(143, "monad", None, "https://app.safe.global", "monad", Production),
        // Beta: none yet
        // Testing
        chain(10, "optimism", None, "https://app.safe.global", "oeth", Testing),
        chain(100, "gnosis", None, "https://app.safe.global", "gno", Testing),
        chain(137, "polygon", None, "https://app.safe.global", "matic", Testing),
        chain(21_000_000, "corn", None, "https://safe.usecorn.com", "corn", Testing),
        chain(2818, "morph", None, "https://safe.morphl2.io/", "morph", Testing),
        chain(480, "worldchain", None, "https://app.safe.global", "wc", Testing),
        chain(5000, "mantle", None, "https://app.safe.global", "mnt", Testing),
        chain(57073, "ink", None, "https://app.safe.global", "ink", Testing),
    ]
}
