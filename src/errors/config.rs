//! Market catalog validation errors.

use crate::graph::{ChainId, MarketId};

/// Errors raised while validating a market catalog.
///
/// The routing engine assumes well-formed input; malformed markets are
/// rejected here, before any graph is built.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Market at position {index} on chain {chain_id} has an empty market id")]
    EmptyMarketId { chain_id: ChainId, index: usize },

    #[error("Market {market_id} on chain {chain_id} references an empty token address")]
    EmptyTokenAddress {
        chain_id: ChainId,
        market_id: MarketId,
    },
}
