//! Graph and routing table lookup errors.

use crate::graph::{ChainId, TokenAddress};

/// Errors that can occur during graph and cache lookups
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Token not found in graph: {address}")]
    TokenNotFound { address: TokenAddress },

    #[error("No markets connect {from} and {to}")]
    NoMarketsBetween {
        from: TokenAddress,
        to: TokenAddress,
    },

    #[error("No routing tables for chain {chain_id}")]
    ChainNotFound { chain_id: ChainId },
}
