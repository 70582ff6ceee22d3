//! Core types for the market graph.
//!
//! This module contains the fundamental types used throughout the routing engine:
//! - Identifier newtypes for tokens and markets
//! - The chain identifier alias
//! - The market record that configuration supplies per chain

use serde::{Deserialize, Serialize};
use std::fmt;

/// Chain identifier for per-chain market configuration.
pub type ChainId = u64;

/// On-chain address of a collateral token.
///
/// The engine attaches no meaning to the address beyond identity and
/// ordering; the lexicographic `Ord` impl drives every deterministic
/// iteration in the routing tables.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenAddress(String);

impl TokenAddress {
    /// Create a new token address.
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Get the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the address is empty (rejected by catalog validation).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TokenAddress {
    fn from(address: &str) -> Self {
        Self(address.to_owned())
    }
}

impl From<String> for TokenAddress {
    fn from(address: String) -> Self {
        Self(address)
    }
}

/// On-chain address of a market (the pool connecting two collateral tokens).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketId(String);

impl MarketId {
    /// Create a new market identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is empty (rejected by catalog validation).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for MarketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MarketId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for MarketId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A market connecting two collateral tokens.
///
/// The long/short roles matter to the exchange but not to the graph:
/// routing only cares about token identity, and every market contributes
/// a symmetric edge between its two collateral tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    /// The on-chain address identifying this market.
    pub id: MarketId,
    /// The long collateral token.
    pub long_token: TokenAddress,
    /// The short collateral token.
    pub short_token: TokenAddress,
}

impl Market {
    /// Create a new market record.
    pub fn new(
        id: impl Into<MarketId>,
        long_token: impl Into<TokenAddress>,
        short_token: impl Into<TokenAddress>,
    ) -> Self {
        Self {
            id: id.into(),
            long_token: long_token.into(),
            short_token: short_token.into(),
        }
    }

    /// Whether both collateral sides are the same token.
    ///
    /// Same-collateral markets contribute no edge to the graph.
    pub fn is_same_collateral(&self) -> bool {
        self.long_token == self.short_token
    }

    /// The two collateral tokens of this market.
    pub fn tokens(&self) -> [&TokenAddress; 2] {
        [&self.long_token, &self.short_token]
    }
}
