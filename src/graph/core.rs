//! Core market graph implementation.
//!
//! This module contains the main `MarketGraph` struct and its methods for
//! modeling the token network a chain's markets induce.

use super::types::{Market, MarketId, TokenAddress};
use crate::errors::GraphError;
use crate::GraphResult;
use std::collections::BTreeMap;

/// Undirected multigraph over collateral tokens.
///
/// The `MarketGraph` represents a network where:
/// - Nodes are collateral tokens
/// - Edges are markets that let a user swap between a token pair
/// - Several markets may connect the same pair; their identifiers accumulate
///   in insertion order
///
/// Adjacency is kept in sorted maps so that neighbor iteration, and therefore
/// every table derived from the graph, is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketGraph {
    /// token -> (neighbor token -> market ids connecting the pair)
    adjacency: BTreeMap<TokenAddress, BTreeMap<TokenAddress, Vec<MarketId>>>,
    /// Number of non-degenerate markets inserted.
    market_count: usize,
}

impl MarketGraph {
    /// Create a new empty market graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a market list.
    ///
    /// Each market with distinct collateral tokens contributes a symmetric
    /// edge; same-collateral markets are skipped entirely. Market identifiers
    /// are accumulated per pair in input order and never deduplicated.
    /// An empty list yields an empty graph.
    pub fn from_markets(markets: &[Market]) -> Self {
        let mut graph = Self::new();
        for market in markets {
            graph.insert_market(market);
        }

        tracing::debug!(
            input_markets = markets.len(),
            token_count = graph.token_count(),
            market_count = graph.market_count(),
            "Market graph built"
        );

        graph
    }

    // ================================
    // Construction Methods
    // ================================

    /// Insert a single market into the graph.
    ///
    /// Same-collateral markets are ignored: they let a user swap a token
    /// "into itself" and contribute nothing to routing.
    pub fn insert_market(&mut self, market: &Market) {
        if market.is_same_collateral() {
            tracing::debug!(
                market_id = %market.id,
                token = %market.long_token,
                "Skipping same-collateral market"
            );
            return;
        }

        self.insert_directed(&market.long_token, &market.short_token, &market.id);
        self.insert_directed(&market.short_token, &market.long_token, &market.id);
        self.market_count += 1;
    }

    /// Register a token without any edges.
    ///
    /// Tokens normally enter the graph through `insert_market`; this exists
    /// for isolated tokens that still need a (necessarily empty) reachability
    /// entry. Inserting an already-present token is a no-op.
    pub fn add_token(&mut self, token: TokenAddress) {
        self.adjacency.entry(token).or_default();
    }

    /// Append a market id to one direction of the adjacency map.
    fn insert_directed(&mut self, from: &TokenAddress, to: &TokenAddress, id: &MarketId) {
        self.adjacency
            .entry(from.clone())
            .or_default()
            .entry(to.clone())
            .or_default()
            .push(id.clone());
    }

    // ================================
    // Query Methods
    // ================================

    /// Get the number of tokens in the graph.
    pub fn token_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Get the number of non-degenerate markets inserted.
    pub fn market_count(&self) -> usize {
        self.market_count
    }

    /// Whether the graph has no tokens.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Whether a token is present in the graph.
    pub fn contains_token(&self, token: &TokenAddress) -> bool {
        self.adjacency.contains_key(token)
    }

    /// Iterate all tokens in sorted order.
    pub fn tokens(&self) -> impl Iterator<Item = &TokenAddress> + Clone {
        self.adjacency.keys()
    }

    // ================================
    // Navigation Methods
    // ================================

    /// Get the adjacency map of a token: neighbor -> connecting market ids,
    /// with neighbors in sorted order.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not present in the graph.
    pub fn neighbor_markets(
        &self,
        token: &TokenAddress,
    ) -> GraphResult<&BTreeMap<TokenAddress, Vec<MarketId>>> {
        self.adjacency
            .get(token)
            .ok_or_else(|| GraphError::TokenNotFound {
                address: token.clone(),
            })
    }

    /// Get the market ids connecting two tokens, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if no market connects the pair.
    pub fn markets_between(
        &self,
        from: &TokenAddress,
        to: &TokenAddress,
    ) -> GraphResult<&[MarketId]> {
        self.adjacency
            .get(from)
            .and_then(|neighbors| neighbors.get(to))
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::NoMarketsBetween {
                from: from.clone(),
                to: to.clone(),
            })
    }

    /// Number of markets connecting two tokens (0 when unconnected).
    ///
    /// A multiplicity of exactly 1 marks a zero-redundancy edge for the
    /// path enumerator's backtrack pruning.
    pub fn market_multiplicity(&self, from: &TokenAddress, to: &TokenAddress) -> usize {
        self.adjacency
            .get(from)
            .and_then(|neighbors| neighbors.get(to))
            .map_or(0, Vec::len)
    }

    /// Infallible adjacency lookup for the traversal algorithms.
    pub(crate) fn edges(
        &self,
        token: &TokenAddress,
    ) -> Option<&BTreeMap<TokenAddress, Vec<MarketId>>> {
        self.adjacency.get(token)
    }
}
