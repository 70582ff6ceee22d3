//! Builder pattern for MarketGraph

use crate::graph::{Market, MarketGraph, TokenAddress};

/// Builder for creating MarketGraph instances with a fluent API
pub struct MarketGraphBuilder {
    tokens: Vec<TokenAddress>,
    markets: Vec<Market>,
}

impl MarketGraphBuilder {
    /// Create a new MarketGraphBuilder
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            markets: Vec::new(),
        }
    }

    /// Register a token even if no market references it.
    ///
    /// Tokens referenced by markets are added automatically; this is only
    /// needed for isolated tokens.
    pub fn add_token(mut self, token: impl Into<TokenAddress>) -> Self {
        self.tokens.push(token.into());
        self
    }

    /// Add a market connecting two tokens.
    pub fn add_market(mut self, market: Market) -> Self {
        self.markets.push(market);
        self
    }

    /// Add multiple markets.
    pub fn add_markets<I>(mut self, markets: I) -> Self
    where
        I: IntoIterator<Item = Market>,
    {
        self.markets.extend(markets);
        self
    }

    /// Build the MarketGraph.
    ///
    /// Markets are inserted in the order they were added; same-collateral
    /// markets are skipped by the graph itself.
    pub fn build(self) -> MarketGraph {
        let mut graph = MarketGraph::from_markets(&self.markets);
        for token in self.tokens {
            graph.add_token(token);
        }
        graph
    }
}

impl Default for MarketGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_assembles_graph() {
        let graph = MarketGraphBuilder::new()
            .add_market(Market::new("m1", "0xa", "0xb"))
            .add_markets(vec![
                Market::new("m2", "0xb", "0xc"),
                Market::new("m3", "0xd", "0xd"),
            ])
            .add_token("0xz")
            .build();

        assert_eq!(graph.token_count(), 4); // a, b, c + isolated z; m3 skipped
        assert_eq!(graph.market_count(), 2);
        assert!(graph.contains_token(&TokenAddress::from("0xz")));
        assert!(!graph.contains_token(&TokenAddress::from("0xd")));
    }
}
