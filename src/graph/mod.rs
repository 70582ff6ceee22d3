//! Market graph for swap route discovery.
//!
//! This module provides the graph structure the routing engine is built on:
//! nodes are collateral tokens and edges are the markets connecting them.
//! Every routing table is a pure function of this graph and the hop bound.

pub mod core;
pub mod types;

// Re-export all public types for convenience
pub use core::MarketGraph;
pub use types::{ChainId, Market, MarketId, TokenAddress};

#[cfg(test)]
mod tests {
    use super::*;

    fn token(s: &str) -> TokenAddress {
        TokenAddress::from(s)
    }

    #[test]
    fn test_symmetric_insertion() {
        let markets = vec![Market::new("m1", "0xaaa", "0xbbb")];
        let graph = MarketGraph::from_markets(&markets);

        let a = token("0xaaa");
        let b = token("0xbbb");
        assert_eq!(
            graph.markets_between(&a, &b).unwrap(),
            &[MarketId::from("m1")]
        );
        assert_eq!(
            graph.markets_between(&b, &a).unwrap(),
            &[MarketId::from("m1")]
        );
        assert_eq!(graph.token_count(), 2);
        assert_eq!(graph.market_count(), 1);
    }

    #[test]
    fn test_same_collateral_market_is_skipped() {
        let markets = vec![Market::new("m1", "0xaaa", "0xaaa")];
        let graph = MarketGraph::from_markets(&markets);

        // No edge, no self-loop, not even a node.
        assert!(graph.is_empty());
        assert!(!graph.contains_token(&token("0xaaa")));
        assert_eq!(graph.market_count(), 0);
    }

    #[test]
    fn test_multiplicity_preserved_in_input_order() {
        let markets = vec![
            Market::new("m1", "0xaaa", "0xbbb"),
            Market::new("m2", "0xbbb", "0xaaa"),
        ];
        let graph = MarketGraph::from_markets(&markets);

        let a = token("0xaaa");
        let b = token("0xbbb");
        assert_eq!(
            graph.markets_between(&a, &b).unwrap(),
            &[MarketId::from("m1"), MarketId::from("m2")]
        );
        assert_eq!(graph.market_multiplicity(&a, &b), 2);
        assert_eq!(graph.market_multiplicity(&b, &a), 2);
    }

    #[test]
    fn test_duplicate_market_ids_not_deduplicated() {
        let markets = vec![
            Market::new("m1", "0xaaa", "0xbbb"),
            Market::new("m1", "0xaaa", "0xbbb"),
        ];
        let graph = MarketGraph::from_markets(&markets);

        assert_eq!(
            graph.markets_between(&token("0xaaa"), &token("0xbbb")).unwrap(),
            &[MarketId::from("m1"), MarketId::from("m1")]
        );
    }

    #[test]
    fn test_empty_market_list_yields_empty_graph() {
        let graph = MarketGraph::from_markets(&[]);
        assert!(graph.is_empty());
        assert_eq!(graph.token_count(), 0);
        assert_eq!(graph.market_count(), 0);
    }

    #[test]
    fn test_tokens_iterate_in_sorted_order() {
        let markets = vec![
            Market::new("m1", "0xccc", "0xaaa"),
            Market::new("m2", "0xbbb", "0xccc"),
        ];
        let graph = MarketGraph::from_markets(&markets);

        let tokens: Vec<&str> = graph.tokens().map(TokenAddress::as_str).collect();
        assert_eq!(tokens, vec!["0xaaa", "0xbbb", "0xccc"]);
    }

    #[test]
    fn test_add_token_registers_isolated_node() {
        let mut graph = MarketGraph::new();
        graph.add_token(token("0xaaa"));
        graph.add_token(token("0xaaa"));

        assert_eq!(graph.token_count(), 1);
        assert!(graph.contains_token(&token("0xaaa")));
        assert!(graph.neighbor_markets(&token("0xaaa")).unwrap().is_empty());
    }

    #[test]
    fn test_lookup_errors() {
        let graph = MarketGraph::from_markets(&[Market::new("m1", "0xaaa", "0xbbb")]);

        assert!(graph.neighbor_markets(&token("0xzzz")).is_err());
        assert!(graph.markets_between(&token("0xaaa"), &token("0xzzz")).is_err());
        assert_eq!(graph.market_multiplicity(&token("0xaaa"), &token("0xzzz")), 0);
    }
}
