//! Per-chain precomputation of routing tables.
//!
//! For every configured chain the three-step pipeline runs once, eagerly, at
//! startup: build the market graph, derive the reachable-token table, derive
//! the swap path table. The resulting [`RoutingCache`] is immutable and safe
//! for unsynchronized concurrent reads; construct it at the composition root
//! and hand references to consumers.
//!
//! There is no recomputation trigger. If the market configuration changes,
//! build a fresh `RoutingCache` off to the side and atomically swap the
//! reference; never mutate the tables in place.

use crate::config::MarketCatalog;
use crate::errors::GraphError;
use crate::graph::{ChainId, Market, MarketGraph};
use crate::routing::{enumerate_swap_paths, reachable_tokens};
use crate::{GraphResult, ReachableTokenTable, SwapPathTable, MAX_EDGE_PATH_LENGTH};
use rayon::prelude::*;
use std::collections::HashMap;
use std::fmt;

/// The three derived tables for a single chain.
///
/// All three are pure functions of the chain's market list and the hop
/// bound; a rebuild replaces them wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainRoutingTables {
    /// The chain these tables were built for.
    pub chain_id: ChainId,
    /// Token adjacency derived from the market list.
    pub graph: MarketGraph,
    /// Token -> tokens reachable within the hop bound.
    pub reachable: ReachableTokenTable,
    /// Canonical pair -> intermediate-token sequences.
    pub swap_paths: SwapPathTable,
}

impl ChainRoutingTables {
    /// Run the three-step pipeline for one chain.
    ///
    /// The steps are strictly sequential: both derived tables read the
    /// completed graph.
    pub fn build(chain_id: ChainId, markets: &[Market], max_hops: usize) -> Self {
        let graph = MarketGraph::from_markets(markets);
        let reachable = reachable_tokens(&graph, max_hops);
        let swap_paths = enumerate_swap_paths(&graph, max_hops);

        tracing::info!(
            chain_id = chain_id,
            token_count = graph.token_count(),
            market_count = graph.market_count(),
            connected_pairs = swap_paths.values().map(|inner| inner.len()).sum::<usize>(),
            "Routing tables built for chain"
        );

        Self {
            chain_id,
            graph,
            reachable,
            swap_paths,
        }
    }

    /// Summary counts for logging and monitoring.
    pub fn statistics(&self) -> TableStatistics {
        TableStatistics {
            chain_id: self.chain_id,
            token_count: self.graph.token_count(),
            market_count: self.graph.market_count(),
            connected_pair_count: self.swap_paths.values().map(|inner| inner.len()).sum(),
            route_count: self
                .swap_paths
                .values()
                .flat_map(|inner| inner.values())
                .map(Vec::len)
                .sum(),
        }
    }
}

/// Summary statistics for one chain's routing tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStatistics {
    /// The chain the tables were built for.
    pub chain_id: ChainId,
    /// Number of tokens in the graph.
    pub token_count: usize,
    /// Number of non-degenerate markets in the graph.
    pub market_count: usize,
    /// Number of token pairs with at least one route.
    pub connected_pair_count: usize,
    /// Total number of routes across all pairs.
    pub route_count: usize,
}

impl fmt::Display for TableStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TableStatistics {{ chain: {}, tokens: {}, markets: {}, connected_pairs: {}, routes: {} }}",
            self.chain_id,
            self.token_count,
            self.market_count,
            self.connected_pair_count,
            self.route_count
        )
    }
}

/// Process-wide routing tables, one set per configured chain.
///
/// Built once from a validated [`MarketCatalog`]; read-only thereafter.
#[derive(Debug, Clone)]
pub struct RoutingCache {
    max_hops: usize,
    chains: HashMap<ChainId, ChainRoutingTables>,
}

impl RoutingCache {
    /// Build routing tables for every chain in the catalog under the shared
    /// hop bound [`MAX_EDGE_PATH_LENGTH`].
    pub fn build(catalog: &MarketCatalog) -> Self {
        Self::build_with_hop_bound(catalog, MAX_EDGE_PATH_LENGTH)
    }

    /// Build with an explicit hop bound.
    ///
    /// Chains share no state, so their pipelines run in parallel. The bound
    /// applies to both derived tables; consumers assume a single horizon.
    pub fn build_with_hop_bound(catalog: &MarketCatalog, max_hops: usize) -> Self {
        let chains: HashMap<ChainId, ChainRoutingTables> = catalog
            .chains()
            .par_iter()
            .map(|(&chain_id, markets)| {
                (chain_id, ChainRoutingTables::build(chain_id, markets, max_hops))
            })
            .collect();

        tracing::info!(
            chain_count = chains.len(),
            max_hops = max_hops,
            "Routing cache built"
        );

        Self { max_hops, chains }
    }

    /// Get the routing tables for a chain.
    ///
    /// # Errors
    ///
    /// Returns an error if the chain was not in the catalog.
    pub fn tables(&self, chain_id: ChainId) -> GraphResult<&ChainRoutingTables> {
        self.chains
            .get(&chain_id)
            .ok_or(GraphError::ChainNotFound { chain_id })
    }

    /// The hop bound the cache was built under.
    pub fn max_hops(&self) -> usize {
        self.max_hops
    }

    /// Configured chain ids in sorted order.
    pub fn chain_ids(&self) -> Vec<ChainId> {
        let mut ids: Vec<ChainId> = self.chains.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Number of chains with built tables.
    pub fn chain_count(&self) -> usize {
        self.chains.len()
    }
}
