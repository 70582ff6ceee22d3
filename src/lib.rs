//! Perps Swap Router
//!
//! Multi-hop swap route discovery engine for a decentralized perpetuals
//! exchange. Given the markets configured for a chain, the library derives
//! which tokens are swappable into which within a bounded number of hops and
//! every distinct intermediate-token route connecting each token pair. Order
//! routing, fee and slippage estimation, and UI route selection all consume
//! these tables.
//!
//! # Architecture Overview
//!
//! The library is organized into several key modules:
//!
//! - **`graph`**: market graph modeling the token network a chain's markets induce
//! - **`routing`**: bounded reachability analysis and multi-path enumeration
//! - **`cache`**: eager per-chain precomputation of the routing tables
//! - **`config`**: market catalog loading and validation
//! - **`builders`**: builder patterns for graph construction
//! - **`errors`**: error handling and reporting
//!
//! # Core Concepts
//!
//! - **Market Graph**: an undirected multigraph where nodes are collateral
//!   tokens and edges are the markets connecting them; several markets may
//!   connect the same pair
//! - **Reachable-Token Table**: for every token, the tokens reachable within
//!   the hop bound
//! - **Swap Path Table**: for every unordered token pair, every distinct
//!   intermediate-token route within the hop bound, pruned of walks that
//!   immediately backtrack across a single-market edge
//!
//! # Thread Safety
//!
//! The pipeline is synchronous and allocation-only; there is no I/O beyond
//! catalog loading. Once a [`cache::RoutingCache`] is built it is immutable
//! and safe for unsynchronized concurrent reads from any number of callers.

pub mod builders;
pub mod cache;
pub mod config;
pub mod errors;
pub mod graph;
pub mod routing;

// Re-export the main Result type and error enum for convenience
pub use errors::{Result, RoutingError};

// Re-export the primary entry points for convenience
pub use builders::MarketGraphBuilder;
pub use cache::{ChainRoutingTables, RoutingCache};
pub use config::MarketCatalog;
pub use graph::{ChainId, Market, MarketGraph, MarketId, TokenAddress};

/// Shared hop bound governing both the reachability analyzer and the path
/// enumerator. The two tables must be built under the same horizon, so this
/// is a single constant rather than a per-call knob.
pub const MAX_EDGE_PATH_LENGTH: usize = 3;

// Type aliases for commonly used complex types
pub type ReachableTokenTable = std::collections::BTreeMap<TokenAddress, Vec<TokenAddress>>;
pub type SwapPathTable = std::collections::BTreeMap<
    TokenAddress,
    std::collections::BTreeMap<TokenAddress, Vec<Vec<TokenAddress>>>,
>;

// Module-specific result types for better ergonomics
pub type GraphResult<T> = std::result::Result<T, errors::GraphError>;
pub type ConfigResult<T> = std::result::Result<T, errors::ConfigError>;
