//! Route discovery algorithms over the market graph.
//!
//! Two derived tables are produced from a built [`MarketGraph`](crate::graph::MarketGraph):
//! the reachable-token table and the swap path table. Both are governed by the
//! same hop bound ([`MAX_EDGE_PATH_LENGTH`](crate::MAX_EDGE_PATH_LENGTH));
//! downstream consumers assume the two tables were built under the same
//! horizon, so the bound is never tuned per call.

pub mod paths;
pub mod reachability;

// Re-export the table constructors for convenience
pub use paths::{enumerate_swap_paths, paths_between};
pub use reachability::{reachable_from, reachable_tokens};
