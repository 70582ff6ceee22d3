//! Bounded reachability analysis over the market graph.
//!
//! For every token in the graph an independent breadth-first search reports
//! which other tokens can be reached within the shared hop bound. Downstream
//! sizing logic uses the table to decide whether a swap between two tokens is
//! routable at all before it bothers enumerating concrete paths.

use crate::graph::{MarketGraph, TokenAddress};
use crate::ReachableTokenTable;
use std::collections::{HashSet, VecDeque};

/// Build the reachable-token table for every token in the graph.
///
/// Tokens are processed in sorted order. Each entry lists the tokens
/// reachable from the key within `max_hops` edges, in breadth-first
/// visitation order, with the origin itself excluded. An isolated token
/// yields an empty list.
pub fn reachable_tokens(graph: &MarketGraph, max_hops: usize) -> ReachableTokenTable {
    let mut table = ReachableTokenTable::new();
    for origin in graph.tokens() {
        table.insert(origin.clone(), reachable_from(graph, origin, max_hops));
    }

    tracing::debug!(
        token_count = table.len(),
        max_hops = max_hops,
        "Reachable-token table built"
    );

    table
}

/// Bounded breadth-first search from a single origin token.
///
/// The visited check happens on dequeue, so neighbors are enqueued even when
/// already visited; the redundant entries are bounded by the hop cap and keep
/// the loop simple. A branch stops expanding once its hop count reaches
/// `max_hops`, but the terminal token still counts as reachable.
pub fn reachable_from(
    graph: &MarketGraph,
    origin: &TokenAddress,
    max_hops: usize,
) -> Vec<TokenAddress> {
    let mut visited: HashSet<&TokenAddress> = HashSet::new();
    let mut visitation_order: Vec<&TokenAddress> = Vec::new();
    let mut queue: VecDeque<(&TokenAddress, usize)> = VecDeque::new();
    queue.push_back((origin, 0));

    while let Some((current, hops)) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }
        visitation_order.push(current);

        if hops >= max_hops {
            continue;
        }

        if let Some(edges) = graph.edges(current) {
            for neighbor in edges.keys() {
                queue.push_back((neighbor, hops + 1));
            }
        }
    }

    // A token is never reachable from itself through normal hops.
    visitation_order
        .into_iter()
        .filter(|token| *token != origin)
        .cloned()
        .collect()
}
