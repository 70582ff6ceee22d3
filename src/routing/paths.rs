//! Bounded multi-path enumeration over the market graph.
//!
//! For every unordered pair of tokens this module enumerates every distinct
//! intermediate-token sequence connecting them within the shared hop bound.
//! This is deliberately a search problem, not a shortest-path problem: the
//! result keeps non-shortest routes so that downstream sizing logic can
//! compare alternatives by liquidity and price impact. Do not replace the
//! search with a single-shortest-path algorithm.

use crate::graph::{MarketGraph, TokenAddress};
use crate::SwapPathTable;
use itertools::Itertools;
use std::collections::{HashSet, VecDeque};

/// Enumerate intermediate-token paths for every unordered token pair.
///
/// Tokens are iterated in sorted order and each unordered pair is searched
/// once, stored under its lexicographically smaller endpoint. Pairs without
/// any surviving path are omitted from the table entirely.
pub fn enumerate_swap_paths(graph: &MarketGraph, max_hops: usize) -> SwapPathTable {
    let mut table = SwapPathTable::new();
    let mut pair_count = 0usize;

    for (from, to) in graph.tokens().tuple_combinations() {
        let paths = paths_between(graph, from, to, max_hops);
        if paths.is_empty() {
            continue;
        }
        pair_count += 1;
        table
            .entry(from.clone())
            .or_default()
            .insert(to.clone(), paths);
    }

    tracing::debug!(
        token_count = graph.token_count(),
        connected_pairs = pair_count,
        max_hops = max_hops,
        "Swap path table built"
    );

    table
}

/// Enumerate every distinct intermediate-token sequence from `from` to `to`
/// using at most `max_hops` edges.
///
/// The search walks token sequences breadth-first, so shorter routes are
/// discovered first; it keeps going after the first arrival and records every
/// walk that terminates at `to`, deduplicated by the identity of its
/// intermediate sequence. A direct market yields an empty sequence. Equal
/// endpoints yield no paths.
pub fn paths_between(
    graph: &MarketGraph,
    from: &TokenAddress,
    to: &TokenAddress,
    max_hops: usize,
) -> Vec<Vec<TokenAddress>> {
    if from == to {
        return Vec::new();
    }

    let mut found: Vec<Vec<TokenAddress>> = Vec::new();
    let mut recorded: HashSet<Vec<TokenAddress>> = HashSet::new();
    let mut queue: VecDeque<(&TokenAddress, Vec<&TokenAddress>)> = VecDeque::new();
    queue.push_back((from, vec![from]));

    while let Some((current, path)) = queue.pop_front() {
        if is_dominated_backtrack(graph, &path) {
            continue;
        }

        if current == to {
            let intermediates: Vec<TokenAddress> = path[1..path.len() - 1]
                .iter()
                .map(|token| (*token).clone())
                .collect();
            if recorded.insert(intermediates.clone()) {
                found.push(intermediates);
            }
        }

        // Edges taken so far is path.len() - 1; expansion continues even
        // from the target so longer routes are still discovered.
        if path.len() - 1 < max_hops {
            if let Some(edges) = graph.edges(current) {
                for neighbor in edges.keys() {
                    let mut extended = path.clone();
                    extended.push(neighbor);
                    queue.push_back((neighbor, extended));
                }
            }
        }
    }

    found
}

/// Loss-avoidance heuristic for a dequeued walk.
///
/// A walk that just returned to the token it was at two hops ago, across an
/// edge backed by exactly one market, is structurally dominated: the
/// round-trip through a single liquidity source cannot beat not taking it.
/// Such branches are discarded before they are recorded or expanded. A
/// redundant edge (two or more markets) is left alone.
fn is_dominated_backtrack(graph: &MarketGraph, path: &[&TokenAddress]) -> bool {
    if path.len() < 3 {
        return false;
    }

    let last = path[path.len() - 1];
    let second_last = path[path.len() - 2];
    let third_last = path[path.len() - 3];

    last == third_last && graph.market_multiplicity(last, second_last) == 1
}
