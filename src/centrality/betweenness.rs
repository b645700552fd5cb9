//! Weighted betweenness centrality via Brandes' algorithm.
//!
//! For every source node, a Dijkstra pass computes shortest-path
//! distances, path multiplicities (sigma), and predecessor lists; a
//! back-propagation pass in reverse settle order then accumulates each
//! node's dependency. Summed over all sources and halved (the undirected
//! graph discovers each unordered pair from both endpoints), this yields
//! the betweenness score of every node.
//!
//! Edge weights are interpreted as distances, so co-occurrence graphs
//! must be weight-inverted first (see [`crate::graph::invert`]).
//!
//! Shortest paths are ordered lexicographically by `(distance, hops)`:
//! equal-distance paths with equal hop counts tie and accumulate sigma
//! (never a first-found tie-break), while a path with fewer hops wins an
//! equal-distance comparison. The hop component keeps the shortest-path
//! DAG acyclic when inversion produces zero-weight edges, and makes the
//! output deterministic and symmetric for symmetric inputs.
//!
//! Source passes are independent; above [`PARALLEL_THRESHOLD`] nodes
//! they run on the rayon pool with per-thread partial score vectors
//! merged afterwards. Cost is O(V * E log V).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rayon::prelude::*;
use tracing::instrument;

use super::BetweennessResult;
use crate::graph::csr::CsrGraph;

/// Node count above which source passes run in parallel.
const PARALLEL_THRESHOLD: usize = 64;

/// Min-heap entry ordered by (distance, hops, node).
#[derive(Debug, Clone, Copy, PartialEq)]
struct HeapEntry {
    dist: f64,
    hops: u32,
    node: u32,
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want the nearest node first.
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.hops.cmp(&self.hops))
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compute betweenness centrality for every node in the graph.
///
/// Scores count each unordered node pair once. A graph with fewer than
/// two nodes yields all-zero scores; disconnected components are
/// processed independently and contribute no cross-component centrality.
#[instrument(skip(graph), fields(nodes = graph.num_nodes))]
pub fn betweenness_centrality(graph: &CsrGraph) -> BetweennessResult {
    let n = graph.num_nodes;
    if n < 2 {
        return BetweennessResult::new(vec![0.0; n]);
    }

    let mut centrality = if n < PARALLEL_THRESHOLD {
        let mut scores = vec![0.0; n];
        for source in 0..n as u32 {
            accumulate_from_source(graph, source, &mut scores);
        }
        scores
    } else {
        (0..n as u32)
            .into_par_iter()
            .fold(
                || vec![0.0; n],
                |mut partial, source| {
                    accumulate_from_source(graph, source, &mut partial);
                    partial
                },
            )
            .reduce(
                || vec![0.0; n],
                |mut acc, partial| {
                    for (total, value) in acc.iter_mut().zip(partial) {
                        *total += value;
                    }
                    acc
                },
            )
    };

    // Each unordered pair was discovered from both endpoints as source.
    for score in &mut centrality {
        *score /= 2.0;
    }

    BetweennessResult::new(centrality)
}

/// One Brandes source pass: Dijkstra plus dependency back-propagation.
///
/// Adds this source's dependency contributions into `centrality`.
fn accumulate_from_source(graph: &CsrGraph, source: u32, centrality: &mut [f64]) {
    let n = graph.num_nodes;
    let s = source as usize;

    // (distance, hops) per node; sigma counts shortest paths from source.
    let mut dist: Vec<(f64, u32)> = vec![(f64::INFINITY, u32::MAX); n];
    let mut sigma: Vec<f64> = vec![0.0; n];
    let mut preds: Vec<Vec<u32>> = vec![Vec::new(); n];
    let mut settled = vec![false; n];
    let mut settle_order: Vec<u32> = Vec::with_capacity(n);

    dist[s] = (0.0, 0);
    sigma[s] = 1.0;

    let mut heap = BinaryHeap::new();
    heap.push(HeapEntry {
        dist: 0.0,
        hops: 0,
        node: source,
    });

    while let Some(entry) = heap.pop() {
        let v = entry.node as usize;
        if settled[v] {
            // Stale heap entry.
            continue;
        }
        settled[v] = true;
        settle_order.push(entry.node);

        let (d, h) = dist[v];
        for (neighbor, weight) in graph.neighbors(entry.node) {
            let u = neighbor as usize;
            if settled[u] {
                continue;
            }

            let candidate = (d + weight, h + 1);
            let current = dist[u];

            if candidate.0 < current.0 || (candidate.0 == current.0 && candidate.1 < current.1) {
                // Strictly better path: restart multiplicity bookkeeping.
                dist[u] = candidate;
                sigma[u] = sigma[v];
                preds[u].clear();
                preds[u].push(entry.node);
                heap.push(HeapEntry {
                    dist: candidate.0,
                    hops: candidate.1,
                    node: neighbor,
                });
            } else if candidate == current {
                // Tie: accumulate path multiplicity.
                sigma[u] += sigma[v];
                preds[u].push(entry.node);
            }
        }
    }

    // Back-propagate dependencies, farthest settled node first.
    let mut delta = vec![0.0; n];
    for &w in settle_order.iter().rev() {
        let wi = w as usize;
        for &p in &preds[wi] {
            let pi = p as usize;
            delta[pi] += sigma[pi] / sigma[wi] * (1.0 + delta[wi]);
        }
        if w != source {
            centrality[wi] += delta[wi];
        }
    }
}
