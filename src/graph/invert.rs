//! Edge weight inversion: co-occurrence strength to shortest-path distance.
//!
//! Centrality is computed over distances (smaller = closer), while raw
//! co-occurrence counts are strengths (larger = closer). Subtracting each
//! weight from the graph's maximum turns the strongest ties into the
//! shortest distances. The transform is lossy; callers that still need
//! strengths must keep the original graph.

use super::csr::CsrGraph;

/// Produce a copy of the graph with every edge weight `w` replaced by
/// `max_weight - w`.
///
/// The node and edge structure is unchanged. An edgeless graph is
/// returned as-is (there is no maximum to subtract from).
pub fn invert_weights(graph: &CsrGraph) -> CsrGraph {
    let mut inverted = graph.clone();
    if inverted.weights.is_empty() {
        return inverted;
    }

    let max_weight = graph.max_edge_weight();
    for weight in &mut inverted.weights {
        *weight = max_weight - *weight;
    }

    inverted
}
