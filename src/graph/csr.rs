//! Compressed Sparse Row (CSR) graph representation.
//!
//! CSR stores each node's edges contiguously, which is what the
//! betweenness engine wants: every Dijkstra pass iterates neighbor
//! lists heavily. Edges are sorted per node so iteration order (and
//! therefore output) is deterministic.

use super::builder::GraphBuilder;

/// An immutable weighted graph in Compressed Sparse Row format.
///
/// The undirected adjacency appears in both directions, mirroring the
/// builder it was finalized from.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of nodes.
    pub num_nodes: usize,
    /// Row pointers: node i's edges are at indices row_ptr[i]..row_ptr[i+1].
    pub row_ptr: Vec<usize>,
    /// Column indices (neighbor node IDs) for each edge.
    pub col_idx: Vec<u32>,
    /// Edge weights, parallel to `col_idx`.
    pub weights: Vec<f64>,
    /// Word for each node, in node-ID order.
    pub words: Vec<String>,
}

impl CsrGraph {
    /// Finalize a [`GraphBuilder`] into CSR format.
    pub fn from_builder(builder: &GraphBuilder) -> Self {
        let num_nodes = builder.node_count();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::new();
        let mut weights = Vec::new();
        let mut words = Vec::with_capacity(num_nodes);

        row_ptr.push(0);

        for (_, node) in builder.nodes() {
            words.push(node.word.clone());

            // Sort edges for deterministic iteration.
            let mut edges: Vec<_> = node.edges.iter().map(|(&k, &v)| (k, v)).collect();
            edges.sort_by_key(|(k, _)| *k);

            for (neighbor, weight) in edges {
                col_idx.push(neighbor);
                weights.push(weight);
            }

            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
            words,
        }
    }

    /// Iterate over the neighbors of a node with edge weights.
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    /// Degree of a node.
    pub fn degree(&self, node: u32) -> usize {
        self.row_ptr[node as usize + 1] - self.row_ptr[node as usize]
    }

    /// The word for a node.
    pub fn word(&self, node: u32) -> &str {
        &self.words[node as usize]
    }

    /// Node ID for a word (linear scan - use sparingly).
    pub fn node_id(&self, word: &str) -> Option<u32> {
        self.words.iter().position(|w| w == word).map(|i| i as u32)
    }

    /// Maximum edge weight in the graph; 0.0 when edgeless.
    pub fn max_edge_weight(&self) -> f64 {
        self.weights.iter().copied().fold(0.0, f64::max)
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Number of logical undirected edges.
    pub fn edge_count(&self) -> usize {
        self.col_idx.len() / 2
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            weights: Vec::new(),
            words: Vec::new(),
        }
    }
}
