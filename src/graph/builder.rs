//! Mutable co-occurrence graph builder.
//!
//! Uses FxHashMap adjacency for O(1) edge lookups during construction.
//! The adjacency is stored in both directions but represents a single
//! logical undirected edge per unordered word pair; weights accumulate
//! as co-occurrences recur across phrases.

use rustc_hash::FxHashMap;

/// A node in the graph builder.
#[derive(Debug, Clone)]
pub struct BuilderNode {
    /// The word this node represents.
    pub word: String,
    /// Adjacency list: neighbor node ID -> accumulated edge weight.
    pub edges: FxHashMap<u32, f64>,
}

impl BuilderNode {
    fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            edges: FxHashMap::default(),
        }
    }
}

/// A mutable undirected weighted graph keyed by words.
///
/// Node IDs are assigned in first-encounter order, which downstream
/// ranking relies on for stable tie-breaking.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    /// Maps word -> node ID.
    word_to_id: FxHashMap<String, u32>,
    /// Node storage, indexed by ID.
    nodes: Vec<BuilderNode>,
}

impl GraphBuilder {
    /// Create a new empty graph builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a co-occurrence graph from per-phrase word lists.
    ///
    /// Every word becomes a node (so single-word phrases still register),
    /// and every unordered pair of words within one phrase increments its
    /// edge weight by 1.
    pub fn from_phrases<S: AsRef<str>>(word_lists: &[Vec<S>]) -> Self {
        let mut builder = Self::new();

        for words in word_lists {
            let ids: Vec<u32> = words
                .iter()
                .map(|w| builder.get_or_create_node(w.as_ref()))
                .collect();

            for (i, &a) in ids.iter().enumerate() {
                for &b in &ids[i + 1..] {
                    builder.increment_edge(a, b, 1.0);
                }
            }
        }

        builder
    }

    /// Get or create a node for the given word, returning its ID.
    pub fn get_or_create_node(&mut self, word: &str) -> u32 {
        if let Some(&id) = self.word_to_id.get(word) {
            return id;
        }

        let id = self.nodes.len() as u32;
        self.word_to_id.insert(word.to_string(), id);
        self.nodes.push(BuilderNode::new(word));
        id
    }

    /// Increment the undirected edge weight between two nodes.
    ///
    /// Creates the edge at `weight` if absent. Self-loops are ignored.
    pub fn increment_edge(&mut self, a: u32, b: u32, weight: f64) {
        if a == b {
            return;
        }

        // One logical edge, mirrored in both adjacency lists.
        if let Some(node) = self.nodes.get_mut(a as usize) {
            *node.edges.entry(b).or_insert(0.0) += weight;
        }
        if let Some(node) = self.nodes.get_mut(b as usize) {
            *node.edges.entry(a).or_insert(0.0) += weight;
        }
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of logical undirected edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    /// Whether the graph has a node for `word`.
    pub fn contains_word(&self, word: &str) -> bool {
        self.word_to_id.contains_key(word)
    }

    /// Node ID for a word, if present.
    pub fn node_id(&self, word: &str) -> Option<u32> {
        self.word_to_id.get(word).copied()
    }

    /// Iterate over nodes in ID (first-encounter) order.
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lists(phrases: &[&[&str]]) -> Vec<Vec<String>> {
        phrases
            .iter()
            .map(|p| p.iter().map(|w| w.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_empty_phrase_list_yields_empty_graph() {
        let graph = GraphBuilder::from_phrases(&lists(&[]));
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_single_word_phrase_is_node_without_edges() {
        let graph = GraphBuilder::from_phrases(&lists(&[&["compatibility"]]));

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.contains_word("compatibility"));
    }

    #[test]
    fn test_pair_creates_single_undirected_edge() {
        let graph = GraphBuilder::from_phrases(&lists(&[&["linear", "constraints"]]));

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);

        let a = graph.node_id("linear").unwrap();
        let b = graph.node_id("constraints").unwrap();
        // Mirrored adjacency, consistent weight.
        assert_eq!(graph.nodes[a as usize].edges[&b], 1.0);
        assert_eq!(graph.nodes[b as usize].edges[&a], 1.0);
    }

    #[test]
    fn test_recurring_pair_accumulates_weight() {
        let graph = GraphBuilder::from_phrases(&lists(&[
            &["linear", "constraints"],
            &["linear", "constraints", "solver"],
        ]));

        let a = graph.node_id("linear").unwrap();
        let b = graph.node_id("constraints").unwrap();
        assert_eq!(graph.nodes[a as usize].edges[&b], 2.0);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_no_self_loops() {
        let graph = GraphBuilder::from_phrases(&lists(&[&["linear", "linear"]]));

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_triangle_within_one_phrase() {
        let graph = GraphBuilder::from_phrases(&lists(&[&["a", "b", "c"]]));

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_node_ids_follow_encounter_order() {
        let graph = GraphBuilder::from_phrases(&lists(&[&["c", "a"], &["b", "a"]]));

        assert_eq!(graph.node_id("c"), Some(0));
        assert_eq!(graph.node_id("a"), Some(1));
        assert_eq!(graph.node_id("b"), Some(2));
    }
}
