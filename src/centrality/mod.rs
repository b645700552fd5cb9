//! Centrality computation.

pub mod betweenness;

/// Result of a betweenness centrality computation.
#[derive(Debug, Clone)]
pub struct BetweennessResult {
    /// Scores for each node (indexed by node ID). Always >= 0.
    pub scores: Vec<f64>,
}

impl BetweennessResult {
    /// Create a new result.
    pub fn new(scores: Vec<f64>) -> Self {
        Self { scores }
    }

    /// Get the score for a specific node.
    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }

    /// Get top N nodes by score, ties broken by node ID.
    pub fn top_n(&self, n: usize) -> Vec<(u32, f64)> {
        let mut indexed: Vec<_> = self
            .scores
            .iter()
            .enumerate()
            .map(|(i, &s)| (i as u32, s))
            .collect();
        indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        indexed.truncate(n);
        indexed
    }
}
