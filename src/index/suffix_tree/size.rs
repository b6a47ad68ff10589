//! Memory footprint estimate for the suffix tree

use super::node::{Edge, Node, SuffixTree};
use crate::index::types::SizeEstimate;
use std::mem::size_of;

/// Fixed cost charged for every node in the arena
pub const NODE_OVERHEAD: usize = size_of::<Node>();

/// Fixed cost charged for every edge, on top of its label bytes
pub const EDGE_OVERHEAD: usize = size_of::<Edge>();

impl SuffixTree {
    /// Estimate the tree's memory footprint.
    ///
    /// Every node costs [`NODE_OVERHEAD`] and every edge costs
    /// [`EDGE_OVERHEAD`] plus the byte length of its label. Each node and
    /// edge is counted exactly once. For an empty text the per-char figure
    /// is NaN.
    pub fn estimate_size(&self) -> SizeEstimate {
        let total: usize = self
            .nodes
            .iter()
            .map(|node| {
                NODE_OVERHEAD
                    + node
                        .edges()
                        .iter()
                        .map(|edge| EDGE_OVERHEAD + edge.label.len())
                        .sum::<usize>()
            })
            .sum();

        SizeEstimate::new(total, self.text_len)
    }
}
