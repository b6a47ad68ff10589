//! Node arena for the compact suffix tree

use crate::index::suffix_array::SuffixArray;
use crate::index::types::{LeafValue, NodeId, SENTINEL};
use std::sync::OnceLock;

/// Handle of the root node (always internal)
pub const ROOT: NodeId = 0;

/// Labeled link from an internal node to one of its children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Non-empty substring of some sentinel-terminated suffix
    pub label: String,
    /// Child node in the arena
    pub child: NodeId,
}

/// A node of the tree
///
/// Internal nodes keep their outgoing edges in insertion order. No two
/// sibling labels share a first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Terminates exactly one suffix; holds its 1-based start offset
    Leaf(LeafValue),
    /// Branching point owning its outgoing edges
    Internal(Vec<Edge>),
}

impl Node {
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Outgoing edges (empty for leaves)
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        match self {
            Node::Leaf(_) => &[],
            Node::Internal(edges) => edges,
        }
    }
}

/// Compact suffix tree over an immutable text
///
/// Nodes live in a flat arena addressed by [`NodeId`]; the root sits at
/// [`ROOT`]. The tree is never mutated after construction. The suffix
/// array derived from it is built on first request and cached.
#[derive(Debug)]
pub struct SuffixTree {
    pub(crate) text: String,
    pub(crate) text_len: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) suffix_array: OnceLock<SuffixArray>,
}

impl SuffixTree {
    /// Original text (without sentinel)
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of chars in the text
    pub fn text_len(&self) -> usize {
        self.text_len
    }

    /// Total number of nodes including the root
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of leaves (equals the text length)
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    #[inline]
    pub fn root(&self) -> &Node {
        &self.nodes[ROOT]
    }

    /// Look up a node by handle
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Outgoing edges of `id` in insertion order
    #[inline]
    pub fn edges(&self, id: NodeId) -> &[Edge] {
        self.nodes.get(id).map(Node::edges).unwrap_or(&[])
    }

    /// Outgoing edges of `id` sorted by label
    pub fn sorted_edges(&self, id: NodeId) -> Vec<&Edge> {
        let mut edges: Vec<&Edge> = self.edges(id).iter().collect();
        edges.sort_unstable_by(|a, b| a.label.cmp(&b.label));
        edges
    }

    /// Sentinel-terminated suffix identified by a leaf value
    pub fn suffix(&self, leaf: LeafValue) -> Option<String> {
        if leaf == 0 || leaf > self.text_len {
            return None;
        }

        let mut suffix: String = self.text.chars().skip(leaf - 1).collect();
        suffix.push(SENTINEL);
        Some(suffix)
    }

    /// The cached suffix array, built on first call
    pub fn suffix_array(&self) -> &SuffixArray {
        self.suffix_array.get_or_init(|| SuffixArray::from_tree(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::suffix_tree::SuffixTreeBuilder;

    #[test]
    fn test_node_edges() {
        let leaf = Node::Leaf(3);
        assert!(leaf.is_leaf());
        assert!(leaf.edges().is_empty());

        let internal = Node::Internal(vec![Edge {
            label: "a".to_string(),
            child: 1,
        }]);
        assert!(!internal.is_leaf());
        assert_eq!(internal.edges().len(), 1);
    }

    #[test]
    fn test_suffix_lookup() {
        let tree = SuffixTreeBuilder::new("banana").unwrap().build();

        assert_eq!(tree.suffix(1).as_deref(), Some("banana\0"));
        assert_eq!(tree.suffix(6).as_deref(), Some("a\0"));
        assert_eq!(tree.suffix(0), None);
        assert_eq!(tree.suffix(7), None);
    }

    #[test]
    fn test_sorted_edges() {
        let tree = SuffixTreeBuilder::new("banana").unwrap().build();
        let labels: Vec<&str> = tree
            .sorted_edges(ROOT)
            .iter()
            .map(|e| e.label.as_str())
            .collect();

        assert_eq!(labels, vec!["a", "banana\0", "na"]);
    }

    #[test]
    fn test_suffix_array_is_cached() {
        let tree = SuffixTreeBuilder::new("abab").unwrap().build();
        let first = tree.suffix_array() as *const SuffixArray;
        let second = tree.suffix_array() as *const SuffixArray;
        assert_eq!(first, second);
    }
}
