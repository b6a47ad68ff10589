//! Full-tree walks: pattern search and longest repeated substring
//!
//! Pattern search deliberately visits every root-to-leaf path and tests the
//! full path label at each leaf. It does not use the pattern to prune the
//! descent, so its cost is O(tree size) for every query, and its result
//! order follows the insertion order of each node's edges.

use super::node::{Edge, Node, SuffixTree, ROOT};
use crate::index::trace::{NoopTracer, TraceObserver};
use crate::index::types::{LeafValue, NodeId};
use rayon::prelude::*;

/// Order in which a walk visits the edges of each node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildOrder {
    /// Edge insertion order
    Insertion,
    /// Lexicographic order of edge labels
    Sorted,
}

impl SuffixTree {
    /// Edges of `id` in the requested order
    fn ordered_edges(&self, id: NodeId, order: ChildOrder) -> Vec<&Edge> {
        match order {
            ChildOrder::Insertion => self.edges(id).iter().collect(),
            ChildOrder::Sorted => self.sorted_edges(id),
        }
    }

    /// Depth-first walk over every leaf, in pre-order.
    ///
    /// `visit` receives the leaf value and the concatenated labels of its
    /// root path (always a full sentinel-terminated suffix).
    pub fn walk_leaves<F>(&self, order: ChildOrder, mut visit: F)
    where
        F: FnMut(LeafValue, &str),
    {
        let mut path = String::new();
        // (node, path length before its incoming label, incoming label)
        let mut stack: Vec<(NodeId, usize, &str)> = self
            .ordered_edges(ROOT, order)
            .into_iter()
            .rev()
            .map(|e| (e.child, 0, e.label.as_str()))
            .collect();

        while let Some((id, base, label)) = stack.pop() {
            path.truncate(base);
            path.push_str(label);

            match self.node(id) {
                Some(Node::Leaf(value)) => visit(*value, &path),
                Some(Node::Internal(_)) => {
                    let depth = path.len();
                    stack.extend(
                        self.ordered_edges(id, order)
                            .into_iter()
                            .rev()
                            .map(|e| (e.child, depth, e.label.as_str())),
                    );
                }
                None => {}
            }
        }
    }

    /// Leaf values of every suffix starting with `pattern`.
    ///
    /// Results come in edge insertion order, not suffix order. An empty
    /// pattern matches every leaf.
    pub fn find_pattern(&self, pattern: &str) -> Vec<LeafValue> {
        self.find_pattern_traced(pattern, &mut NoopTracer)
    }

    /// Like [`find_pattern`](Self::find_pattern), reporting each match to `observer`
    pub fn find_pattern_traced<O>(&self, pattern: &str, observer: &mut O) -> Vec<LeafValue>
    where
        O: TraceObserver + ?Sized,
    {
        let mut leaves = Vec::new();

        self.walk_leaves(ChildOrder::Insertion, |leaf, path| {
            if path.starts_with(pattern) {
                observer.pattern_matched(pattern, leaf, path);
                leaves.push(leaf);
            }
        });

        leaves
    }

    /// Run [`find_pattern`](Self::find_pattern) for several patterns in parallel.
    ///
    /// Output order matches the order of `patterns`.
    pub fn find_patterns_parallel<S>(&self, patterns: &[S]) -> Vec<Vec<LeafValue>>
    where
        S: AsRef<str> + Sync,
    {
        patterns
            .par_iter()
            .map(|pattern| self.find_pattern(pattern.as_ref()))
            .collect()
    }

    /// Longest substring occurring at least twice in the text.
    ///
    /// Every internal node below the root marks a prefix shared by two or
    /// more suffixes; the deepest such path label wins. Edges are visited
    /// in sorted label order and ties keep the first path found. Returns an
    /// empty string when nothing repeats.
    pub fn longest_repeat(&self) -> String {
        let mut longest = String::new();
        let mut path = String::new();
        let mut stack: Vec<(NodeId, usize, &str)> = self
            .sorted_edges(ROOT)
            .into_iter()
            .rev()
            .map(|e| (e.child, 0, e.label.as_str()))
            .collect();

        while let Some((id, base, label)) = stack.pop() {
            // Leaves never mark a repeat
            let Some(Node::Internal(_)) = self.node(id) else {
                continue;
            };

            path.truncate(base);
            path.push_str(label);

            if path.chars().count() > longest.chars().count() {
                longest.clone_from(&path);
            }

            let depth = path.len();
            stack.extend(
                self.sorted_edges(id)
                    .into_iter()
                    .rev()
                    .map(|e| (e.child, depth, e.label.as_str())),
            );
        }

        longest
    }
}
