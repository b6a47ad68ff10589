//! Suffix tree builder
//!
//! Builds a compact suffix tree by inserting every suffix of the text in
//! order of increasing start offset:
//! 1. Descend from the root along edges that fully match the suffix
//! 2. Split the first partially matching edge, if any
//! 3. Hang a new leaf with the unmatched rest of the suffix
//!
//! Each insertion starts over at the root and compares labels char by
//! char, so construction is O(n²). There are no suffix links.

use super::node::{Edge, Node, SuffixTree, ROOT};
use crate::error::{Error, Result};
use crate::index::trace::{NoopTracer, TraceObserver};
use crate::index::types::{LeafValue, NodeId, TreeConfig, SENTINEL};
use std::sync::OnceLock;

/// Incremental builder for [`SuffixTree`]
pub struct SuffixTreeBuilder<O = NoopTracer> {
    text: String,
    /// Byte offset of every char in `text`
    starts: Vec<usize>,
    nodes: Vec<Node>,
    /// Char offset of the next suffix to insert
    next_offset: usize,
    observer: O,
}

impl SuffixTreeBuilder<NoopTracer> {
    /// Create a builder with the default configuration
    pub fn new(text: &str) -> Result<Self> {
        Self::with_config(text, &TreeConfig::default())
    }

    /// Create a builder, validating `text` against `config`
    pub fn with_config(text: &str, config: &TreeConfig) -> Result<Self> {
        if let Some(position) = text.chars().position(|c| c == SENTINEL) {
            return Err(Error::ReservedSentinel { position });
        }

        let starts: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();

        if config.max_text_chars > 0 && starts.len() > config.max_text_chars {
            return Err(Error::TextTooLong {
                len: starts.len(),
                max: config.max_text_chars,
            });
        }

        Ok(Self {
            text: text.to_string(),
            starts,
            nodes: vec![Node::Internal(Vec::new())],
            next_offset: 0,
            observer: NoopTracer,
        })
    }
}

impl<O: TraceObserver> SuffixTreeBuilder<O> {
    /// Replace the trace observer
    pub fn with_observer<P: TraceObserver>(self, observer: P) -> SuffixTreeBuilder<P> {
        SuffixTreeBuilder {
            text: self.text,
            starts: self.starts,
            nodes: self.nodes,
            next_offset: self.next_offset,
            observer,
        }
    }

    /// Total number of suffixes that will be inserted
    pub fn suffix_count(&self) -> usize {
        self.starts.len()
    }

    /// Number of suffixes inserted so far
    pub fn inserted(&self) -> usize {
        self.next_offset
    }

    /// Insert the next suffix. Returns `false` once all suffixes are in.
    pub fn insert_next(&mut self) -> bool {
        if self.next_offset >= self.starts.len() {
            return false;
        }

        let offset = self.next_offset;
        let mut suffix = String::with_capacity(self.text.len() - self.starts[offset] + 1);
        suffix.push_str(&self.text[self.starts[offset]..]);
        suffix.push(SENTINEL);

        self.insert_suffix(&suffix, offset + 1);
        self.next_offset += 1;
        true
    }

    /// Insert all remaining suffixes and return the finished tree
    pub fn build(mut self) -> SuffixTree {
        while self.insert_next() {}
        self.finish()
    }

    /// Return the tree as built so far
    pub fn finish(self) -> SuffixTree {
        let leaves = self.nodes.iter().filter(|n| n.is_leaf()).count();
        log::debug!(
            "built suffix tree: {} suffixes, {} nodes, {} leaves",
            self.next_offset,
            self.nodes.len(),
            leaves
        );

        SuffixTree {
            text_len: self.starts.len(),
            text: self.text,
            nodes: self.nodes,
            suffix_array: OnceLock::new(),
        }
    }

    fn insert_suffix(&mut self, suffix: &str, leaf: LeafValue) {
        let (node, rest) = self.insertion_search(suffix);

        let child = self.nodes.len();
        self.nodes.push(Node::Leaf(leaf));
        self.observer.leaf_inserted(rest, leaf);

        match &mut self.nodes[node] {
            Node::Internal(edges) => edges.push(Edge {
                label: rest.to_string(),
                child,
            }),
            Node::Leaf(_) => unreachable!("insertion search never stops at a leaf"),
        }
    }

    /// Find the node where `suffix` branches off, splitting an edge if the
    /// branch point falls inside one.
    ///
    /// Returns the node and the part of `suffix` still to be inserted.
    fn insertion_search<'s>(&mut self, suffix: &'s str) -> (NodeId, &'s str) {
        let mut node = ROOT;
        let mut remaining = suffix;

        loop {
            let Some((index, prefix_len)) = find_max_prefix(&self.nodes[node], remaining) else {
                return (node, remaining);
            };

            let edge = &self.nodes[node].edges()[index];
            if prefix_len == edge.label.len() {
                // Whole label matched: follow the edge
                node = edge.child;
                remaining = &remaining[prefix_len..];
                continue;
            }

            let split = self.split_edge(node, index, prefix_len);
            return (split, &remaining[prefix_len..]);
        }
    }

    /// Split edge `index` of `node` after `at` bytes.
    ///
    /// The parent keeps `label[..at]` pointing to a new internal node, which
    /// owns the original child under `label[at..]`. Returns the new node.
    fn split_edge(&mut self, node: NodeId, index: usize, at: usize) -> NodeId {
        let mid = self.nodes.len();

        let Edge { mut label, child } = match &mut self.nodes[node] {
            Node::Internal(edges) => edges.remove(index),
            Node::Leaf(_) => unreachable!("only internal nodes own edges"),
        };

        let rest = label.split_off(at);
        self.observer.edge_split(&label, &rest);

        self.nodes.push(Node::Internal(vec![Edge { label: rest, child }]));
        if let Node::Internal(edges) = &mut self.nodes[node] {
            edges.push(Edge { label, child: mid });
        }

        mid
    }
}

/// Build a suffix tree with default configuration and no tracing
pub fn build_suffix_tree(text: &str) -> Result<SuffixTree> {
    Ok(SuffixTreeBuilder::new(text)?.build())
}

/// Find the edge of `node` sharing a non-empty prefix with `pattern`.
///
/// Returns the edge index and the common prefix length in bytes. Sibling
/// labels never share a first char, so at most one edge can qualify.
fn find_max_prefix(node: &Node, pattern: &str) -> Option<(usize, usize)> {
    let first = pattern.chars().next()?;

    node.edges()
        .iter()
        .position(|edge| edge.label.starts_with(first))
        .map(|index| (index, common_prefix_len(&node.edges()[index].label, pattern)))
}

/// Length in bytes of the longest common prefix of `a` and `b`
fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .find(|((_, ca), cb)| ca != cb)
        .map(|((i, _), _)| i)
        .unwrap_or_else(|| a.len().min(b.len()))
}
