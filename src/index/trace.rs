//! Trace points for construction and search
//!
//! Observers are notified at fixed points (edge split, leaf insertion,
//! match found). They only watch: nothing they do feeds back into the
//! algorithms.

use super::types::{display_label, LeafValue};

/// Receives trace events from the suffix tree builder and searches
pub trait TraceObserver {
    /// An edge was split into `prefix` (kept on the parent) and `rest`
    /// (hung below a new internal node)
    fn edge_split(&mut self, _prefix: &str, _rest: &str) {}

    /// A leaf was attached under the edge `label`
    fn leaf_inserted(&mut self, _label: &str, _leaf: LeafValue) {}

    /// A search found `pattern` at the root path `path` ending in `leaf`
    fn pattern_matched(&mut self, _pattern: &str, _leaf: LeafValue, _path: &str) {}
}

impl<T: TraceObserver + ?Sized> TraceObserver for &mut T {
    fn edge_split(&mut self, prefix: &str, rest: &str) {
        (**self).edge_split(prefix, rest);
    }

    fn leaf_inserted(&mut self, label: &str, leaf: LeafValue) {
        (**self).leaf_inserted(label, leaf);
    }

    fn pattern_matched(&mut self, pattern: &str, leaf: LeafValue, path: &str) {
        (**self).pattern_matched(pattern, leaf, path);
    }
}

impl<T: TraceObserver + ?Sized> TraceObserver for Box<T> {
    fn edge_split(&mut self, prefix: &str, rest: &str) {
        (**self).edge_split(prefix, rest);
    }

    fn leaf_inserted(&mut self, label: &str, leaf: LeafValue) {
        (**self).leaf_inserted(label, leaf);
    }

    fn pattern_matched(&mut self, pattern: &str, leaf: LeafValue, path: &str) {
        (**self).pattern_matched(pattern, leaf, path);
    }
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTracer;

impl TraceObserver for NoopTracer {}

/// Observer that forwards every event to `log::trace!`
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTracer;

impl TraceObserver for LogTracer {
    fn edge_split(&mut self, prefix: &str, rest: &str) {
        log::trace!(
            "split edge '{}' | '{}'",
            display_label(prefix),
            display_label(rest)
        );
    }

    fn leaf_inserted(&mut self, label: &str, leaf: LeafValue) {
        log::trace!("insert leaf {} under '{}'", leaf, display_label(label));
    }

    fn pattern_matched(&mut self, pattern: &str, leaf: LeafValue, path: &str) {
        log::trace!(
            "'{}' found at index {}: '{}'",
            pattern,
            leaf,
            display_label(path)
        );
    }
}

/// Observer that records events for assertions
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub(crate) struct RecordingTracer {
    pub(crate) splits: Vec<(String, String)>,
    pub(crate) leaves: Vec<(String, LeafValue)>,
    pub(crate) matches: Vec<LeafValue>,
}

#[cfg(test)]
impl TraceObserver for RecordingTracer {
    fn edge_split(&mut self, prefix: &str, rest: &str) {
        self.splits.push((prefix.to_string(), rest.to_string()));
    }

    fn leaf_inserted(&mut self, label: &str, leaf: LeafValue) {
        self.leaves.push((label.to_string(), leaf));
    }

    fn pattern_matched(&mut self, _pattern: &str, leaf: LeafValue, _path: &str) {
        self.matches.push(leaf);
    }
}
