//! Suffix array builder
//!
//! Flattens a suffix tree into its sorted suffix list by walking it
//! depth-first with each node's edges in label order. Sibling labels never
//! share a first char, so label order agrees with full-suffix order and
//! the leaves come out sorted without any comparison sort.

use super::types::SuffixEntry;
use crate::index::suffix_tree::{ChildOrder, SuffixTree};
use crate::index::types::SizeEstimate;
use std::mem::size_of;

/// Suffixes of a text in ascending order, each with its leaf value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixArray {
    pub(crate) entries: Vec<SuffixEntry>,
    pub(crate) text_len: usize,
}

impl SuffixArray {
    /// Derive the suffix array of `tree`
    pub fn from_tree(tree: &SuffixTree) -> Self {
        let mut entries = Vec::with_capacity(tree.text_len());
        tree.walk_leaves(ChildOrder::Sorted, |leaf, path| {
            entries.push(SuffixEntry::new(leaf, path));
        });

        log::debug!("built suffix array: {} entries", entries.len());

        Self {
            entries,
            text_len: tree.text_len(),
        }
    }

    /// Sorted entries
    pub fn entries(&self) -> &[SuffixEntry] {
        &self.entries
    }

    /// Iterator over the entries in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &SuffixEntry> {
        self.entries.iter()
    }

    /// Access an entry by its position in the sorted array
    pub fn get(&self, index: usize) -> Option<&SuffixEntry> {
        self.entries.get(index)
    }

    /// Number of entries stored in the array
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the array contains no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Estimate the array's memory footprint: the vector itself, one
    /// entry per suffix, and the bytes of every stored suffix string
    pub fn estimate_size(&self) -> SizeEstimate {
        let total = size_of::<Vec<SuffixEntry>>()
            + self
                .entries
                .iter()
                .map(|entry| size_of::<SuffixEntry>() + entry.suffix.len())
                .sum::<usize>();

        SizeEstimate::new(total, self.text_len)
    }
}

/// Derive the suffix array of `tree` (uncached)
pub fn build_suffix_array(tree: &SuffixTree) -> SuffixArray {
    SuffixArray::from_tree(tree)
}
