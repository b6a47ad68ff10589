//! # SFX - Compact Suffix Tree and Suffix Array
//!
//! SFX builds a compact (edge-compressed) suffix tree by inserting every
//! suffix of a text one after another, then answers pattern and
//! longest-repeat queries by walking it. A suffix array can be derived
//! from the tree for binary-search lookups.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - Suffix tree construction and traversal, suffix array lookup
//! - [`output`] - Result formatting for the CLI
//! - [`utils`] - Configuration and progress reporting
//!
//! ## Quick Start
//!
//! ```
//! use sfx::{build_suffix_tree, find_pattern_in_tree, longest_repeated_substring};
//!
//! let tree = build_suffix_tree("banana").unwrap();
//!
//! let mut found = find_pattern_in_tree(&tree, "ana");
//! found.sort();
//! assert_eq!(found, vec![2, 4]);
//!
//! assert_eq!(longest_repeated_substring(&tree), "ana");
//!
//! let array = tree.suffix_array();
//! assert_eq!(array.find_pattern("ana"), vec![4, 2]);
//! ```
//!
//! ## Complexity
//!
//! Construction rescans from the root for every suffix and is O(n²).
//! Tree pattern search walks the whole tree for every query; suffix array
//! search is O(m log n) plus the number of matches.

pub mod error;
pub mod index;
pub mod output;
pub mod utils;

pub use error::{Error, Result};
pub use index::suffix_array::{SuffixArray, SuffixEntry};
pub use index::suffix_tree::{SuffixTree, SuffixTreeBuilder};
pub use index::trace::{LogTracer, NoopTracer, TraceObserver};
pub use index::types::{display_label, json_label, LeafValue, SizeEstimate, TreeConfig, SENTINEL};

/// Build the suffix tree of `text`
pub fn build_suffix_tree(text: &str) -> Result<SuffixTree> {
    index::suffix_tree::build_suffix_tree(text)
}

/// Leaf values of every suffix starting with `pattern` (full-tree walk)
pub fn find_pattern_in_tree(tree: &SuffixTree, pattern: &str) -> Vec<LeafValue> {
    tree.find_pattern(pattern)
}

/// Longest substring occurring at least twice
pub fn longest_repeated_substring(tree: &SuffixTree) -> String {
    tree.longest_repeat()
}

/// Estimated memory footprint of the tree
pub fn estimate_tree_size(tree: &SuffixTree) -> SizeEstimate {
    tree.estimate_size()
}

/// Derive the suffix array of `tree`
pub fn build_suffix_array(tree: &SuffixTree) -> SuffixArray {
    index::suffix_array::build_suffix_array(tree)
}

/// Leaf values of every suffix in `array` starting with `pattern`
pub fn find_pattern_in_array(array: &SuffixArray, pattern: &str) -> Vec<LeafValue> {
    index::suffix_array::find_pattern_in_array(array, pattern)
}
