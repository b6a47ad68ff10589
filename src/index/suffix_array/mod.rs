//! Suffix array derived from a suffix tree
//!
//! This module provides O(m log n) prefix search over the sorted list of
//! all sentinel-terminated suffixes. The array is read-only and can always
//! be rebuilt from the tree.
//!
//! ## Architecture
//!
//! - `builder`: Flattens a suffix tree in sorted-label order
//! - `reader`: Binary-search based lookup
//! - `types`: Core type definitions

pub mod builder;
pub mod reader;
pub mod types;

// Re-exports for convenience
pub use builder::{build_suffix_array, SuffixArray};
pub use reader::find_pattern_in_array;
pub use types::{SuffixArrayStats, SuffixEntry};
