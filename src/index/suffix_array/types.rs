//! Types for suffix array lookup
//!
//! A suffix array is derived from a suffix tree and lists every
//! sentinel-terminated suffix in ascending order.

use crate::index::types::{display_label, LeafValue};
use serde::Serialize;
use std::fmt;

/// One suffix of the text together with the leaf that terminates it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuffixEntry {
    /// 1-based start offset of the suffix
    pub leaf: LeafValue,
    /// Full suffix including the trailing sentinel
    pub suffix: String,
}

impl SuffixEntry {
    pub fn new(leaf: LeafValue, suffix: impl Into<String>) -> Self {
        Self {
            leaf,
            suffix: suffix.into(),
        }
    }
}

impl fmt::Display for SuffixEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>6}  {}", self.leaf, display_label(&self.suffix))
    }
}

/// Statistics about a suffix array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixArrayStats {
    pub text_size: usize,
    pub suffix_count: usize,
    /// Bytes of suffix text stored across all entries
    pub stored_bytes: usize,
}
