//! Suffix array search
//!
//! Provides O(m log n) prefix lookup over a [`SuffixArray`]: a lower-bound
//! binary search finds the first suffix not less than the pattern, then a
//! forward scan collects every suffix that starts with it.

use super::builder::SuffixArray;
use super::types::SuffixArrayStats;
use crate::index::trace::{NoopTracer, TraceObserver};
use crate::index::types::LeafValue;

impl SuffixArray {
    /// Leaf values of every suffix starting with `pattern`, in suffix order.
    ///
    /// A pattern sorting after every suffix, or an empty array, yields an
    /// empty result.
    pub fn find_pattern(&self, pattern: &str) -> Vec<LeafValue> {
        self.find_pattern_traced(pattern, &mut NoopTracer)
    }

    /// Like [`find_pattern`](Self::find_pattern), reporting each match to `observer`
    pub fn find_pattern_traced<O>(&self, pattern: &str, observer: &mut O) -> Vec<LeafValue>
    where
        O: TraceObserver + ?Sized,
    {
        let mut leaves = Vec::new();
        let mut index = self.lower_bound(pattern);

        // The lower bound may equal len(); `get` keeps the scan in bounds
        while let Some(entry) = self.entries.get(index) {
            if !entry.suffix.starts_with(pattern) {
                break;
            }
            observer.pattern_matched(pattern, entry.leaf, &entry.suffix);
            leaves.push(entry.leaf);
            index += 1;
        }

        leaves
    }

    /// Range [lo, hi) of indices whose suffixes start with `pattern`
    pub fn range(&self, pattern: &str) -> (usize, usize) {
        let lo = self.lower_bound(pattern);
        let hi = self.upper_bound(pattern, lo);
        (lo, hi)
    }

    /// Number of suffixes starting with `pattern`
    pub fn count_matches(&self, pattern: &str) -> usize {
        let (lo, hi) = self.range(pattern);
        hi - lo
    }

    /// Check if `pattern` occurs in the text
    pub fn contains(&self, pattern: &str) -> bool {
        let (lo, hi) = self.range(pattern);
        lo < hi
    }

    /// Find first index whose suffix is not less than `pattern`
    fn lower_bound(&self, pattern: &str) -> usize {
        let mut lo = 0;
        let mut hi = self.entries.len();

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.entries[mid].suffix.as_str() < pattern {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        lo
    }

    /// Find first index at or after `start` whose suffix does NOT start
    /// with `pattern`
    fn upper_bound(&self, pattern: &str, start: usize) -> usize {
        let mut lo = start;
        let mut hi = self.entries.len();

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.entries[mid].suffix.starts_with(pattern) {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        lo
    }

    /// Get statistics about this suffix array
    pub fn stats(&self) -> SuffixArrayStats {
        SuffixArrayStats {
            text_size: self.text_len,
            suffix_count: self.entries.len(),
            stored_bytes: self.entries.iter().map(|e| e.suffix.len()).sum(),
        }
    }
}

/// Leaf values of every suffix in `array` starting with `pattern`
pub fn find_pattern_in_array(array: &SuffixArray, pattern: &str) -> Vec<LeafValue> {
    array.find_pattern(pattern)
}
