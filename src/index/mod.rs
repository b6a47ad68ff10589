pub mod build;
pub mod stats;
pub mod suffix_array;
pub mod suffix_tree;
pub mod trace;
pub mod types;

pub use suffix_array::{SuffixArray, SuffixEntry};
pub use suffix_tree::{SuffixTree, SuffixTreeBuilder};
pub use trace::{LogTracer, NoopTracer, TraceObserver};
pub use types::*;
