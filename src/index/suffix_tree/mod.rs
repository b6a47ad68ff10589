//! Compact suffix tree
//!
//! Every suffix of the text, terminated by a sentinel, is inserted into a
//! trie whose edges carry whole substrings. Each root-to-leaf path spells
//! exactly one suffix.
//!
//! ## Architecture
//!
//! - `node`: Arena-backed node model and read accessors
//! - `builder`: Suffix insertion with edge splitting
//! - `traversal`: Pattern search and longest repeated substring
//! - `size`: Memory footprint estimate
//! - `json`: JSON rendering

pub mod builder;
pub mod json;
pub mod node;
pub mod size;
pub mod traversal;

// Re-exports for convenience
pub use builder::{build_suffix_tree, SuffixTreeBuilder};
pub use node::{Edge, Node, SuffixTree, ROOT};
pub use size::{EDGE_OVERHEAD, NODE_OVERHEAD};
pub use traversal::ChildOrder;
