use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Value stored in a leaf: the 1-based char offset of the suffix it terminates
pub type LeafValue = usize;

/// Handle of a node inside the tree arena
pub type NodeId = usize;

/// Terminal symbol appended to every suffix.
/// `'\0'` is the smallest `char`, so it sorts before every other symbol.
pub const SENTINEL: char = '\0';

/// How the sentinel is rendered for humans
pub const DISPLAY_SENTINEL: char = '$';

/// Configuration for suffix tree construction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Reject texts longer than this many chars (0 = unlimited).
    /// Construction is quadratic, so large inputs are worth capping.
    pub max_text_chars: usize,
}

/// Byte-size estimate produced by the memory accounting passes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeEstimate {
    /// Total estimated bytes
    pub total_bytes: usize,
    /// Bytes per input character (NaN for an empty text)
    pub bytes_per_char: f64,
}

impl SizeEstimate {
    pub fn new(total_bytes: usize, text_len: usize) -> Self {
        let bytes_per_char = if text_len == 0 {
            f64::NAN
        } else {
            total_bytes as f64 / text_len as f64
        };

        Self {
            total_bytes,
            bytes_per_char,
        }
    }
}

/// Render a label or suffix with the sentinel shown as `$`
pub fn display_label(label: &str) -> Cow<'_, str> {
    if label.contains(SENTINEL) {
        Cow::Owned(label.replace(SENTINEL, &DISPLAY_SENTINEL.to_string()))
    } else {
        Cow::Borrowed(label)
    }
}

/// Render an edge label as a JSON dump key.
///
/// The sentinel becomes `$` and a literal `$` becomes `$$`, so a text
/// containing `$` never yields two sibling keys that read the same.
pub fn json_label(label: &str) -> Cow<'_, str> {
    if !label.contains(['$', SENTINEL]) {
        return Cow::Borrowed(label);
    }

    let mut out = String::with_capacity(label.len() + 1);
    for c in label.chars() {
        match c {
            '$' => out.push_str("$$"),
            SENTINEL => out.push(DISPLAY_SENTINEL),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}
