//! JSON rendering of the tree
//!
//! Internal nodes become objects keyed by edge label (in insertion order),
//! leaves become their integer value. Keys go through [`json_label`]: the
//! sentinel is shown as `$` and a literal `$` is doubled.
//!
//! Degenerate texts build trees as deep as the text, so the writer keeps
//! its own stack of open objects instead of recursing. `serde_json` is only
//! used to escape keys.

use super::node::{Node, SuffixTree, ROOT};
use crate::error::Result;
use crate::index::types::{json_label, NodeId};
use std::io::Write;

const PRETTY_INDENT: &[u8] = b"    ";

impl SuffixTree {
    /// Compact JSON dump
    pub fn to_json(&self) -> Result<String> {
        let mut out = Vec::new();
        self.write_json(&mut out)?;
        Ok(into_string(out))
    }

    /// Pretty-printed JSON dump with 4-space indentation
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut out = Vec::new();
        self.write_json_pretty(&mut out)?;
        Ok(into_string(out))
    }

    /// Write the compact JSON dump to `out`
    pub fn write_json<W: Write>(&self, out: W) -> Result<()> {
        self.emit_json(out, None)
    }

    /// Write the pretty-printed JSON dump to `out`
    pub fn write_json_pretty<W: Write>(&self, out: W) -> Result<()> {
        self.emit_json(out, Some(PRETTY_INDENT))
    }

    fn emit_json<W: Write>(&self, mut out: W, indent: Option<&[u8]>) -> Result<()> {
        // (internal node, index of the next edge to write)
        let mut open: Vec<(NodeId, usize)> = Vec::new();

        if self.open_value(&mut out, ROOT)? {
            open.push((ROOT, 0));
        }

        while let Some(frame) = open.last_mut() {
            let (id, next) = *frame;
            let edges = self.edges(id);

            let Some(edge) = edges.get(next) else {
                open.pop();
                if next > 0 {
                    newline(&mut out, indent, open.len())?;
                }
                out.write_all(b"}")?;
                continue;
            };
            frame.1 += 1;

            if next > 0 {
                out.write_all(b",")?;
            }
            newline(&mut out, indent, open.len())?;
            serde_json::to_writer(&mut out, &*json_label(&edge.label))?;
            let colon: &[u8] = if indent.is_some() { b": " } else { b":" };
            out.write_all(colon)?;

            if self.open_value(&mut out, edge.child)? {
                open.push((edge.child, 0));
            }
        }

        out.flush()?;
        Ok(())
    }

    /// Write a leaf value, or the opening brace of an internal node.
    ///
    /// Returns true when an object was opened and its edges still need writing.
    fn open_value<W: Write>(&self, out: &mut W, id: NodeId) -> Result<bool> {
        match self.node(id) {
            Some(Node::Leaf(value)) => {
                write!(out, "{}", value)?;
                Ok(false)
            }
            Some(Node::Internal(_)) => {
                out.write_all(b"{")?;
                Ok(true)
            }
            None => {
                out.write_all(b"null")?;
                Ok(false)
            }
        }
    }
}

fn newline<W: Write>(out: &mut W, indent: Option<&[u8]>, depth: usize) -> std::io::Result<()> {
    let Some(indent) = indent else {
        return Ok(());
    };

    out.write_all(b"\n")?;
    for _ in 0..depth {
        out.write_all(indent)?;
    }
    Ok(())
}

fn into_string(out: Vec<u8>) -> String {
    // Only UTF-8 keys and ASCII punctuation are ever written
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::index::suffix_tree::build_suffix_tree;
    use std::io;

    fn leaves(value: &serde_json::Value, out: &mut Vec<u64>) {
        match value {
            serde_json::Value::Number(n) => out.extend(n.as_u64()),
            serde_json::Value::Object(map) => map.values().for_each(|v| leaves(v, out)),
            _ => {}
        }
    }

    #[test]
    fn test_json_compact() {
        let tree = build_suffix_tree("aab").unwrap();
        assert_eq!(tree.to_json().unwrap(), r#"{"a":{"ab$":1,"b$":2},"b$":3}"#);
    }

    #[test]
    fn test_json_pretty_layout() {
        let tree = build_suffix_tree("aab").unwrap();
        let expected = "{\n    \"a\": {\n        \"ab$\": 1,\n        \"b$\": 2\n    },\n    \"b$\": 3\n}";
        assert_eq!(tree.to_json_pretty().unwrap(), expected);
    }

    #[test]
    fn test_json_pretty_and_compact_agree() {
        let tree = build_suffix_tree("banana").unwrap();

        let pretty: serde_json::Value = serde_json::from_str(&tree.to_json_pretty().unwrap()).unwrap();
        assert_eq!(pretty["banana$"], 1);
        assert_eq!(pretty["a"]["$"], 6);
        assert_eq!(pretty["a"]["na"]["na$"], 2);

        let compact: serde_json::Value = serde_json::from_str(&tree.to_json().unwrap()).unwrap();
        assert_eq!(pretty, compact);
    }

    #[test]
    fn test_json_empty_tree() {
        let tree = build_suffix_tree("").unwrap();
        assert_eq!(tree.to_json_pretty().unwrap(), "{}");
        assert_eq!(tree.to_json().unwrap(), "{}");
    }

    #[test]
    fn test_json_literal_dollar_keeps_every_edge() {
        // Node "a" has a literal "$" edge and a sentinel edge
        let tree = build_suffix_tree("a$ba$ca").unwrap();
        let value: serde_json::Value = serde_json::from_str(&tree.to_json().unwrap()).unwrap();

        assert_eq!(value["a"].as_object().unwrap().len(), 2);
        assert_eq!(value["a"]["$"], 7);
        assert_eq!(value["a"]["$$"]["ba$$ca$"], 1);
        assert_eq!(value["a"]["$$"]["ca$"], 4);

        let mut found = Vec::new();
        leaves(&value, &mut found);
        found.sort_unstable();
        assert_eq!(found, (1..=7).collect::<Vec<u64>>());
    }

    #[test]
    fn test_json_deep_tree() {
        // "aaaa..." builds a chain as deep as the text
        let tree = build_suffix_tree(&"a".repeat(10_000)).unwrap();
        let internal = tree.node_count() - tree.leaf_count();

        let json = tree.to_json().unwrap();
        assert!(json.starts_with(r#"{"a":{"a":{"#));
        assert_eq!(json.matches('{').count(), internal);
        assert_eq!(json.matches('}').count(), internal);
        assert_eq!(json.matches(':').count(), tree.node_count() - 1);
    }

    #[test]
    fn test_json_pretty_deep_tree() {
        let tree = build_suffix_tree(&"a".repeat(2_000)).unwrap();
        let internal = tree.node_count() - tree.leaf_count();

        let json = tree.to_json_pretty().unwrap();
        assert!(json.starts_with("{\n    \"a\": {\n        \"a\": {"));
        assert_eq!(json.matches('{').count(), internal);
        assert!(json.ends_with("\n}"));
    }

    struct FailingWriter;

    impl io::Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_is_io() {
        let tree = build_suffix_tree("banana").unwrap();
        let err = tree.write_json(FailingWriter).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
