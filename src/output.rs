//! Output formatting for search results and suffix listings

use crate::index::suffix_array::SuffixArray;
use crate::index::suffix_tree::SuffixTree;
use crate::index::types::{display_label, LeafValue};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn stdout_stream(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print one line per match: leaf value, then the suffix with the
/// pattern highlighted
pub fn print_matches(
    tree: &SuffixTree,
    pattern: &str,
    leaves: &[LeafValue],
    color: bool,
) -> io::Result<()> {
    let mut stdout = stdout_stream(color);
    write_matches(&mut stdout, tree, pattern, leaves)
}

/// Write matches to any color-capable writer
pub fn write_matches<W: WriteColor>(
    out: &mut W,
    tree: &SuffixTree,
    pattern: &str,
    leaves: &[LeafValue],
) -> io::Result<()> {
    if leaves.is_empty() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        writeln!(out, "'{}' not found", pattern)?;
        out.reset()?;
        return Ok(());
    }

    // Suffixes indexed by leaf value, borrowed from the cached suffix array
    let mut suffixes: Vec<Option<&str>> = vec![None; tree.text_len() + 1];
    for entry in tree.suffix_array().iter() {
        if let Some(slot) = suffixes.get_mut(entry.leaf) {
            *slot = Some(entry.suffix.as_str());
        }
    }

    for &leaf in leaves {
        let Some(suffix) = suffixes.get(leaf).copied().flatten() else {
            continue;
        };

        // Print leaf value
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{}", leaf)?;
        out.reset()?;
        write!(out, ":")?;

        // Highlight the matched prefix
        let matched = if suffix.starts_with(pattern) { pattern.len() } else { 0 };
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(out, "{}", display_label(&suffix[..matched]))?;
        out.reset()?;
        writeln!(out, "{}", display_label(&suffix[matched..]))?;
    }

    Ok(())
}

/// Print the full suffix array, one entry per line
pub fn print_suffix_array(array: &SuffixArray, color: bool) -> io::Result<()> {
    let mut stdout = stdout_stream(color);

    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    writeln!(stdout, "{:>6}  suffix", "leaf")?;
    stdout.reset()?;

    for entry in array.iter() {
        writeln!(stdout, "{}", entry)?;
    }

    Ok(())
}

/// Print the longest repeated substring
pub fn print_longest_repeat(repeat: &str, color: bool) -> io::Result<()> {
    let mut stdout = stdout_stream(color);

    if repeat.is_empty() {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        writeln!(stdout, "No repeated substring")?;
        stdout.reset()?;
        return Ok(());
    }

    write!(stdout, "Longest repeat ({} chars): ", repeat.chars().count())?;
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    writeln!(stdout, "{}", repeat)?;
    stdout.reset()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::suffix_tree::build_suffix_tree;
    use termcolor::NoColor;

    #[test]
    fn test_write_matches() {
        let tree = build_suffix_tree("banana").unwrap();
        let mut out = NoColor::new(Vec::new());
        write_matches(&mut out, &tree, "ana", &[2, 4]).unwrap();

        let text = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(text, "2:anana$\n4:ana$\n");
    }

    #[test]
    fn test_write_matches_every_leaf() {
        let tree = build_suffix_tree("banana").unwrap();
        let leaves = tree.find_pattern("");
        let mut out = NoColor::new(Vec::new());
        write_matches(&mut out, &tree, "", &leaves).unwrap();

        let text = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(text, "1:banana$\n3:nana$\n5:na$\n2:anana$\n4:ana$\n6:a$\n");
        assert!(tree.suffix_array.get().is_some());
    }

    #[test]
    fn test_write_matches_skips_unknown_leaves() {
        let tree = build_suffix_tree("banana").unwrap();
        let mut out = NoColor::new(Vec::new());
        write_matches(&mut out, &tree, "a", &[0, 6, 7]).unwrap();

        let text = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(text, "6:a$\n");
    }

    #[test]
    fn test_write_no_matches() {
        let tree = build_suffix_tree("banana").unwrap();
        let mut out = NoColor::new(Vec::new());
        write_matches(&mut out, &tree, "xyz", &[]).unwrap();

        let text = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(text, "'xyz' not found\n");
    }
}
