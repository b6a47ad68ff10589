use crate::index::suffix_array::SuffixArray;
use crate::index::suffix_tree::SuffixTree;
use crate::index::types::SizeEstimate;
use std::io::{self, Write};

/// Write a tree and suffix array size report
pub fn write_size_report<W: Write>(out: &mut W, tree: &SuffixTree) -> io::Result<()> {
    writeln!(out, "Suffix Tree")?;
    writeln!(out, "===========")?;
    writeln!(out, "Text length:      {} chars", tree.text_len())?;
    writeln!(out, "Nodes:            {}", tree.node_count())?;
    writeln!(out, "Leaves:           {}", tree.leaf_count())?;
    write_estimate(out, &tree.estimate_size())?;

    let array: &SuffixArray = tree.suffix_array();
    let stats = array.stats();
    writeln!(out)?;
    writeln!(out, "Suffix Array")?;
    writeln!(out, "============")?;
    writeln!(out, "Entries:          {}", stats.suffix_count)?;
    writeln!(out, "Suffix text:      {}", format_size(stats.stored_bytes as u64))?;
    write_estimate(out, &array.estimate_size())?;

    Ok(())
}

/// Print the size report to stdout
pub fn show_size_report(tree: &SuffixTree) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_size_report(&mut out, tree)
}

fn write_estimate<W: Write>(out: &mut W, estimate: &SizeEstimate) -> io::Result<()> {
    writeln!(out, "Total size:       {}", format_size(estimate.total_bytes as u64))?;
    if estimate.bytes_per_char.is_nan() {
        writeln!(out, "==> n/a per character (empty text)")
    } else {
        writeln!(out, "==> {:.2} bytes per character", estimate.bytes_per_char)
    }
}

/// Format byte size to human readable
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
