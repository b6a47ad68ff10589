use crate::index::suffix_tree::{SuffixTree, SuffixTreeBuilder};
use crate::index::trace::{LogTracer, NoopTracer, TraceObserver};
use crate::utils::{progress::suffix_progress_bar, AppConfig};
use anyhow::{Context, Result};

/// Build a suffix tree using the application config
pub fn build_tree(text: &str, config: &AppConfig) -> Result<SuffixTree> {
    build_tree_with_progress(text, config, false)
}

/// Build a suffix tree with optional silent mode.
///
/// Shows a progress bar for texts above the configured threshold and
/// routes trace points to the log when tracing is enabled.
pub fn build_tree_with_progress(text: &str, config: &AppConfig, silent: bool) -> Result<SuffixTree> {
    let builder = SuffixTreeBuilder::with_config(text, &config.tree_config())
        .context("Invalid input text")?;

    let tracer: Box<dyn TraceObserver> = if config.trace {
        Box::new(LogTracer)
    } else {
        Box::new(NoopTracer)
    };
    let mut builder = builder.with_observer(tracer);

    let show_progress = !silent && builder.suffix_count() > config.progress_threshold;
    if !show_progress {
        return Ok(builder.build());
    }

    let bar = suffix_progress_bar(builder.suffix_count());
    while builder.insert_next() {
        bar.inc(1);
    }
    bar.finish_and_clear();

    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_tree_default_config() {
        let tree = build_tree("banana", &AppConfig::default()).unwrap();
        assert_eq!(tree.leaf_count(), 6);
    }

    #[test]
    fn test_build_tree_with_progress_bar() {
        let config = AppConfig {
            progress_threshold: 2,
            trace: true,
            ..Default::default()
        };

        let tree = build_tree_with_progress("mississippi", &config, false).unwrap();
        assert_eq!(tree.leaf_count(), 11);
        assert_eq!(tree.longest_repeat(), "issi");
    }

    #[test]
    fn test_build_tree_respects_limit() {
        let config = AppConfig {
            max_text_chars: 3,
            ..Default::default()
        };

        assert!(build_tree("abcdef", &config).is_err());
        assert!(build_tree("abc", &config).is_ok());
    }

    #[test]
    fn test_build_tree_rejects_sentinel() {
        let err = build_tree("a\0b", &AppConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Invalid input text"));
    }
}
