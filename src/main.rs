use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use sfx::index::build::build_tree;
use sfx::index::stats::show_size_report;
use sfx::index::trace::LogTracer;
use sfx::output;
use sfx::LeafValue;
use sfx::utils::AppConfig;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sfx")]
#[command(about = "Compact suffix tree and suffix array text index")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log progress information
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log debug information
    #[arg(long, global = true)]
    debug: bool,

    /// Log every construction and search step
    #[arg(long, global = true)]
    trace: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Args)]
struct Input {
    /// Text to index
    #[arg(short, long, conflicts_with = "file")]
    text: Option<String>,

    /// Read the text to index from a file
    #[arg(short, long)]
    file: Option<PathBuf>,
}

impl Input {
    fn read(&self) -> Result<String> {
        match (&self.text, &self.file) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
            (None, None) => anyhow::bail!("Either --text or --file is required"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the suffix tree as JSON
    Tree {
        #[command(flatten)]
        input: Input,
    },
    /// Search patterns by walking the suffix tree
    Find {
        #[command(flatten)]
        input: Input,

        /// Patterns to search for
        #[arg(required = true)]
        patterns: Vec<String>,
    },
    /// Print the longest repeated substring
    Repeat {
        #[command(flatten)]
        input: Input,
    },
    /// Show memory estimates for the tree and the suffix array
    Size {
        #[command(flatten)]
        input: Input,
    },
    /// Print the suffix array, or search it for a pattern
    Array {
        #[command(flatten)]
        input: Input,

        /// Pattern to look up with binary search
        pattern: Option<String>,
    },
}

fn init_logging(cli: &Cli) {
    let level = if cli.trace {
        "trace"
    } else if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let mut config = AppConfig::load()?;
    if cli.trace {
        config.trace = true;
    }
    let color = config.color && !cli.no_color;

    match cli.command {
        Commands::Tree { input } => {
            let tree = build_tree(&input.read()?, &config)?;
            let mut stdout = io::BufWriter::new(io::stdout().lock());
            tree.write_json_pretty(&mut stdout)?;
            writeln!(stdout)?;
        }
        Commands::Find { input, patterns } => {
            let tree = build_tree(&input.read()?, &config)?;

            let results: Vec<Vec<LeafValue>> = if config.trace {
                // Traced searches run one after another so the log stays ordered
                patterns
                    .iter()
                    .map(|p| tree.find_pattern_traced(p, &mut LogTracer))
                    .collect()
            } else {
                tree.find_patterns_parallel(&patterns)
            };

            for (pattern, leaves) in patterns.iter().zip(&results) {
                log::info!("'{}': {} matches", pattern, leaves.len());
                output::print_matches(&tree, pattern, leaves, color)?;
            }
        }
        Commands::Repeat { input } => {
            let tree = build_tree(&input.read()?, &config)?;
            output::print_longest_repeat(&tree.longest_repeat(), color)?;
        }
        Commands::Size { input } => {
            let tree = build_tree(&input.read()?, &config)?;
            show_size_report(&tree)?;
        }
        Commands::Array { input, pattern } => {
            let tree = build_tree(&input.read()?, &config)?;
            let array = tree.suffix_array();

            match pattern {
                Some(pattern) => {
                    let leaves = if config.trace {
                        array.find_pattern_traced(&pattern, &mut LogTracer)
                    } else {
                        array.find_pattern(&pattern)
                    };
                    output::print_matches(&tree, &pattern, &leaves, color)?;
                }
                None => output::print_suffix_array(array, color)?,
            }
        }
    }

    Ok(())
}
