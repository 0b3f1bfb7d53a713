//! ascii-tree CLI entry point.
//!
//! Inserts the given keys into a binary search tree and draws it.

use std::fs;
use std::io::{self, Read};
use std::process;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ascii_tree::{KeyTree, MAX_HEIGHT, MIN_DELTA, RenderConfig, TreePrinter};

/// Draw a binary search tree as ASCII art.
#[derive(Parser, Debug)]
#[command(
    name = "ascii-tree",
    version = env!("ASCII_TREE_VERSION"),
    about = "Draw a binary search tree built from the given keys as ASCII art"
)]
struct Cli {
    /// Keys to insert, in order (read from --input or stdin if none given)
    #[arg(allow_negative_numbers = true)]
    keys: Vec<String>,

    /// Read whitespace-separated keys from this file
    #[arg(short = 'i', long = "input", conflicts_with = "keys")]
    input: Option<String>,

    /// Minimum blank columns between sibling subtrees
    #[arg(short = 'g', long = "gap", default_value_t = ascii_tree::DEFAULT_GAP)]
    gap: usize,

    /// Floor of the per-node horizontal correction
    #[arg(long = "min-delta", default_value_t = MIN_DELTA)]
    min_delta: i64,

    /// Tallest tree drawn in full
    #[arg(long = "max-height", default_value_t = MAX_HEIGHT)]
    max_height: usize,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Log more (repeat for trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_keys(cli: &Cli) -> Result<KeyTree, String> {
    if !cli.keys.is_empty() {
        return Ok(KeyTree::from_tokens(&cli.keys));
    }
    let text = if let Some(ref path) = cli.input {
        fs::read_to_string(path).map_err(|e| format!("cannot read '{}': {}", path, e))?
    } else {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("cannot read stdin: {}", e))?;
        buf
    };
    Ok(KeyTree::parse(&text))
}

fn run(cli: &Cli) -> Result<(), String> {
    let keys = read_keys(cli)?;
    debug!(keys = keys.len(), "keys loaded");

    let config = RenderConfig::new()
        .with_gap(cli.gap)
        .with_min_delta(cli.min_delta)
        .with_max_height(cli.max_height);
    let printer = TreePrinter::with_config(config);

    if let Some(ref path) = cli.output {
        let file =
            fs::File::create(path).map_err(|e| format!("cannot write '{}': {}", path, e))?;
        keys.render_to(&printer, io::BufWriter::new(file))
            .map_err(|e| e.to_string())
    } else {
        keys.render_to(&printer, io::stdout().lock())
            .map_err(|e| e.to_string())
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
