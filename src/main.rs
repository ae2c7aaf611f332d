use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use treekind::analysis::analyze;
use treekind::parser::{DuplicateParentPolicy, EdgeListParser};
use treekind::writer::render_tree;

#[derive(Parser, Debug)]
#[command(
    name = "treekind",
    about = "Classify a tree given as an edge list and report its height and traversals"
)]
struct Cli {
    /// Edge-list file: one `parent,child,child` record per line.
    file: PathBuf,
    /// Print the report on a single line instead of indented.
    #[arg(long)]
    compact: bool,
    /// Fail if a parent id starts more than one line instead of appending its children.
    #[arg(long)]
    reject_duplicate_parents: bool,
    /// Draw the parsed tree to stderr before printing the report.
    #[arg(long)]
    show_tree: bool,
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let policy = if cli.reject_duplicate_parents {
        DuplicateParentPolicy::Reject
    } else {
        DuplicateParentPolicy::Append
    };
    let parser = EdgeListParser::new().with_duplicate_parents(policy);

    let text = fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read tree file {}", cli.file.display()))?;
    let graph = parser
        .parse(&text)
        .with_context(|| format!("failed to process tree file {}", cli.file.display()))?;

    if cli.show_tree {
        match graph.validate() {
            Ok(tree) => eprint!("{}", render_tree(&tree)),
            Err(violation) => eprintln!("(not a tree: {violation})"),
        }
    }

    let report = analyze(&graph);
    let json = if cli.compact {
        report.to_json()
    } else {
        report.to_json_pretty()
    }
    .context("failed to serialize report")?;
    println!("{json}");

    Ok(())
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
