use std::io::{self, Write};

use adjwalk::fixture::{sample_graph, START_VERTEX};
use adjwalk::{Traversal, TraversalReport};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "adjwalk")]
#[command(about = "Print BFS and DFS visitation orders over the sample graph", long_about = None)]
struct Cli {
    /// Which traversal to run
    #[arg(long, value_enum, default_value_t = Which::All)]
    traversal: Which,

    /// Start vertex
    #[arg(long, default_value_t = START_VERTEX)]
    start: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Which {
    All,
    Bfs,
    Dfs,
    DfsRecursive,
}

impl Which {
    fn traversals(self) -> &'static [Traversal] {
        match self {
            Which::All => &Traversal::ALL,
            Which::Bfs => &[Traversal::Bfs],
            Which::Dfs => &[Traversal::Dfs],
            Which::DfsRecursive => &[Traversal::DfsRecursive],
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    #[cfg(feature = "tracing")]
    init_tracing();

    let cli = Cli::parse();
    let graph = sample_graph();

    let reports = cli
        .traversal
        .traversals()
        .iter()
        .map(|t| {
            t.report(&graph, cli.start)
                .with_context(|| format!("cannot run {} from vertex {}", t.label(), cli.start))
        })
        .collect::<Result<Vec<TraversalReport>>>()?;

    let mut out = io::stdout().lock();
    match cli.format {
        Format::Text => {
            for report in &reports {
                writeln!(out, "{report}")?;
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &reports)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
