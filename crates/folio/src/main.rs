//! folio CLI - docs, courses and blogs content engine.
//!
//! Provides commands for:
//! - `tree`: Print collections with titles and URLs
//! - `search`: Query the search index
//! - `render`: Render the page behind a public URL
//! - `check`: Report config and slug problems

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, GlobalArgs, RenderArgs, SearchArgs, TreeArgs};
use output::Output;

/// folio - docs, courses and blogs from a markdown tree.
#[derive(Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print collections with titles and URLs.
    Tree(TreeArgs),
    /// Search docs, courses and blogs.
    Search(SearchArgs),
    /// Render the page behind a public URL.
    Render(RenderArgs),
    /// Report config errors and duplicate slugs.
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.global.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Tree(args) => args.execute(&cli.global, &output),
        Commands::Search(args) => args.execute(&cli.global, &output),
        Commands::Render(args) => args.execute(&cli.global, &output),
        Commands::Check(args) => args.execute(&cli.global, &output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        #[allow(clippy::exit)]
        std::process::exit(1);
    }
}
