//! Blog CLI - post listing engine.
//!
//! Provides commands for:
//! - `posts`: List the posts of a listing page, optionally filtered
//! - `render`: Render a listing page to static HTML
//! - `seo`: Print the SEO meta tags for a page

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{PostsArgs, RenderArgs, SeoArgs};
use output::Output;

/// Blog - post listing engine.
#[derive(Parser)]
#[command(name = "blog", version, about)]
struct Cli {
    /// Path to configuration file (default: auto-discover blog.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the posts of a listing page.
    Posts(PostsArgs),
    /// Render a listing page to HTML.
    Render(RenderArgs),
    /// Print SEO meta tags.
    Seo(SeoArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();
    let result = match cli.command {
        Commands::Posts(args) => args.execute(),
        Commands::Render(args) => args.execute(config_path),
        Commands::Seo(args) => args.execute(config_path),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
