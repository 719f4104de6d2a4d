//! mdly CLI - Markdown embed cards.
//!
//! Provides commands for:
//! - `render`: Render markdown with embed directives expanded to cards
//! - `check`: Report embed directives and their admission status

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, RenderArgs};
use output::Output;

/// mdly - Markdown embed cards.
#[derive(Parser)]
#[command(name = "mdly", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render markdown to HTML with embed directives expanded.
    Render(RenderArgs),
    /// Report embed directives found in the input.
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose on render raises the log level to INFO; otherwise RUST_LOG
    // decides
    let verbose = matches!(&cli.command, Commands::Render(args) if args.verbose);

    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so stdout stays clean for rendered HTML
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Check(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
