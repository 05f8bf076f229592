//! LinkDeck - A terminal dashboard for Web3 creator pages and AI Studio tools
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;

/// LinkDeck - creator page dashboard with an AI Studio toolchain
#[derive(Parser, Debug)]
#[command(name = "linkdeck")]
#[command(about = "A terminal dashboard for Web3 creator pages and AI Studio tools", long_about = None)]
struct Args {
    /// Route to open at startup (e.g. /crypto-payment-setup)
    #[arg(value_name = "ROUTE")]
    route: Option<String>,

    /// Directory containing .linkdeck/config.toml (defaults to the home directory)
    #[arg(long, value_name = "DIR")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Err(e) = linkdeck_core::logging::init() {
        // Logging is diagnostics, not a reason to refuse to start
        eprintln!("warning: failed to initialize logging: {e}");
    }

    linkdeck_tui::run(args.route, args.config).await?;
    Ok(())
}
