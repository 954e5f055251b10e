//! gen-placeholders - placeholder resource generator
//!
//! Populates the game client's resource directory with loadable stand-ins
//! (PNG/JPEG images, a TTF font, WAV and MP3 audio). Run with no arguments
//! to regenerate everything under `application/resources`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use gen_placeholders::{clean_all, generate_all, planned_paths, resource_root};

#[derive(Parser)]
#[command(name = "gen-placeholders")]
#[command(about = "Generate placeholder resources for the game client")]
#[command(version)]
struct Cli {
    /// Resource directory (default: <project>/application/resources)
    #[arg(short, long, global = true)]
    resources: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate all placeholder resources (default)
    All,
    /// Remove all generated resources
    Clean,
    /// List the files that would be generated
    List,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let root = cli.resources.unwrap_or_else(resource_root);
    tracing::debug!("Resource root: {:?}", root);

    match cli.command.unwrap_or(Commands::All) {
        Commands::All => {
            generate_all(&root)
                .with_context(|| format!("Failed to generate resources in {}", root.display()))?;
        }
        Commands::Clean => {
            println!("Cleaning placeholder resources...");
            let removed = clean_all(&root)
                .with_context(|| format!("Failed to clean resources in {}", root.display()))?;
            println!("Removed {} files", removed);
        }
        Commands::List => {
            for path in planned_paths() {
                println!("{}", root.join(path).display());
            }
        }
    }

    Ok(())
}
