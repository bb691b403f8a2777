use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use mvt_tools::{check_tile, format_report_pretty, inspect_tile};

#[derive(Parser)]
#[command(name = "mvt-tools", version, about = "Vector tile inspection tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Dump a tile's envelope structure and sizes.
    Dump {
        /// Path to the tile bytes.
        tile_path: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = DumpFormat::Pretty)]
        format: DumpFormat,
    },
    /// Run a full decode and report the outcome.
    Check {
        /// Path to the tile bytes.
        tile_path: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DumpFormat {
    Pretty,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Dump { tile_path, format } => {
            let bytes = fs::read(&tile_path)
                .with_context(|| format!("read tile {}", tile_path.display()))?;
            let report = inspect_tile(&bytes).context("parse tile envelope")?;
            match format {
                DumpFormat::Pretty => print!("{}", format_report_pretty(&report)),
                DumpFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
            }
        }
        Command::Check { tile_path } => {
            let bytes = fs::read(&tile_path)
                .with_context(|| format!("read tile {}", tile_path.display()))?;
            let layers = check_tile(&bytes).context("decode tile")?;
            let features: usize = layers.values().map(|layer| layer.features.len()).sum();
            println!("ok: {} layers, {features} features", layers.len());
        }
    }
    Ok(())
}
