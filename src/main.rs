// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Shotsort: Steam Screenshot Organizer
//!
//! Sorts a flat directory of Steam screenshots into per-game folders,
//! resolving app ids to game names via a local override table with a
//! Steam storefront fallback.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use shotsort::config::AppConfig;
use shotsort::organizer;
use shotsort::overrides::OverrideTable;
use shotsort::steam::SteamClient;
use shotsort::Result;

/// Shotsort CLI - Steam Screenshot Organizer
#[derive(Parser, Debug)]
#[command(name = "shotsort")]
#[command(author = "Jonathan D. A. Jewell <hyperpolymath>")]
#[command(version = "1.0.0")]
#[command(about = "Sorts Steam screenshots into per-game folders", long_about = None)]
struct Cli {
    /// Directory where the screenshots are stored (overrides config)
    #[arg(short, long, value_name = "PATH")]
    dir: Option<PathBuf>,

    /// Path to configuration file (JSON format)
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    verbose: bool,

    /// Suppress non-essential output (quiet mode)
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = AppConfig::load(&cli.config)?;

    let root = cli
        .dir
        .unwrap_or_else(|| PathBuf::from(&config.screenshot_dir));

    // The override table is loaded exactly once; an unreadable table is the
    // one failure that aborts before any file is touched.
    let overrides = OverrideTable::load(&PathBuf::from(&config.overrides_path))?;

    let client = SteamClient::new(&config.steam.url, config.steam.timeout_secs)?;

    let summary = organizer::run(&root, &config.extension, &overrides, &client).await?;

    info!(
        "Done: {} moved, {} conflicts, {} skipped",
        summary.moved, summary.conflicts, summary.skipped
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["shotsort"]).unwrap();
        assert!(!cli.verbose);
        assert_eq!(cli.config, PathBuf::from("config.json"));
        assert!(cli.dir.is_none());
    }

    #[test]
    fn test_cli_dir_option() {
        let cli = Cli::try_parse_from(["shotsort", "--dir", "/tmp/shots"]).unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/shots")));

        let cli = Cli::try_parse_from(["shotsort", "-d", "/tmp/shots", "-q"]).unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/shots")));
        assert!(cli.quiet);
    }
}
