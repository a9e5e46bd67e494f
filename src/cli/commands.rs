//! CLI command handlers

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::generate;
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};

use super::Cli;
use crate::config::Config;
use crate::generator::Generator;

/// Load the config and generate every playlist in it
pub fn generate_playlists(config_path: Option<PathBuf>, dry_run: bool) -> Result<()> {
    let config_path = match config_path {
        Some(path) => path,
        None => Config::default_path()
            .context("No config file given and no user config directory available")?,
    };
    debug!("Using config {}", config_path.display());

    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let summary = Generator::new(config, dry_run)
        .generate()
        .context("Playlist generation failed")?;

    info!(
        "Done: {} playlists, {} entries{}",
        summary.files_written,
        summary.entries_written,
        if dry_run { " (dry run)" } else { "" }
    );
    Ok(())
}

/// Handle `--completions`
pub fn completion(shell: clap_complete::Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "m3ugen", &mut io::stdout());
}
