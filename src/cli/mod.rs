//! CLI module for m3ugen

use clap::Parser;
use std::path::PathBuf;

pub mod commands;

#[derive(Parser, Debug)]
#[command(name = "m3ugen", about = "Generate M3U playlists from a music directory tree")]
#[command(version, author)]
pub struct Cli {
    /// Playlist config file (defaults to <config dir>/m3ugen/playlists.yaml)
    #[arg(value_name = "CONFIG", env = "M3UGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Resolve every playlist but write nothing
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}
