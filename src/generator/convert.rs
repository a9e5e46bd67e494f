//! Convert playlists: rewrite existing `.m3u` files to music-root-relative paths

use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::config::{ConvertSpec, Settings};
use crate::error::{Error, Result};
use crate::generator::scan::scan_files;
use crate::utils::parse_entries;

/// One rewritten playlist, named after its source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedPlaylist {
    pub file_name: OsString,
    /// Entries as raw bytes, in whatever encoding the source used
    pub entries: Vec<Vec<u8>>,
}

/// Finds `.m3u` files and strips the music root from their entries
pub struct M3uConverter<'a> {
    settings: &'a Settings,
}

impl<'a> M3uConverter<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Rewrite every `.m3u` file anywhere under `music_dir + spec.dir`
    pub fn convert(&self, spec: &ConvertSpec) -> Result<Vec<ConvertedPlaylist>> {
        let root = PathBuf::from(format!("{}{}", self.settings.music_dir, spec.dir));
        let sources = scan_files(&root, self.settings, |name| name.ends_with(".m3u"))?;
        debug!("Found {} playlists under {}", sources.len(), root.display());

        sources
            .into_iter()
            .map(|source| {
                let content = fs::read(&source).map_err(|e| Error::io(&source, e))?;
                let file_name = source.file_name().map(OsString::from).unwrap_or_default();
                Ok(ConvertedPlaylist {
                    file_name,
                    entries: self.rewrite(&content),
                })
            })
            .collect()
    }

    /// Drop blank and comment lines, then strip the music root prefix
    pub fn rewrite(&self, content: &[u8]) -> Vec<Vec<u8>> {
        let music_dir = self.settings.music_dir.as_bytes();
        parse_entries(content)
            .into_iter()
            .map(|line| match line.strip_prefix(music_dir) {
                Some(relative) => relative.to_vec(),
                None => line,
            })
            .collect()
    }
}
