//! Directory traversal shared by search and convert playlists

use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

use crate::config::Settings;
use crate::error::{Error, Result};

/// Collect every file below `root` whose name passes `accept`
///
/// Traversal is depth-first. Entry order within a directory is whatever the
/// filesystem returns unless `settings.sorted` is set. Dot entries are
/// skipped unless `settings.include_hidden` is set. Directory symlinks are
/// not followed; file symlinks count as files. Files whose names are not
/// valid UTF-8 are skipped with a warning.
pub fn scan_files(
    root: &Path,
    settings: &Settings,
    accept: impl Fn(&str) -> bool,
) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(Error::MissingDirectory(root.to_path_buf()));
    }

    let mut walker = WalkDir::new(root);
    if settings.sorted {
        walker = walker.sort_by_file_name();
    }

    let mut files = Vec::new();
    let entries = walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e));

    for entry in entries {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            Error::io(path, e.into())
        })?;

        if !is_file(&entry) {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            warn!("Skipping file with non UTF-8 name: {}", entry.path().display());
            continue;
        };
        if accept(name) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

fn is_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}
