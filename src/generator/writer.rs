//! Playlist file output

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};
use crate::utils::render_m3u;

/// Writes playlist files, optionally seeded from an existing playlist
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaylistWriter {
    dry_run: bool,
}

impl PlaylistWriter {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Write `entries` to `target`, returning the number of entries written
    ///
    /// When `copy_from` names an existing file its content is copied first and
    /// the entries are appended after it. A missing base is ignored and the
    /// target is overwritten as usual. Bytes are written as given, so entries
    /// and bases in legacy encodings survive unchanged.
    pub fn write<T: AsRef<[u8]>>(
        &self,
        target: &Path,
        entries: &[T],
        copy_from: Option<&Path>,
    ) -> Result<usize> {
        let body = render_m3u(entries);

        let base = match copy_from {
            Some(base) if base.is_file() => {
                Some(fs::read(base).map_err(|e| Error::io(base, e))?)
            }
            Some(base) => {
                debug!("Copy base {} not found, writing without it", base.display());
                None
            }
            None => None,
        };

        let content = match base {
            Some(mut base) => {
                if !base.is_empty() && !base.ends_with(b"\n") && !body.is_empty() {
                    base.push(b'\n');
                }
                base.extend_from_slice(&body);
                base
            }
            None => body,
        };

        if self.dry_run {
            debug!("Dry run, skipping write of {}", target.display());
        } else {
            if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
            }
            fs::write(target, content).map_err(|e| Error::io(target, e))?;
        }

        println!("wrote {} to {}", entries.len(), target.display());
        Ok(entries.len())
    }
}
