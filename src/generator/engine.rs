//! Generator orchestration

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::{Config, ConvertSpec, PlaylistSpec, SearchSpec};
use crate::error::Result;
use crate::generator::{M3uConverter, PlaylistWriter, SearchPlaylistBuilder};

/// Totals for a generator run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerateSummary {
    pub files_written: usize,
    pub entries_written: usize,
}

impl GenerateSummary {
    fn record(&mut self, entries: usize) {
        self.files_written += 1;
        self.entries_written += entries;
    }
}

/// Resolves every playlist spec in a config, in declaration order
pub struct Generator {
    config: Config,
    writer: PlaylistWriter,
}

impl Generator {
    pub fn new(config: Config, dry_run: bool) -> Self {
        Self {
            config,
            writer: PlaylistWriter::new(dry_run),
        }
    }

    /// Process all specs, stopping at the first error
    pub fn generate(&self) -> Result<GenerateSummary> {
        let mut summary = GenerateSummary::default();

        for spec in &self.config.playlists {
            info!("Generating playlist: {}", spec.label());
            let spec_summary = self.generate_one(spec)?;
            summary.files_written += spec_summary.files_written;
            summary.entries_written += spec_summary.entries_written;
        }

        Ok(summary)
    }

    /// Resolve and write a single spec
    pub fn generate_one(&self, spec: &PlaylistSpec) -> Result<GenerateSummary> {
        match spec {
            PlaylistSpec::Search(search) => self.generate_search(search),
            PlaylistSpec::Convert(convert) => self.generate_convert(convert),
        }
    }

    fn generate_search(&self, spec: &SearchSpec) -> Result<GenerateSummary> {
        let entries = SearchPlaylistBuilder::new(&self.config.settings).build(spec)?;
        debug!("Search '{}' matched {} files", spec.name, entries.len());

        let target = self.target_path(format!("{}.m3u", spec.name));
        let base = spec
            .copy_from
            .as_ref()
            .map(|source| self.target_path(format!("{source}.m3u")));

        let mut summary = GenerateSummary::default();
        summary.record(self.writer.write(&target, &entries, base.as_deref())?);
        Ok(summary)
    }

    fn generate_convert(&self, spec: &ConvertSpec) -> Result<GenerateSummary> {
        let converted = M3uConverter::new(&self.config.settings).convert(spec)?;
        if converted.is_empty() {
            debug!("No .m3u files under '{}'", spec.dir);
        }

        let mut summary = GenerateSummary::default();
        for playlist in &converted {
            let target = self.target_path(&playlist.file_name);
            summary.record(self.writer.write(&target, &playlist.entries, None)?);
        }
        Ok(summary)
    }

    fn target_path(&self, file_name: impl AsRef<OsStr>) -> PathBuf {
        let mut target = OsString::from(&self.config.settings.target_dir);
        target.push(file_name);
        PathBuf::from(target)
    }
}
