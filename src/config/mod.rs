//! Playlist configuration
//!
//! The YAML document is read into loosely shaped serde structs first, then
//! validated into [`Config`]. Nothing downstream sees an unvalidated field.
//!
//! ```yaml
//! settings:
//!   musicDir: /srv/music
//!   targetDir: /srv/playlists
//! playlists:
//!   - name: all
//!     type: search
//!   - name: rock-no-live
//!     type: search
//!     dirs: [Rock]
//!     notPathPatterns: ["/live/i"]
//!     copyFrom: favourites
//!   - type: convert
//!     dir: Imported
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::utils::{normalize_dir, pattern, PathPattern};

/// Default config file name inside the user config directory
const CONFIG_FILE: &str = "playlists.yaml";

/// Validated generator configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub settings: Settings,
    pub playlists: Vec<PlaylistSpec>,
}

/// Root directories and traversal options
#[derive(Debug, Clone)]
pub struct Settings {
    /// Music root, always ending with a separator
    pub music_dir: String,
    /// Playlist output root, always ending with a separator
    pub target_dir: String,
    /// Sort each directory's entries by file name while walking
    pub sorted: bool,
    /// Walk into dot files and dot directories
    pub include_hidden: bool,
}

/// One declarative playlist entry
#[derive(Debug, Clone)]
pub enum PlaylistSpec {
    Search(SearchSpec),
    Convert(ConvertSpec),
}

/// Scan the music tree for media files
#[derive(Debug, Clone)]
pub struct SearchSpec {
    pub name: String,
    /// Subdirectories of the music root to search; empty means the whole tree
    pub dirs: Vec<String>,
    pub path_patterns: Vec<PathPattern>,
    pub not_path_patterns: Vec<PathPattern>,
    /// Name of a playlist whose output seeds this one
    pub copy_from: Option<String>,
}

/// Rewrite existing `.m3u` files found under a subdirectory
#[derive(Debug, Clone)]
pub struct ConvertSpec {
    pub name: Option<String>,
    pub dir: String,
}

impl PlaylistSpec {
    /// Name used in log messages
    pub fn label(&self) -> &str {
        match self {
            Self::Search(spec) => &spec.name,
            Self::Convert(spec) => spec.name.as_deref().unwrap_or(&spec.dir),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    settings: RawSettings,
    playlists: Vec<RawPlaylist>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSettings {
    music_dir: String,
    target_dir: String,
    #[serde(default)]
    sorted: bool,
    #[serde(default)]
    include_hidden: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPlaylist {
    name: Option<String>,
    #[serde(rename = "type")]
    kind: String,
    dirs: Option<OneOrMany>,
    path_patterns: Option<OneOrMany>,
    not_path_patterns: Option<OneOrMany>,
    copy_from: Option<String>,
    dir: Option<String>,
}

/// A list field that may also be written as a single string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn into_vec(value: Option<Self>) -> Vec<String> {
        match value {
            None => Vec::new(),
            Some(Self::One(item)) => vec![item],
            Some(Self::Many(items)) => items,
        }
    }
}

impl Config {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let config = Self::from_yaml(&contents, path)?;
        debug!(
            "Loaded {} playlists from {}",
            config.playlists.len(),
            path.display()
        );
        Ok(config)
    }

    /// Parse and validate YAML config content; `path` is only used in errors
    pub fn from_yaml(contents: &str, path: &Path) -> Result<Self> {
        let raw: RawConfig = serde_yaml::from_str(contents).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let settings = Settings {
            music_dir: normalize_dir(&raw.settings.music_dir)?,
            target_dir: normalize_dir(&raw.settings.target_dir)?,
            sorted: raw.settings.sorted,
            include_hidden: raw.settings.include_hidden,
        };

        let playlists = raw
            .playlists
            .into_iter()
            .enumerate()
            .map(|(index, entry)| validate_playlist(index, entry, path))
            .collect::<Result<Vec<_>>>()?;

        warn_unknown_copy_sources(&playlists);

        Ok(Self {
            settings,
            playlists,
        })
    }

    /// Default config location: `<config dir>/m3ugen/playlists.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("m3ugen").join(CONFIG_FILE))
    }
}

fn validate_playlist(index: usize, raw: RawPlaylist, path: &Path) -> Result<PlaylistSpec> {
    let name = raw.name.filter(|n| !n.trim().is_empty());

    match raw.kind.as_str() {
        "search" => {
            let name = name.ok_or_else(|| Error::Config {
                path: path.to_path_buf(),
                message: format!("playlist #{} (search) is missing 'name'", index + 1),
            })?;
            Ok(PlaylistSpec::Search(SearchSpec {
                name,
                dirs: OneOrMany::into_vec(raw.dirs),
                path_patterns: pattern::parse_all(&OneOrMany::into_vec(raw.path_patterns))?,
                not_path_patterns: pattern::parse_all(&OneOrMany::into_vec(
                    raw.not_path_patterns,
                ))?,
                copy_from: raw.copy_from.filter(|c| !c.is_empty()),
            }))
        }
        "convert" | "m3uconvert" => {
            let dir = raw.dir.ok_or_else(|| Error::Config {
                path: path.to_path_buf(),
                message: format!("playlist #{} (convert) is missing 'dir'", index + 1),
            })?;
            Ok(PlaylistSpec::Convert(ConvertSpec { name, dir }))
        }
        other => Err(Error::InvalidSpec {
            name: name.unwrap_or_else(|| format!("#{}", index + 1)),
            kind: other.to_string(),
        }),
    }
}

/// `copyFrom` may point at a file left by an earlier run, so this only warns
fn warn_unknown_copy_sources(playlists: &[PlaylistSpec]) {
    for (index, spec) in playlists.iter().enumerate() {
        let PlaylistSpec::Search(search) = spec else {
            continue;
        };
        let Some(source) = &search.copy_from else {
            continue;
        };
        let declared_earlier = playlists[..index].iter().any(|earlier| {
            matches!(earlier, PlaylistSpec::Search(s) if &s.name == source)
        });
        if !declared_earlier {
            warn!(
                "Playlist '{}' copies from '{}', which is not generated earlier in this run",
                search.name, source
            );
        }
    }
}
