//! Search playlists: media files under the music root matching path filters

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::{SearchSpec, Settings};
use crate::error::Result;
use crate::generator::scan::scan_files;
use crate::utils::{pattern, to_relative};

/// Extensions picked up by search playlists (case-sensitive)
pub const MEDIA_EXTENSIONS: [&str; 3] = ["mp3", "ogg", "flac"];

/// Resolves search specs into music-root-relative paths
pub struct SearchPlaylistBuilder<'a> {
    settings: &'a Settings,
}

impl<'a> SearchPlaylistBuilder<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// List the media files selected by `spec`, in traversal order
    pub fn build(&self, spec: &SearchSpec) -> Result<Vec<String>> {
        let music_dir = Path::new(&self.settings.music_dir);
        let mut entries = Vec::new();

        for root in self.search_roots(spec) {
            let files = scan_files(&root, self.settings, is_media_file)?;
            debug!("{} media files under {}", files.len(), root.display());

            for file in files {
                let within_root = to_relative(&file, &root)?;
                if !spec.path_patterns.is_empty()
                    && !pattern::any_match(&spec.path_patterns, &within_root)
                {
                    continue;
                }
                if pattern::any_match(&spec.not_path_patterns, &within_root) {
                    continue;
                }
                entries.push(to_relative(&file, music_dir)?);
            }
        }

        Ok(entries)
    }

    /// The music root itself, or each listed subdirectory in order
    fn search_roots(&self, spec: &SearchSpec) -> Vec<PathBuf> {
        if spec.dirs.is_empty() {
            vec![PathBuf::from(&self.settings.music_dir)]
        } else {
            spec.dirs
                .iter()
                .map(|dir| PathBuf::from(format!("{}{}", self.settings.music_dir, dir)))
                .collect()
        }
    }
}

fn is_media_file(name: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(_, ext)| MEDIA_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::utils::PathPattern;
    use std::fs;
    use tempfile::TempDir;

    fn library() -> (TempDir, Settings) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        for file in [
            "a.mp3",
            "notes.txt",
            "cover.jpg",
            "upper.MP3",
            "sub/b.flac",
            "Rock/live/01.ogg",
            "Rock/studio/02.mp3",
            "Jazz/03.flac",
            "Jazz/demo/04.mp3",
        ] {
            let path = root.join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "").unwrap();
        }
        let settings = Settings {
            music_dir: format!("{}/", root.display()),
            target_dir: format!("{}/out/", root.display()),
            sorted: true,
            include_hidden: false,
        };
        (dir, settings)
    }

    fn spec(dirs: &[&str], include: &[&str], exclude: &[&str]) -> SearchSpec {
        SearchSpec {
            name: "test".to_string(),
            dirs: dirs.iter().map(|d| d.to_string()).collect(),
            path_patterns: include.iter().map(|p| PathPattern::parse(p).unwrap()).collect(),
            not_path_patterns: exclude.iter().map(|p| PathPattern::parse(p).unwrap()).collect(),
            copy_from: None,
        }
    }

    #[test]
    fn test_unfiltered_search_finds_all_media() {
        let (_dir, settings) = library();
        let entries = SearchPlaylistBuilder::new(&settings)
            .build(&spec(&[], &[], &[]))
            .unwrap();

        assert_eq!(
            entries,
            vec![
                "Jazz/03.flac",
                "Jazz/demo/04.mp3",
                "Rock/live/01.ogg",
                "Rock/studio/02.mp3",
                "a.mp3",
                "sub/b.flac",
            ]
        );
    }

    #[test]
    fn test_dirs_restrict_roots_in_declared_order() {
        let (_dir, settings) = library();
        let entries = SearchPlaylistBuilder::new(&settings)
            .build(&spec(&["Rock", "Jazz"], &[], &[]))
            .unwrap();

        assert_eq!(
            entries,
            vec![
                "Rock/live/01.ogg",
                "Rock/studio/02.mp3",
                "Jazz/03.flac",
                "Jazz/demo/04.mp3",
            ]
        );
    }

    #[test]
    fn test_path_patterns_match_within_search_root() {
        let (_dir, settings) = library();
        let entries = SearchPlaylistBuilder::new(&settings)
            .build(&spec(&["Rock"], &["#^live/#"], &[]))
            .unwrap();

        assert_eq!(entries, vec!["Rock/live/01.ogg"]);
    }

    #[test]
    fn test_not_path_patterns_exclude() {
        let (_dir, settings) = library();
        let entries = SearchPlaylistBuilder::new(&settings)
            .build(&spec(&[], &["/\\.(mp3|ogg)$/"], &["live", "demo"]))
            .unwrap();

        assert_eq!(entries, vec!["Rock/studio/02.mp3", "a.mp3"]);
    }

    #[test]
    fn test_no_matches_is_empty() {
        let (_dir, settings) = library();
        let entries = SearchPlaylistBuilder::new(&settings)
            .build(&spec(&[], &["nothing-here"], &[]))
            .unwrap();

        assert!(entries.is_empty());
    }

    #[test]
    fn test_missing_search_dir_fails() {
        let (_dir, settings) = library();
        let err = SearchPlaylistBuilder::new(&settings)
            .build(&spec(&["Classical"], &[], &[]))
            .unwrap_err();

        assert!(matches!(err, Error::MissingDirectory(_)));
    }

    #[test]
    fn test_media_extension_is_case_sensitive() {
        assert!(is_media_file("x.mp3"));
        assert!(is_media_file("x.tar.flac"));
        assert!(!is_media_file("x.MP3"));
        assert!(!is_media_file("mp3"));
    }
}
