//! Root directory normalization and root-relative paths

use std::path::{Component, Path};

use crate::error::{Error, Result};

/// Ensure a directory string ends with a path separator
///
/// Idempotent: a path that already ends in `/` (or `\` on Windows) is
/// returned unchanged.
pub fn normalize_dir(path: &str) -> Result<String> {
    if path.is_empty() {
        return Err(Error::InvalidPath {
            path: path.to_string(),
            reason: "empty directory path",
        });
    }
    if path.ends_with('/') || (cfg!(windows) && path.ends_with('\\')) {
        Ok(path.to_string())
    } else {
        Ok(format!("{path}/"))
    }
}

/// Compute `path` relative to `base`, using `/` separators
///
/// Paths outside `base` climb with `..` segments. The result never carries a
/// trailing separator. Both arguments must be absolute, or both relative.
pub fn to_relative(path: &Path, base: &Path) -> Result<String> {
    if path.is_absolute() != base.is_absolute() {
        return Err(Error::InvalidPath {
            path: path.display().to_string(),
            reason: "cannot relate an absolute path to a relative base",
        });
    }

    let path_parts = normal_parts(path)?;
    let base_parts = normal_parts(base)?;

    let shared = path_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<&str> = vec![".."; base_parts.len() - shared];
    segments.extend(&path_parts[shared..]);

    Ok(segments.join("/"))
}

/// Lexically normalized components of a path, as UTF-8 strings
fn normal_parts(path: &Path) -> Result<Vec<&str>> {
    let mut parts: Vec<&str> = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => {
                let part = part.to_str().ok_or_else(|| Error::InvalidPath {
                    path: path.display().to_string(),
                    reason: "path is not valid UTF-8",
                })?;
                parts.push(part);
            }
            Component::ParentDir => {
                if parts.pop().is_none() {
                    return Err(Error::InvalidPath {
                        path: path.display().to_string(),
                        reason: "path escapes its root",
                    });
                }
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    Ok(parts)
}
