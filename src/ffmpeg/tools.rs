//! Locating the ffmpeg and ffprobe executables.

use crate::constants::tools;
use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolved locations of the external tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    /// ffmpeg executable.
    pub ffmpeg: PathBuf,
    /// ffprobe executable.
    pub ffprobe: PathBuf,
}

impl Toolchain {
    /// Resolve both tools, preferring explicit paths over a `PATH` search.
    pub fn resolve(ffmpeg: Option<&Path>, ffprobe: Option<&Path>) -> Result<Self> {
        Ok(Self {
            ffmpeg: resolve_tool(tools::FFMPEG, ffmpeg)?,
            ffprobe: resolve_tool(tools::FFPROBE, ffprobe)?,
        })
    }
}

/// Resolve a single tool.
pub fn resolve_tool(name: &str, explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.is_file() {
            debug!("Using configured {name}: {}", path.display());
            return Ok(path.to_path_buf());
        }
        return Err(Error::ToolPathInvalid {
            tool: name.to_string(),
            path: path.to_path_buf(),
        });
    }

    let search_path = std::env::var_os("PATH").unwrap_or_default();
    find_in_path(name, &search_path).map_or_else(
        || {
            Err(Error::ToolNotFound {
                tool: name.to_string(),
                hint: install_hint().to_string(),
            })
        },
        |found| {
            debug!("Found {name} on PATH: {}", found.display());
            Ok(found)
        },
    )
}

/// Search a `PATH`-style list of directories for an executable.
pub fn find_in_path(name: &str, search_path: &OsStr) -> Option<PathBuf> {
    std::env::split_paths(search_path)
        .filter(|dir| !dir.as_os_str().is_empty())
        .flat_map(|dir| candidate_names(name).map(move |n| dir.join(n)))
        .find(|candidate| is_executable(candidate))
}

#[cfg(windows)]
fn candidate_names(name: &str) -> impl Iterator<Item = String> + '_ {
    [String::new(), ".exe".to_string(), ".cmd".to_string(), ".bat".to_string()]
        .into_iter()
        .map(move |ext| format!("{name}{ext}"))
}

#[cfg(not(windows))]
fn candidate_names(name: &str) -> impl Iterator<Item = String> + '_ {
    std::iter::once(name.to_string())
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .is_ok_and(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Install instructions for the current platform.
pub const fn install_hint() -> &'static str {
    if cfg!(target_os = "macos") {
        "install with: brew install ffmpeg"
    } else if cfg!(windows) {
        "install with: choco install ffmpeg"
    } else {
        "install with: sudo apt install ffmpeg"
    }
}
