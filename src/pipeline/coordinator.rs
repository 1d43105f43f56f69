//! Pipeline coordination for file processing.

use crate::config::OutputFormat;
use crate::constants::{AUDIO_EXTENSIONS, OUTPUT_SUFFIX};
use crate::error::{Error, Result};
use crate::ffmpeg::{Toolchain, UpmixParams};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Fully resolved settings for a run.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    /// Resolved ffmpeg/ffprobe locations.
    pub tools: Toolchain,
    /// Output directory (None = same as input).
    pub output_dir: Option<PathBuf>,
    /// Output codec.
    pub format: OutputFormat,
    /// Filter graph tunables.
    pub params: UpmixParams,
    /// Bitrate used for AC-3.
    pub ac3_bitrate: String,
    /// Skip inputs whose output already exists.
    pub skip_existing: bool,
    /// Print commands instead of running ffmpeg.
    pub dry_run: bool,
    /// Show the encoder spinner.
    pub progress_enabled: bool,
}

/// Result of checking whether a file should be processed.
#[derive(Debug, PartialEq, Eq)]
pub enum ProcessCheck {
    /// File should be processed.
    Process,
    /// Skip - output already exists.
    SkipExists,
}

/// Determine the output directory for a file.
pub fn output_dir_for(input: &Path, explicit_output_dir: Option<&Path>) -> PathBuf {
    explicit_output_dir.map_or_else(
        || {
            input
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
        },
        Path::to_path_buf,
    )
}

/// Get the upmixed output path for an input file.
///
/// `song.wav` becomes `song_5.1_upmixed.flac` (or `.ac3`).
/// The stem is carried over byte for byte, so non-UTF-8 names stay distinct.
pub fn output_path_for(input: &Path, output_dir: &Path, format: OutputFormat) -> PathBuf {
    let mut name = input
        .file_stem()
        .map_or_else(|| OsString::from("output"), OsStr::to_os_string);
    name.push(OUTPUT_SUFFIX);
    name.push(".");
    name.push(format.extension());

    output_dir.join(name)
}

/// Outputs already assigned to an input during this run.
#[derive(Debug, Default)]
pub struct OutputClaims {
    owners: HashMap<PathBuf, PathBuf>,
}

impl OutputClaims {
    /// Reserve `output` for `input`.
    ///
    /// Fails when an earlier input of the same run maps to the same output.
    pub fn claim(&mut self, input: &Path, output: &Path) -> Result<()> {
        match self.owners.entry(output.to_path_buf()) {
            Entry::Occupied(owner) => Err(Error::OutputConflict {
                output: output.to_path_buf(),
                first: owner.get().clone(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(input.to_path_buf());
                Ok(())
            }
        }
    }
}

/// Check if a file should be processed.
pub fn should_process(output: &Path, skip_existing: bool) -> ProcessCheck {
    if skip_existing && output.exists() {
        return ProcessCheck::SkipExists;
    }
    ProcessCheck::Process
}

/// Collect input files from paths.
///
/// Files are taken as given; directories are scanned recursively for audio
/// files, skipping previous upmix outputs. Symlinked directories are not
/// followed. Missing paths and unreadable directories are reported and
/// dropped. Duplicates keep their first position.
pub fn collect_input_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            push_unique(&mut files, path.clone());
        } else if path.is_dir() {
            let mut found = Vec::new();
            collect_audio_files_recursive(path, &mut found);
            found.sort();
            debug!("Found {} audio file(s) in {}", found.len(), path.display());
            for file in found {
                push_unique(&mut files, file);
            }
        } else {
            warn!("'{}' is not a valid file path and will be skipped", path.display());
        }
    }

    files
}

fn push_unique(files: &mut Vec<PathBuf>, path: PathBuf) {
    if !files.contains(&path) {
        files.push(path);
    }
}

/// Recursively collect audio files from a directory.
fn collect_audio_files_recursive(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Cannot read directory '{}', skipping: {e}", dir.display());
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Cannot read entry in '{}', skipping: {e}", dir.display());
                continue;
            }
        };
        let path = entry.path();

        // file_type() does not follow symlinks
        if entry.file_type().is_ok_and(|t| t.is_dir()) {
            collect_audio_files_recursive(&path, files);
        } else if is_audio_file(&path) && !is_upmix_output(&path) {
            files.push(path);
        }
    }
}

/// Check if a file has a supported audio extension.
fn is_audio_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| {
        AUDIO_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(OsStr::new(known)))
    })
}

/// Check if a file looks like something this tool already produced.
fn is_upmix_output(path: &Path) -> bool {
    path.file_stem()
        .is_some_and(|stem| stem.to_string_lossy().ends_with(OUTPUT_SUFFIX))
}
