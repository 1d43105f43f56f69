//! Configuration type definitions.

use crate::constants::{DEFAULT_AC3_BITRATE, output_extensions};
use crate::ffmpeg::UpmixParams;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default run settings.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Filter graph tunables.
    #[serde(default)]
    pub upmix: UpmixParams,

    /// External tool locations.
    #[serde(default)]
    pub tools: ToolsConfig,
}

/// Default run settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Output container/codec.
    pub format: OutputFormat,

    /// Output directory (None = next to the input).
    pub output_dir: Option<PathBuf>,

    /// Bitrate used for AC-3 output.
    pub ac3_bitrate: String,

    /// Skip inputs whose output already exists.
    pub skip_existing: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            output_dir: None,
            ac3_bitrate: DEFAULT_AC3_BITRATE.to_string(),
            skip_existing: false,
        }
    }
}

/// Explicit locations for ffmpeg and ffprobe.
///
/// Unset entries are looked up on `PATH`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Path to the ffmpeg executable.
    pub ffmpeg: Option<PathBuf>,
    /// Path to the ffprobe executable.
    pub ffprobe: Option<PathBuf>,
}

/// Supported output formats.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossless FLAC.
    #[default]
    Flac,
    /// Dolby Digital (AC-3).
    Ac3,
}

impl OutputFormat {
    /// File extension without the leading dot.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Flac => output_extensions::FLAC,
            Self::Ac3 => output_extensions::AC3,
        }
    }

    /// ffmpeg audio codec name.
    pub const fn codec(self) -> &'static str {
        match self {
            Self::Flac => "flac",
            Self::Ac3 => "ac3",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}
