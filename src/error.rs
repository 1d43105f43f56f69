//! Error types for upmix.

use std::path::PathBuf;

/// Result type alias for upmix operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for upmix.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// No input paths on the command line.
    #[error("no audio files provided (usage: upmix <file1> [file2 ...])")]
    NoInputFiles,

    /// None of the given paths resolved to a file.
    #[error("no valid input files were provided")]
    NoValidInputFiles,

    /// A required external tool is missing.
    #[error("{tool} is required but was not found in PATH ({hint})")]
    ToolNotFound {
        /// Tool name.
        tool: String,
        /// Platform-specific install hint.
        hint: String,
    },

    /// An explicitly configured tool path does not exist.
    #[error("{tool} not found at configured path: {path}")]
    ToolPathInvalid {
        /// Tool name.
        tool: String,
        /// Configured path.
        path: PathBuf,
    },

    /// Failed to start an external tool.
    #[error("failed to run '{program}'")]
    ToolSpawn {
        /// Program that could not be started.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// ffprobe exited with an error.
    #[error("could not probe file '{path}': {stderr}")]
    ProbeFailed {
        /// Probed file.
        path: PathBuf,
        /// ffprobe error output.
        stderr: String,
    },

    /// ffprobe output was not valid JSON.
    #[error("could not parse ffprobe output for '{path}'")]
    ProbeParse {
        /// Probed file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// File has no audio stream.
    #[error("no audio stream found in '{path}'")]
    NoAudioStream {
        /// Probed file.
        path: PathBuf,
    },

    /// File is not a two-channel source.
    #[error("'{path}' is not a valid stereo file (channels={channels})")]
    NotStereo {
        /// Probed file.
        path: PathBuf,
        /// Channel count reported by ffprobe.
        channels: u32,
    },

    /// Two inputs of one run resolve to the same output file.
    #[error("output '{output}' is already produced by '{first}' in this run")]
    OutputConflict {
        /// Shared output path.
        output: PathBuf,
        /// Input that claimed the output first.
        first: PathBuf,
    },

    /// ffmpeg exited with a non-zero status.
    #[error("ffmpeg failed with exit code {}", .exit_code.map_or_else(|| "unknown".to_string(), |c| c.to_string()))]
    EncoderFailed {
        /// Exit code, if the process was not killed by a signal.
        exit_code: Option<i32>,
        /// Printable form of the command line.
        command: String,
        /// Captured stderr.
        stderr: String,
    },
}

impl Error {
    /// Whether this error concerns a single input file rather than the whole run.
    pub const fn is_per_file(&self) -> bool {
        matches!(
            self,
            Self::ProbeFailed { .. }
                | Self::ProbeParse { .. }
                | Self::NoAudioStream { .. }
                | Self::NotStereo { .. }
                | Self::OutputConflict { .. }
                | Self::EncoderFailed { .. }
        )
    }
}
