//! Application-wide constants.
//!
//! Every tunable of the upmix filter graph has its default here so the
//! config layer, the CLI and the tests agree on the same numbers.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "upmix";

/// Suffix appended to the input stem to form the output file name.
pub const OUTPUT_SUFFIX: &str = "_5.1_upmixed";

/// Default LFE low-pass crossover in Hz.
pub const DEFAULT_LFE_CROSSOVER_HZ: f64 = 120.0;

/// Default delay applied to the front left/right channels in milliseconds.
pub const DEFAULT_FRONT_DELAY_MS: f64 = 1.5;

/// Default delay applied to the surround channels in milliseconds.
pub const DEFAULT_REAR_DELAY_MS: f64 = 20.0;

/// Default low-pass applied to the surround channels in Hz.
pub const DEFAULT_SURROUND_LOWPASS_HZ: f64 = 7000.0;

/// Default high-shelf corner frequency for the center channel in Hz.
pub const DEFAULT_CENTER_SHELF_HZ: f64 = 2000.0;

/// Default high-shelf gain for the center channel in dB.
pub const DEFAULT_CENTER_SHELF_GAIN_DB: f64 = -6.0;

/// Default AC-3 bitrate (the AC-3 maximum).
pub const DEFAULT_AC3_BITRATE: &str = "640k";

/// Upper bound for any frequency parameter in Hz.
pub const MAX_FREQUENCY_HZ: f64 = 96_000.0;

/// Upper bound for any delay parameter in milliseconds.
pub const MAX_DELAY_MS: f64 = 1_000.0;

/// External tool names.
pub mod tools {
    /// Encoder executable.
    pub const FFMPEG: &str = "ffmpeg";
    /// Probe executable.
    pub const FFPROBE: &str = "ffprobe";
}

/// Output file extensions by format.
pub mod output_extensions {
    /// FLAC output extension.
    pub const FLAC: &str = "flac";
    /// AC-3 output extension.
    pub const AC3: &str = "ac3";
}

/// Audio extensions picked up when scanning directories.
pub const AUDIO_EXTENSIONS: &[&str] = &[
    "wav", "flac", "mp3", "m4a", "aac", "ogg", "opus", "aiff", "aif", "wma", "alac",
];

/// Tick interval for the encoder spinner in milliseconds.
pub const SPINNER_TICK_MS: u64 = 100;

/// Largest high-shelf boost or cut accepted for the center channel in dB.
pub const MAX_SHELF_GAIN_DB: f64 = 30.0;
