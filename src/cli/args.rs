//! CLI argument definitions.

use crate::cli::validators::{
    parse_bitrate, parse_delay_ms, parse_frequency_hz, parse_shelf_gain_db,
};
use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Upmix stereo audio files to 5.1 surround using FFmpeg.
///
/// Each input produces `<name>_5.1_upmixed.flac` (or `.ac3`) next to it.
#[derive(Debug, Parser)]
#[command(name = "upmix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Audio files or directories to upmix.
    pub inputs: Vec<PathBuf>,

    /// Path to an alternate configuration file.
    #[arg(long, global = true, env = "UPMIX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Options for upmixing.
    #[command(flatten)]
    pub upmix: UpmixArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for upmixing.
#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct UpmixArgs {
    /// Output format.
    #[arg(short, long, value_enum, env = "UPMIX_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Output directory (default: same as input).
    #[arg(short, long, env = "UPMIX_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// LFE low-pass crossover in Hz.
    #[arg(long, value_parser = parse_frequency_hz, env = "UPMIX_LFE_CROSSOVER")]
    pub lfe_crossover: Option<f64>,

    /// Front left/right delay in milliseconds.
    #[arg(long, value_parser = parse_delay_ms, env = "UPMIX_FRONT_DELAY")]
    pub front_delay: Option<f64>,

    /// Surround left/right delay in milliseconds.
    #[arg(long, value_parser = parse_delay_ms, env = "UPMIX_REAR_DELAY")]
    pub rear_delay: Option<f64>,

    /// Surround low-pass cutoff in Hz.
    #[arg(long, value_parser = parse_frequency_hz, env = "UPMIX_SURROUND_LOWPASS")]
    pub surround_lowpass: Option<f64>,

    /// Center channel high-shelf frequency in Hz.
    #[arg(long, value_parser = parse_frequency_hz, env = "UPMIX_CENTER_SHELF")]
    pub center_shelf: Option<f64>,

    /// Center channel high-shelf gain in dB.
    #[arg(long, value_parser = parse_shelf_gain_db, allow_negative_numbers = true, env = "UPMIX_CENTER_GAIN")]
    pub center_gain: Option<f64>,

    /// AC-3 bitrate (e.g. 640k, 448k).
    #[arg(long, value_parser = parse_bitrate, env = "UPMIX_AC3_BITRATE")]
    pub ac3_bitrate: Option<String>,

    /// Path to the ffmpeg executable (default: search PATH).
    #[arg(long, env = "UPMIX_FFMPEG")]
    pub ffmpeg: Option<PathBuf>,

    /// Path to the ffprobe executable (default: search PATH).
    #[arg(long, env = "UPMIX_FFPROBE")]
    pub ffprobe: Option<PathBuf>,

    /// Skip files whose upmixed output already exists.
    #[arg(long)]
    pub skip_existing: bool,

    /// Stop on first error.
    #[arg(long)]
    pub fail_fast: bool,

    /// Print the ffmpeg commands without running them.
    #[arg(long)]
    pub dry_run: bool,

    /// Suppress informational log output and progress.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable the progress spinner.
    #[arg(long)]
    pub no_progress: bool,
}
