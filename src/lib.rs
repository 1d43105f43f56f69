//! Upmix - stereo to 5.1 surround conversion CLI tool.
//!
//! This crate builds an FFmpeg filter graph that synthesizes center, LFE and
//! surround channels from a stereo source and drives `ffmpeg`/`ffprobe` as
//! subprocesses to apply it.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod ffmpeg;
pub mod output;
pub mod pipeline;

use clap::Parser;
use cli::{Cli, Command, ConfigAction, UpmixArgs};
use config::{Config, config_file_path, load_config_file, save_config, validate_config};
use ffmpeg::Toolchain;
use output::{RunSummary, console};
use pipeline::{
    OutputClaims, ProcessCheck, ProcessOptions, ProcessStatus, collect_input_files, output_dir_for,
    output_path_for, process_file, should_process,
};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

pub use error::{Error, Result};

/// Main entry point for upmix CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.upmix.verbose, cli.upmix.quiet);

    if let Err(e) = ctrlc::set_handler(|| {
        eprintln!("\n\nProcess cancelled by user. Exiting.");
        std::process::exit(0);
    }) {
        warn!("Failed to install Ctrl+C handler: {e}");
    }

    let config_path = cli.config.map_or_else(config_file_path, Ok);

    if let Some(command) = cli.command {
        return handle_command(command, &config_path?);
    }

    if cli.inputs.is_empty() {
        return Err(Error::NoInputFiles);
    }

    // Without a resolvable config location the built-in defaults apply.
    let config = match config_path {
        Ok(path) => load_config_file(&path)?,
        Err(_) => Config::default(),
    };
    upmix_files(&cli.inputs, &cli.upmix, config)
}

/// Upmix all input files with the given options.
fn upmix_files(inputs: &[PathBuf], args: &UpmixArgs, config: Config) -> Result<()> {
    let total_start = Instant::now();

    if !args.quiet {
        console::print_banner();
    }

    let files = collect_input_files(inputs);
    if files.is_empty() {
        return Err(Error::NoValidInputFiles);
    }

    let options = resolve_options(args, config)?;
    info!("Found {} file(s) to process, writing {}", files.len(), options.format);

    if !args.quiet {
        console::print_file_table(&files);
    }

    let mut summary = RunSummary::default();
    let mut claims = OutputClaims::default();

    for file in &files {
        console::print_file_header(file);

        let output_dir = output_dir_for(file, options.output_dir.as_deref());
        let output = output_path_for(file, &output_dir, options.format);
        let outcome = claims.claim(file, &output).and_then(|()| {
            if should_process(&output, options.skip_existing) == ProcessCheck::SkipExists {
                return Ok(None);
            }
            process_file(file, &options).map(Some)
        });

        match outcome {
            Ok(None) => {
                console::print_skipped(file, &output);
                summary.skipped += 1;
            }
            Ok(Some(result)) => {
                if result.status == ProcessStatus::Upmixed {
                    console::print_success(&result.output, &result.stream, result.duration_secs);
                }
                summary.processed += 1;
            }
            Err(e) if e.is_per_file() => {
                console::print_failure(file, &e);
                summary.failed += 1;
                if args.fail_fast {
                    return Err(e);
                }
            }
            Err(e) => return Err(e),
        }
    }

    summary.duration_secs = total_start.elapsed().as_secs_f64();
    console::print_summary(&summary);

    if summary.failed > 0 {
        warn!("{} file(s) had errors", summary.failed);
    }

    Ok(())
}

/// Merge CLI arguments over the configuration file and resolve external tools.
///
/// Precedence: command line (and `UPMIX_*` environment) > config file > built-in defaults.
pub fn resolve_options(args: &UpmixArgs, mut config: Config) -> Result<ProcessOptions> {
    let params = &mut config.upmix;
    if let Some(v) = args.lfe_crossover {
        params.lfe_crossover_hz = v;
    }
    if let Some(v) = args.front_delay {
        params.front_delay_ms = v;
    }
    if let Some(v) = args.rear_delay {
        params.rear_delay_ms = v;
    }
    if let Some(v) = args.surround_lowpass {
        params.surround_lowpass_hz = v;
    }
    if let Some(v) = args.center_shelf {
        params.center_shelf_hz = v;
    }
    if let Some(v) = args.center_gain {
        params.center_shelf_gain_db = v;
    }
    if let Some(ref v) = args.ac3_bitrate {
        config.defaults.ac3_bitrate.clone_from(v);
    }

    validate_config(&config)?;

    let tools = Toolchain::resolve(
        args.ffmpeg.as_deref().or(config.tools.ffmpeg.as_deref()),
        args.ffprobe.as_deref().or(config.tools.ffprobe.as_deref()),
    )?;
    debug!(
        "Using ffmpeg: {}, ffprobe: {}",
        tools.ffmpeg.display(),
        tools.ffprobe.display()
    );

    Ok(ProcessOptions {
        tools,
        output_dir: args.output_dir.clone().or(config.defaults.output_dir),
        format: args.format.unwrap_or(config.defaults.format),
        params: config.upmix,
        ac3_bitrate: config.defaults.ac3_bitrate,
        skip_existing: args.skip_existing || config.defaults.skip_existing,
        dry_run: args.dry_run,
        progress_enabled: !args.quiet && !args.no_progress,
    })
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).with_target(false).init();
}

fn handle_command(command: Command, config_path: &Path) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(action, config_path),
    }
}

fn handle_config_command(action: ConfigAction, config_path: &Path) -> Result<()> {
    match action {
        ConfigAction::Init => {
            if config_path.exists() {
                println!("Configuration file already exists: {}", config_path.display());
            } else {
                save_config(&Config::default(), config_path)?;
                println!("Created configuration file: {}", config_path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_config_file(config_path)?;
            let rendered =
                toml::to_string_pretty(&config).map_err(|e| Error::ConfigSerialize { source: e })?;
            println!("# {}", config_path.display());
            print!("{rendered}");
            Ok(())
        }
        ConfigAction::Path => {
            println!("{}", config_path.display());
            Ok(())
        }
    }
}
