//! Single file processing pipeline.

use crate::error::{Error, Result};
use crate::ffmpeg::{EncodeJob, StreamInfo, probe_audio};
use crate::output::{console, progress};
use crate::pipeline::{ProcessOptions, output_dir_for, output_path_for};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// What happened to a file that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    /// ffmpeg ran and wrote the output.
    Upmixed,
    /// The command was only printed.
    DryRun,
}

/// Result of processing a single file.
#[derive(Debug)]
pub struct ProcessResult {
    /// Output file path.
    pub output: PathBuf,
    /// Probed input stream.
    pub stream: StreamInfo,
    /// Processing duration in seconds.
    pub duration_secs: f64,
    /// Outcome.
    pub status: ProcessStatus,
}

/// Upmix a single stereo file to 5.1.
///
/// Probes the input, refuses anything that is not two-channel, then runs
/// ffmpeg with the upmix filter graph under a spinner.
pub fn process_file(input: &Path, options: &ProcessOptions) -> Result<ProcessResult> {
    let start_time = Instant::now();

    let stream = probe_audio(&options.tools.ffprobe, input)?;
    debug!("{}: {stream}", input.display());

    if !stream.is_stereo() {
        return Err(Error::NotStereo {
            path: input.to_path_buf(),
            channels: stream.channels,
        });
    }

    let output_dir = output_dir_for(input, options.output_dir.as_deref());
    let output = output_path_for(input, &output_dir, options.format);
    let job = EncodeJob {
        input: input.to_path_buf(),
        output: output.clone(),
        format: options.format,
        params: options.params,
        ac3_bitrate: options.ac3_bitrate.clone(),
    };

    if options.dry_run {
        console::print_dry_run(&job.printable_command(&options.tools.ffmpeg), &output);
        return Ok(ProcessResult {
            output,
            stream,
            duration_secs: start_time.elapsed().as_secs_f64(),
            status: ProcessStatus::DryRun,
        });
    }

    if !output_dir.exists() {
        std::fs::create_dir_all(&output_dir)?;
    }

    let spinner = progress::create_encode_spinner(
        &console::display_name(&output),
        options.progress_enabled,
    );
    let result = job.run(&options.tools.ffmpeg);
    progress::clear_progress(spinner);
    result?;

    let duration_secs = start_time.elapsed().as_secs_f64();
    info!(
        "Upmixed {} -> {} in {}",
        input.display(),
        output.display(),
        progress::format_duration(duration_secs)
    );

    Ok(ProcessResult {
        output,
        stream,
        duration_secs,
        status: ProcessStatus::Upmixed,
    })
}
