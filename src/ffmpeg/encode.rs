//! ffmpeg invocation for a single upmix.

use crate::config::OutputFormat;
use crate::error::{Error, Result};
use crate::ffmpeg::filter::{OUTPUT_LABEL, UpmixParams, build_filter_graph};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, trace};

/// Everything needed to upmix one file.
#[derive(Debug, Clone)]
pub struct EncodeJob {
    /// Stereo source.
    pub input: PathBuf,
    /// 5.1 destination.
    pub output: PathBuf,
    /// Output codec.
    pub format: OutputFormat,
    /// Filter graph tunables.
    pub params: UpmixParams,
    /// Bitrate, only used for AC-3.
    pub ac3_bitrate: String,
}

impl EncodeJob {
    /// Command-line arguments passed to ffmpeg (program name excluded).
    pub fn arguments(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = ["-hide_banner", "-loglevel", "error", "-i"]
            .into_iter()
            .map(OsString::from)
            .collect();
        args.push(self.input.clone().into_os_string());
        args.push("-filter_complex".into());
        args.push(build_filter_graph(&self.params).into());
        args.extend(["-map", OUTPUT_LABEL, "-y", "-c:a", self.format.codec()].map(OsString::from));
        if self.format == OutputFormat::Ac3 {
            args.push("-b:a".into());
            args.push(self.ac3_bitrate.clone().into());
        }
        args.push(self.output.clone().into_os_string());
        args
    }

    /// Human-readable command line, quoting arguments that contain whitespace.
    pub fn printable_command(&self, program: &Path) -> String {
        std::iter::once(program.as_os_str().to_os_string())
            .chain(self.arguments())
            .map(|arg| {
                let arg = arg.to_string_lossy().into_owned();
                if arg.chars().any(char::is_whitespace) {
                    format!("\"{arg}\"")
                } else {
                    arg
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run ffmpeg and wait for it to finish.
    pub fn run(&self, ffmpeg: &Path) -> Result<()> {
        let command = self.printable_command(ffmpeg);
        debug!("Running: {command}");

        let output = Command::new(ffmpeg)
            .args(self.arguments())
            .output()
            .map_err(|e| Error::ToolSpawn {
                program: ffmpeg.display().to_string(),
                source: e,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !stderr.is_empty() {
            trace!("ffmpeg stderr: {stderr}");
        }

        if output.status.success() {
            Ok(())
        } else {
            Err(Error::EncoderFailed {
                exit_code: output.status.code(),
                command,
                stderr,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(format: OutputFormat) -> EncodeJob {
        EncodeJob {
            input: PathBuf::from("/music/song.wav"),
            output: PathBuf::from("/music/song_5.1_upmixed.flac"),
            format,
            params: UpmixParams::default(),
            ac3_bitrate: "640k".to_string(),
        }
    }

    fn args_as_strings(job: &EncodeJob) -> Vec<String> {
        job.arguments()
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_flac_arguments() {
        let args = args_as_strings(&job(OutputFormat::Flac));
        let expected_graph = build_filter_graph(&UpmixParams::default());
        assert_eq!(
            args,
            vec![
                "-hide_banner",
                "-loglevel",
                "error",
                "-i",
                "/music/song.wav",
                "-filter_complex",
                expected_graph.as_str(),
                "-map",
                "[a]",
                "-y",
                "-c:a",
                "flac",
                "/music/song_5.1_upmixed.flac",
            ]
        );
    }

    #[test]
    fn test_ac3_arguments_include_bitrate() {
        let args = args_as_strings(&job(OutputFormat::Ac3));
        let codec = args.iter().position(|a| a == "-c:a");
        assert_eq!(codec.map(|i| args[i + 1].as_str()), Some("ac3"));
        let bitrate = args.iter().position(|a| a == "-b:a");
        assert_eq!(bitrate.map(|i| args[i + 1].as_str()), Some("640k"));
        // Output path stays last
        assert_eq!(args.last().map(String::as_str), Some("/music/song_5.1_upmixed.flac"));
    }

    #[test]
    fn test_flac_has_no_bitrate() {
        let args = args_as_strings(&job(OutputFormat::Flac));
        assert!(!args.iter().any(|a| a == "-b:a"));
    }

    #[test]
    fn test_printable_command_quotes_whitespace() {
        let mut j = job(OutputFormat::Flac);
        j.input = PathBuf::from("/music/my song.wav");
        let printed = j.printable_command(Path::new("ffmpeg"));
        assert!(printed.starts_with("ffmpeg -hide_banner"));
        assert!(printed.contains("\"/music/my song.wav\""));
        assert!(printed.contains(" /music/song_5.1_upmixed.flac"));
    }
}
