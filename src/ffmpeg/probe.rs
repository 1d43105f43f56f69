//! Audio stream probing with ffprobe.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Properties of the first audio stream of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamInfo {
    /// Number of channels (0 if ffprobe did not report it).
    pub channels: u32,
    /// Channel layout name, `unknown` if absent.
    pub layout: String,
    /// Sample rate in Hz (0 if absent).
    pub sample_rate: u32,
    /// Codec name, `unknown` if absent.
    pub codec: String,
}

impl StreamInfo {
    /// Whether the stream can be fed to the stereo upmix graph.
    pub const fn is_stereo(&self) -> bool {
        self.channels == 2
    }
}

impl fmt::Display for StreamInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ch ({}), {} Hz, {}",
            self.channels, self.layout, self.sample_rate, self.codec
        )
    }
}

#[derive(Debug, Deserialize)]
struct ProbeOutput {
    #[serde(default)]
    streams: Vec<ProbeStream>,
}

#[derive(Debug, Deserialize)]
struct ProbeStream {
    #[serde(default)]
    channels: u32,
    channel_layout: Option<String>,
    sample_rate: Option<String>,
    codec_name: Option<String>,
}

/// Probe the first audio stream of `path`.
pub fn probe_audio(ffprobe: &Path, path: &Path) -> Result<StreamInfo> {
    debug!("Probing: {}", path.display());

    let output = Command::new(ffprobe)
        .args([
            "-v",
            "error",
            "-select_streams",
            "a:0",
            "-show_entries",
            "stream=channels,channel_layout,sample_rate,codec_name",
            "-of",
            "json",
        ])
        .arg(path)
        .output()
        .map_err(|e| Error::ToolSpawn {
            program: ffprobe.display().to_string(),
            source: e,
        })?;

    if !output.status.success() {
        return Err(Error::ProbeFailed {
            path: path.to_path_buf(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    parse_probe_json(&output.stdout, path)
}

/// Parse ffprobe's JSON output.
pub fn parse_probe_json(json: &[u8], path: &Path) -> Result<StreamInfo> {
    let parsed: ProbeOutput = serde_json::from_slice(json).map_err(|e| Error::ProbeParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    let stream = parsed
        .streams
        .into_iter()
        .next()
        .ok_or_else(|| Error::NoAudioStream {
            path: path.to_path_buf(),
        })?;

    Ok(StreamInfo {
        channels: stream.channels,
        layout: stream.channel_layout.unwrap_or_else(|| "unknown".to_string()),
        sample_rate: stream
            .sample_rate
            .and_then(|rate| rate.parse().ok())
            .unwrap_or(0),
        codec: stream.codec_name.unwrap_or_else(|| "unknown".to_string()),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<StreamInfo> {
        parse_probe_json(json.as_bytes(), Path::new("song.wav"))
    }

    #[test]
    fn test_parse_stereo() {
        let info = parse(
            r#"{"programs":[],"streams":[{"codec_name":"pcm_s16le","sample_rate":"44100","channels":2,"channel_layout":"stereo"}]}"#,
        )
        .unwrap();
        assert!(info.is_stereo());
        assert_eq!(info.layout, "stereo");
        assert_eq!(info.sample_rate, 44100);
        assert_eq!(info.codec, "pcm_s16le");
    }

    #[test]
    fn test_parse_mono() {
        let info = parse(r#"{"streams":[{"channels":1,"channel_layout":"mono","sample_rate":"48000"}]}"#)
            .unwrap();
        assert!(!info.is_stereo());
        assert_eq!(info.channels, 1);
        assert_eq!(info.codec, "unknown");
    }

    #[test]
    fn test_parse_missing_fields_default() {
        let info = parse(r#"{"streams":[{}]}"#).unwrap();
        assert_eq!(info.channels, 0);
        assert_eq!(info.layout, "unknown");
        assert_eq!(info.sample_rate, 0);
    }

    #[test]
    fn test_parse_no_streams() {
        assert!(matches!(parse(r#"{"streams":[]}"#), Err(Error::NoAudioStream { .. })));
        assert!(matches!(parse("{}"), Err(Error::NoAudioStream { .. })));
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(parse("channels=2"), Err(Error::ProbeParse { .. })));
    }

    #[test]
    fn test_display() {
        let info = StreamInfo {
            channels: 2,
            layout: "stereo".to_string(),
            sample_rate: 48000,
            codec: "flac".to_string(),
        };
        assert_eq!(info.to_string(), "2 ch (stereo), 48000 Hz, flac");
    }
}
