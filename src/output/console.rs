//! Human-facing console output.
//!
//! Structured diagnostics go through `tracing`; the banner, file table and
//! per-file results below are the tool's actual user interface and are
//! printed directly.

#![allow(clippy::print_stdout)]

use crate::error::Error;
use crate::ffmpeg::StreamInfo;
use crate::output::progress::format_duration;
use std::fmt::Write as _;
use std::path::Path;

/// Width of section rules.
const RULE_WIDTH: usize = 60;

/// Totals for a complete run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunSummary {
    /// Files upmixed successfully.
    pub processed: usize,
    /// Files skipped because the output already existed.
    pub skipped: usize,
    /// Files that failed.
    pub failed: usize,
    /// Wall-clock time of the run in seconds.
    pub duration_secs: f64,
}

/// Display name of a path (file name only, lossy).
pub fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |n| n.to_string_lossy().into_owned(),
    )
}

/// Render a horizontal rule with a centered title.
pub fn rule(title: &str) -> String {
    let title_len = title.chars().count() + 2;
    let left = RULE_WIDTH.saturating_sub(title_len) / 2;
    let right = RULE_WIDTH.saturating_sub(title_len + left);
    format!("{} {title} {}", "─".repeat(left.max(2)), "─".repeat(right.max(2)))
}

/// Print the startup banner.
pub fn print_banner() {
    let title = format!("Advanced 5.1 FFmpeg Upmixer  v{}", env!("CARGO_PKG_VERSION"));
    let width = title.chars().count() + 2;
    println!("╭{}╮", "─".repeat(width));
    println!("│ {title} │");
    println!("╰{}╯", "─".repeat(width));
}

/// Render the table of files queued for processing.
pub fn render_file_table(files: &[impl AsRef<Path>]) -> String {
    let names: Vec<String> = files.iter().map(|f| display_name(f.as_ref())).collect();
    let index_width = files.len().to_string().len().max("Index".len());
    let name_width = names
        .iter()
        .map(|n| n.chars().count())
        .max()
        .unwrap_or(0)
        .max("Filename".len());

    let mut out = String::new();
    let _ = writeln!(out, "Files to Process");
    let _ = writeln!(out, "{:>index_width$}  {:<name_width$}", "Index", "Filename");
    let _ = writeln!(out, "{}  {}", "─".repeat(index_width), "─".repeat(name_width));
    for (i, name) in names.iter().enumerate() {
        let _ = writeln!(out, "{:>index_width$}  {name}", i + 1);
    }
    out
}

/// Print the table of files queued for processing.
pub fn print_file_table(files: &[impl AsRef<Path>]) {
    print!("{}", render_file_table(files));
    println!();
}

/// Print the header for a file about to be processed.
pub fn print_file_header(input: &Path) {
    println!("{}", rule(&format!("Processing: {}", display_name(input))));
}

/// Print a successful upmix with the probed source and elapsed time.
pub fn print_success(output: &Path, source: &StreamInfo, duration_secs: f64) {
    println!("  ✓ Upmix complete!");
    println!("    Source: {source}");
    println!("    Saved to: {}", display_name(output));
    println!("    Time: {}", format_duration(duration_secs));
    println!();
}

/// Print a skipped file.
pub fn print_skipped(input: &Path, output: &Path) {
    println!(
        "  • Skipping {}: output already exists ({})",
        display_name(input),
        display_name(output)
    );
    println!();
}

/// Print the command a dry run would execute.
pub fn print_dry_run(command: &str, output: &Path) {
    println!("  Would run: {command}");
    println!("  Would write: {}", display_name(output));
    println!();
}

/// Print a per-file failure, including the encoder log if there is one.
pub fn print_failure(input: &Path, error: &Error) {
    match error {
        Error::EncoderFailed {
            command, stderr, ..
        } => {
            println!("  An error occurred during FFmpeg processing.");
            println!("  FFmpeg Command:");
            println!("    {command}");
            println!("  FFmpeg Error Log:");
            for line in stderr.lines() {
                println!("    {line}");
            }
        }
        Error::NotStereo { .. } => {
            println!("  Warning: {error}. Skipping.");
        }
        other => println!("  {other}"),
    }
    println!("  ✗ Failed to process: {}", display_name(input));
    println!();
}

/// Print the end-of-run summary.
pub fn print_summary(summary: &RunSummary) {
    println!("{}", rule("Processing Summary"));
    println!("Successfully processed: {} file(s).", summary.processed);
    if summary.skipped > 0 {
        println!("Skipped (output exists): {} file(s).", summary.skipped);
    }
    if summary.failed > 0 {
        println!("Failed to process: {} file(s).", summary.failed);
    }
    println!("Total time: {}", format_duration(summary.duration_secs));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_display_name_strips_directory() {
        assert_eq!(display_name(Path::new("/music/a b.wav")), "a b.wav");
    }

    #[test]
    fn test_rule_contains_title() {
        let r = rule("Processing Summary");
        assert!(r.contains(" Processing Summary "));
        assert!(r.starts_with('─'));
        assert!(r.ends_with('─'));
    }

    #[test]
    fn test_rule_with_long_title_keeps_edges() {
        let title = "x".repeat(RULE_WIDTH * 2);
        let r = rule(&title);
        assert!(r.starts_with("── "));
        assert!(r.ends_with(" ──"));
    }

    #[test]
    fn test_file_table_layout() {
        let files = vec![
            PathBuf::from("/a/first.wav"),
            PathBuf::from("/b/second track.flac"),
        ];
        let table = render_file_table(&files);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "Files to Process");
        assert!(lines[1].starts_with("Index  Filename"));
        assert_eq!(lines[3], "    1  first.wav");
        assert_eq!(lines[4], "    2  second track.flac");
    }
}
