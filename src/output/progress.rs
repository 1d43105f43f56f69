//! Progress indicators.

use crate::constants::SPINNER_TICK_MS;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner shown while ffmpeg works on a file.
///
/// ffmpeg does not report progress in `-loglevel error` mode, so this is an
/// indeterminate spinner with elapsed time.
pub fn create_encode_spinner(output_name: &str, enabled: bool) -> Option<ProgressBar> {
    if !enabled {
        return None;
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner:.green} {msg} [{elapsed_precise}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!("Upmixing to {output_name}"));
    pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
    Some(pb)
}

/// Remove a spinner from the terminal.
pub fn clear_progress(pb: Option<ProgressBar>) {
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
}

/// Format a duration in seconds as `1h 02m 03s`, `2m 03s` or `3.4s`.
pub fn format_duration(secs: f64) -> String {
    if secs < 60.0 {
        return format!("{secs:.1}s");
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = secs.round() as u64;
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);

    if hours > 0 {
        format!("{hours}h {minutes:02}m {seconds:02}s")
    } else {
        format!("{minutes}m {seconds:02}s")
    }
}
