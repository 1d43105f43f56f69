//! Configuration validation.

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    config.upmix.validate()?;
    validate_bitrate(&config.defaults.ac3_bitrate)?;
    Ok(())
}

/// Validate an ffmpeg bitrate string such as `640k`, `448000` or `1M`.
pub fn validate_bitrate(bitrate: &str) -> Result<()> {
    let digits = bitrate.trim_end_matches(['k', 'K', 'm', 'M']);
    let suffix_len = bitrate.len() - digits.len();

    if digits.is_empty() || suffix_len > 1 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::ConfigValidation {
            message: format!("ac3_bitrate must look like '640k' or '448000', got '{bitrate}'"),
        });
    }

    if digits.chars().all(|c| c == '0') {
        return Err(Error::ConfigValidation {
            message: "ac3_bitrate must be greater than zero".to_string(),
        });
    }

    Ok(())
}
