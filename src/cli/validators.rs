//! CLI argument validators.
//!
//! Shared validation functions for CLI argument parsing.

use crate::constants::{MAX_DELAY_MS, MAX_FREQUENCY_HZ, MAX_SHELF_GAIN_DB};

/// Parse and validate a bounded float value.
///
/// # Arguments
///
/// * `s` - The string to parse
/// * `min` - Minimum allowed value (inclusive)
/// * `max` - Maximum allowed value (inclusive)
/// * `name` - Name of the parameter for error messages
pub fn parse_bounded_float(s: &str, min: f64, max: f64, name: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !(min..=max).contains(&value) {
        return Err(format!(
            "{name} must be between {min} and {max}, got {value}"
        ));
    }

    Ok(value)
}

/// Parse and validate a frequency in Hz (greater than 0).
pub fn parse_frequency_hz(s: &str) -> Result<f64, String> {
    let value = parse_bounded_float(s, 0.0, MAX_FREQUENCY_HZ, "frequency")?;
    if value == 0.0 {
        return Err("frequency must be greater than 0".to_string());
    }
    Ok(value)
}

/// Parse and validate a delay in milliseconds.
pub fn parse_delay_ms(s: &str) -> Result<f64, String> {
    parse_bounded_float(s, 0.0, MAX_DELAY_MS, "delay")
}

/// Parse and validate a shelf gain in dB.
pub fn parse_shelf_gain_db(s: &str) -> Result<f64, String> {
    parse_bounded_float(s, -MAX_SHELF_GAIN_DB, MAX_SHELF_GAIN_DB, "gain")
}

/// Parse and validate an ffmpeg bitrate string.
pub fn parse_bitrate(s: &str) -> Result<String, String> {
    crate::config::validate_bitrate(s)
        .map(|()| s.to_string())
        .map_err(|e| e.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bounded_float_valid() {
        assert_eq!(
            parse_bounded_float("50.0", -100.0, 100.0, "test").ok(),
            Some(50.0)
        );
        assert_eq!(
            parse_bounded_float("100.0", -100.0, 100.0, "test").ok(),
            Some(100.0)
        );
    }

    #[test]
    fn test_parse_bounded_float_invalid_range() {
        let err = parse_bounded_float("101.0", -100.0, 100.0, "test");
        assert!(err.unwrap_err().contains("test must be between"));
    }

    #[test]
    fn test_parse_bounded_float_invalid_number() {
        let err = parse_bounded_float("abc", -100.0, 100.0, "test");
        assert!(err.unwrap_err().contains("not a valid number"));
    }

    #[test]
    fn test_parse_bounded_float_rejects_nan() {
        assert!(parse_bounded_float("NaN", -100.0, 100.0, "test").is_err());
    }

    #[test]
    fn test_parse_frequency() {
        assert_eq!(parse_frequency_hz("120").ok(), Some(120.0));
        assert!(parse_frequency_hz("0").is_err());
        assert!(parse_frequency_hz("200000").is_err());
    }

    #[test]
    fn test_parse_delay() {
        assert_eq!(parse_delay_ms("0").ok(), Some(0.0));
        assert_eq!(parse_delay_ms("1.5").ok(), Some(1.5));
        assert!(parse_delay_ms("-1").is_err());
    }

    #[test]
    fn test_parse_shelf_gain() {
        assert_eq!(parse_shelf_gain_db("-6").ok(), Some(-6.0));
        assert!(parse_shelf_gain_db("31").is_err());
    }

    #[test]
    fn test_parse_bitrate() {
        assert_eq!(parse_bitrate("640k").ok().as_deref(), Some("640k"));
        assert!(parse_bitrate("640 k").is_err());
    }
}
