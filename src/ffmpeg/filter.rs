//! Stereo to 5.1 filter graph.
//!
//! The graph splits the stereo input into L/R and derives six channels:
//!
//! | channel | source                    | processing                      |
//! |---------|---------------------------|---------------------------------|
//! | FL, FR  | L, R                      | short delay                     |
//! | FC      | (L+R)/2                   | high-shelf cut                  |
//! | LFE     | (L+R)/2                   | low-pass at the crossover       |
//! | SL, SR  | L, R                      | longer delay, then low-pass     |
//!
//! The six streams are joined into a `5.1` layout on the output label.

use crate::constants::{
    DEFAULT_CENTER_SHELF_GAIN_DB, DEFAULT_CENTER_SHELF_HZ, DEFAULT_FRONT_DELAY_MS,
    DEFAULT_LFE_CROSSOVER_HZ, DEFAULT_REAR_DELAY_MS, DEFAULT_SURROUND_LOWPASS_HZ, MAX_DELAY_MS,
    MAX_FREQUENCY_HZ, MAX_SHELF_GAIN_DB,
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Label of the joined 5.1 stream, used with `-map`.
pub const OUTPUT_LABEL: &str = "[a]";

/// Mono downmix shared by the center and LFE branches.
const MONO_SUM: &str = "amerge=inputs=2,pan=mono|c0=0.5*FL+0.5*FR";

/// Tunables of the upmix filter graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpmixParams {
    /// LFE low-pass cutoff in Hz.
    pub lfe_crossover_hz: f64,
    /// Delay applied to FL/FR in milliseconds.
    pub front_delay_ms: f64,
    /// Delay applied to SL/SR in milliseconds.
    pub rear_delay_ms: f64,
    /// Low-pass cutoff applied to SL/SR in Hz.
    pub surround_lowpass_hz: f64,
    /// High-shelf corner frequency for FC in Hz.
    pub center_shelf_hz: f64,
    /// High-shelf gain for FC in dB.
    pub center_shelf_gain_db: f64,
}

impl Default for UpmixParams {
    fn default() -> Self {
        Self {
            lfe_crossover_hz: DEFAULT_LFE_CROSSOVER_HZ,
            front_delay_ms: DEFAULT_FRONT_DELAY_MS,
            rear_delay_ms: DEFAULT_REAR_DELAY_MS,
            surround_lowpass_hz: DEFAULT_SURROUND_LOWPASS_HZ,
            center_shelf_hz: DEFAULT_CENTER_SHELF_HZ,
            center_shelf_gain_db: DEFAULT_CENTER_SHELF_GAIN_DB,
        }
    }
}

impl UpmixParams {
    /// Check every parameter is finite and inside its accepted range.
    pub fn validate(&self) -> Result<()> {
        check_frequency("lfe_crossover_hz", self.lfe_crossover_hz)?;
        check_frequency("surround_lowpass_hz", self.surround_lowpass_hz)?;
        check_frequency("center_shelf_hz", self.center_shelf_hz)?;
        check_delay("front_delay_ms", self.front_delay_ms)?;
        check_delay("rear_delay_ms", self.rear_delay_ms)?;

        if !self.center_shelf_gain_db.is_finite()
            || self.center_shelf_gain_db.abs() > MAX_SHELF_GAIN_DB
        {
            return Err(invalid(format!(
                "center_shelf_gain_db must be between -{MAX_SHELF_GAIN_DB} and {MAX_SHELF_GAIN_DB}, got {}",
                self.center_shelf_gain_db
            )));
        }

        Ok(())
    }
}

fn check_frequency(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 || value > MAX_FREQUENCY_HZ {
        return Err(invalid(format!(
            "{name} must be greater than 0 and at most {MAX_FREQUENCY_HZ} Hz, got {value}"
        )));
    }
    Ok(())
}

fn check_delay(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=MAX_DELAY_MS).contains(&value) {
        return Err(invalid(format!(
            "{name} must be between 0 and {MAX_DELAY_MS} ms, got {value}"
        )));
    }
    Ok(())
}

fn invalid(message: String) -> Error {
    Error::ConfigValidation { message }
}

/// Build the `-filter_complex` expression for the given parameters.
pub fn build_filter_graph(params: &UpmixParams) -> String {
    let UpmixParams {
        lfe_crossover_hz,
        front_delay_ms,
        rear_delay_ms,
        surround_lowpass_hz,
        center_shelf_hz,
        center_shelf_gain_db,
    } = *params;

    [
        "[0:a]channelsplit=channel_layout=stereo[L][R]".to_string(),
        format!("[L][R]{MONO_SUM},highshelf=f={center_shelf_hz}:g={center_shelf_gain_db}[FC]"),
        format!("[L][R]{MONO_SUM},lowpass=f={lfe_crossover_hz}[LFE]"),
        format!("[L]adelay={front_delay_ms}[FLd]"),
        format!("[R]adelay={front_delay_ms}[FRd]"),
        format!("[L]adelay={rear_delay_ms},lowpass=f={surround_lowpass_hz}[SL]"),
        format!("[R]adelay={rear_delay_ms},lowpass=f={surround_lowpass_hz}[SR]"),
        format!("[FLd][FRd][FC][LFE][SL][SR]join=inputs=6:channel_layout=5.1{OUTPUT_LABEL}"),
    ]
    .join(";")
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_GRAPH: &str = "[0:a]channelsplit=channel_layout=stereo[L][R];\
[L][R]amerge=inputs=2,pan=mono|c0=0.5*FL+0.5*FR,highshelf=f=2000:g=-6[FC];\
[L][R]amerge=inputs=2,pan=mono|c0=0.5*FL+0.5*FR,lowpass=f=120[LFE];\
[L]adelay=1.5[FLd];\
[R]adelay=1.5[FRd];\
[L]adelay=20,lowpass=f=7000[SL];\
[R]adelay=20,lowpass=f=7000[SR];\
[FLd][FRd][FC][LFE][SL][SR]join=inputs=6:channel_layout=5.1[a]";

    #[test]
    fn test_default_graph_matches_reference() {
        assert_eq!(build_filter_graph(&UpmixParams::default()), DEFAULT_GRAPH);
    }

    #[test]
    fn test_graph_has_eight_chains_and_ends_on_output_label() {
        let graph = build_filter_graph(&UpmixParams::default());
        assert_eq!(graph.split(';').count(), 8);
        assert!(graph.ends_with(OUTPUT_LABEL));
        assert!(!graph.contains('\n'));
    }

    #[test]
    fn test_custom_params_are_substituted() {
        let params = UpmixParams {
            lfe_crossover_hz: 80.0,
            front_delay_ms: 0.0,
            rear_delay_ms: 12.5,
            surround_lowpass_hz: 9000.0,
            center_shelf_hz: 3000.0,
            center_shelf_gain_db: -3.5,
        };
        let graph = build_filter_graph(&params);
        assert!(graph.contains("lowpass=f=80[LFE]"));
        assert!(graph.contains("[L]adelay=0[FLd]"));
        assert!(graph.contains("[R]adelay=12.5,lowpass=f=9000[SR]"));
        assert!(graph.contains("highshelf=f=3000:g=-3.5[FC]"));
    }

    #[test]
    fn test_default_params_validate() {
        assert!(UpmixParams::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let base = UpmixParams::default();

        let cases = [
            UpmixParams { lfe_crossover_hz: 0.0, ..base },
            UpmixParams { surround_lowpass_hz: -100.0, ..base },
            UpmixParams { center_shelf_hz: f64::NAN, ..base },
            UpmixParams { front_delay_ms: -0.5, ..base },
            UpmixParams { rear_delay_ms: f64::INFINITY, ..base },
            UpmixParams { rear_delay_ms: MAX_DELAY_MS + 1.0, ..base },
            UpmixParams { center_shelf_gain_db: 40.0, ..base },
        ];

        for params in cases {
            assert!(params.validate().is_err(), "accepted {params:?}");
        }
    }

    #[test]
    fn test_zero_delay_is_allowed() {
        let params = UpmixParams {
            front_delay_ms: 0.0,
            ..UpmixParams::default()
        };
        assert!(params.validate().is_ok());
    }
}
