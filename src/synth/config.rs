//! Recording generation configuration
//! Location: src/synth/config.rs

use crate::config::constants::{recording, synthesis};
use crate::error::{SynthResult, SynthesisError};
use crate::utils::validation::{validate_constraint, validate_positive};
use serde::{Deserialize, Serialize};

/// Parameters of one multi-electrode generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordingConfig {
    /// Number of sensors.
    #[serde(default = "defaults::num_electrodes")]
    pub num_electrodes: usize,

    /// Number of spike sources.
    #[serde(default = "defaults::num_cells")]
    pub num_cells: usize,

    /// Observation horizon in samples.
    #[serde(default = "defaults::total_time")]
    pub total_time: u64,

    /// Fraction of the per-pair template amplitude injected as noise,
    /// nominally in `[0, 1]`. Out-of-range values are clamped with a
    /// warning at composer construction, never rejected.
    #[serde(default = "defaults::noise_level")]
    pub noise_level: f64,

    /// Mean inter-spike gap of the renewal process, in samples. Small
    /// values crowd spikes toward overlap, large values spread them out.
    #[serde(default = "defaults::overlap_level")]
    pub overlap_level: f64,

    /// Support width of the stamped waveform, in samples. Shared by
    /// timeline sampling and waveform synthesis, and never smaller than
    /// the per-electrode delay bound.
    #[serde(default = "defaults::spike_len")]
    pub spike_len: u64,
}

mod defaults {
    use crate::config::constants::{recording, synthesis};

    pub fn num_electrodes() -> usize {
        recording::DEFAULT_NUM_ELECTRODES
    }

    pub fn num_cells() -> usize {
        recording::DEFAULT_NUM_CELLS
    }

    pub fn total_time() -> u64 {
        recording::DEFAULT_TOTAL_TIME
    }

    pub fn noise_level() -> f64 {
        recording::DEFAULT_NOISE_LEVEL
    }

    pub fn overlap_level() -> f64 {
        recording::DEFAULT_OVERLAP_LEVEL
    }

    pub fn spike_len() -> u64 {
        synthesis::DEFAULT_SPIKE_LEN
    }
}

impl Default for RecordingConfig {
    fn default() -> Self {
        Self {
            num_electrodes: defaults::num_electrodes(),
            num_cells: defaults::num_cells(),
            total_time: defaults::total_time(),
            noise_level: defaults::noise_level(),
            overlap_level: defaults::overlap_level(),
            spike_len: defaults::spike_len(),
        }
    }
}

impl RecordingConfig {
    /// Check the fatal parameter constraints.
    ///
    /// A failure here aborts generation before any output exists; the noise
    /// level is deliberately not part of this check (see
    /// [`effective_noise_level`](Self::effective_noise_level)).
    pub fn validate(&self) -> SynthResult<()> {
        if self.num_electrodes < recording::MIN_NUM_ELECTRODES {
            return Err(SynthesisError::invalid_parameter(
                "num_electrodes",
                "at least one electrode is required",
            ));
        }
        if self.num_cells < recording::MIN_NUM_CELLS {
            return Err(SynthesisError::invalid_parameter(
                "num_cells",
                "at least one cell is required",
            ));
        }
        validate_positive(self.overlap_level, "overlap_level")?;
        validate_constraint(
            self.total_time > self.spike_len,
            &["total_time", "spike_len"],
            format!(
                "observation horizon ({}) must exceed the spike window ({})",
                self.total_time, self.spike_len
            ),
        )?;
        // Delays are drawn below DELAY_MAX, so this keeps every shifted
        // stamp window inside the horizon.
        validate_constraint(
            self.spike_len >= synthesis::DELAY_MAX,
            &["spike_len"],
            format!(
                "spike window ({}) must be at least the per-electrode delay bound ({})",
                self.spike_len,
                synthesis::DELAY_MAX
            ),
        )?;
        Ok(())
    }

    /// Noise level clamped to `[MIN_NOISE_LEVEL, MAX_NOISE_LEVEL]`.
    ///
    /// Non-finite values collapse to the silent end of the range.
    pub fn effective_noise_level(&self) -> f64 {
        if !(self.noise_level >= synthesis::MIN_NOISE_LEVEL) {
            synthesis::MIN_NOISE_LEVEL
        } else if self.noise_level > synthesis::MAX_NOISE_LEVEL {
            synthesis::MAX_NOISE_LEVEL
        } else {
            self.noise_level
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RecordingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.spike_len, 100);
    }

    #[test]
    fn test_validate_rejects_bad_sizing() {
        let config = RecordingConfig {
            num_electrodes: 0,
            ..RecordingConfig::default()
        };
        assert!(config.validate().is_err());

        let config = RecordingConfig {
            num_cells: 0,
            ..RecordingConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_degenerate_timing() {
        let config = RecordingConfig {
            overlap_level: 0.0,
            ..RecordingConfig::default()
        };
        assert!(config.validate().is_err());

        let config = RecordingConfig {
            total_time: 100,
            spike_len: 100,
            ..RecordingConfig::default()
        };
        assert!(config.validate().is_err());

        let config = RecordingConfig {
            spike_len: 50,
            ..RecordingConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_noise_level_clamping() {
        let mut config = RecordingConfig::default();

        config.noise_level = 0.5;
        assert_eq!(config.effective_noise_level(), 0.5);

        config.noise_level = -1.0;
        assert_eq!(config.effective_noise_level(), 0.0);

        config.noise_level = 1.5;
        assert_eq!(config.effective_noise_level(), 1.0);

        config.noise_level = f64::NAN;
        assert_eq!(config.effective_noise_level(), 0.0);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = RecordingConfig {
            num_electrodes: 2,
            num_cells: 3,
            total_time: 5000,
            noise_level: 0.05,
            overlap_level: 250.0,
            spike_len: 80,
        };

        let text = toml::to_string(&config).unwrap();
        let parsed: RecordingConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let parsed: RecordingConfig = toml::from_str("num_cells = 3").unwrap();

        assert_eq!(parsed.num_cells, 3);
        assert_eq!(parsed.num_electrodes, 5);
        assert_eq!(parsed.total_time, 10_000);
        assert_eq!(parsed.spike_len, 100);
    }
}
