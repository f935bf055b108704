// src/config/constants.rs
//! Authoritative numeric constants for the generation pipeline

/// Waveform synthesis and per-pair draw constants
pub mod synthesis {
    /// Support width of a stamped spike waveform, in samples.
    pub const DEFAULT_SPIKE_LEN: u64 = 100;

    /// Per-pair onset delay is drawn uniformly from `[DELAY_MIN, DELAY_MAX)`.
    pub const DELAY_MIN: u64 = 1;
    pub const DELAY_MAX: u64 = 100;

    /// Gaussian center magnitude range (inclusive), offset from the window midpoint.
    pub const CENTER_MAG_MIN: i64 = 10;
    pub const CENTER_MAG_MAX: i64 = 40;

    /// Gaussian width range (inclusive), in samples.
    pub const WIDTH_MIN: i64 = 1;
    pub const WIDTH_MAX: i64 = 20;

    /// Gaussian amplitude range (inclusive).
    pub const AMPLITUDE_MIN: i64 = 100;
    pub const AMPLITUDE_MAX: i64 = 500;

    /// Standard deviation of raw noise draws, before epsilon scaling.
    pub const NOISE_SIGMA: f64 = 2.0;

    pub const MIN_NOISE_LEVEL: f64 = 0.0;
    pub const MAX_NOISE_LEVEL: f64 = 1.0;
}

/// Recording geometry defaults (the stock validation scenario)
pub mod recording {
    pub const DEFAULT_NUM_ELECTRODES: usize = 5;
    pub const DEFAULT_NUM_CELLS: usize = 5;
    pub const DEFAULT_TOTAL_TIME: u64 = 10_000;
    pub const DEFAULT_NOISE_LEVEL: f64 = 0.01;
    pub const DEFAULT_OVERLAP_LEVEL: f64 = 1_000.0;

    pub const MIN_NUM_ELECTRODES: usize = 1;
    pub const MIN_NUM_CELLS: usize = 1;
}

/// File system paths
pub mod paths {
    pub const LOCAL_CONFIG_FILE: &str = "spikesim.toml";
    pub const DEFAULT_CONFIG_FILE: &str = "config/default.toml";
}
