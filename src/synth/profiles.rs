//! Predefined recording profiles for common validation scenarios
//! Location: src/synth/profiles.rs

use super::config::RecordingConfig;
use crate::config::constants::synthesis;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordingProfile {
    pub name: String,
    pub description: String,
    pub array_geometry: ArrayGeometry,
    pub firing_density: FiringDensity,
    pub noise_floor: NoiseFloor,
    pub duration_samples: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub enum ArrayGeometry {
    Tetrode,      // 4 electrodes, few units
    SiliconProbe, // 5 electrodes, one unit per site on average
    DenseGrid,    // 16 electrodes, heavily multiplexed units
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub enum FiringDensity {
    Sparse,   // long quiet gaps, little overlap
    Moderate, // occasional overlapping spikes
    Bursty,   // short gaps, frequent collisions
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub enum NoiseFloor {
    Clean,   // noiseless ground truth
    Typical, // bench-quality recording chain
    Harsh,   // poorly shielded rig
}

impl RecordingProfile {
    /// Five-site probe over five moderately active cells, the default
    /// geometry for sorter validation runs.
    pub fn baseline() -> Self {
        Self {
            name: "baseline".to_string(),
            description: "Five-electrode probe over five moderately active cells".to_string(),
            array_geometry: ArrayGeometry::SiliconProbe,
            firing_density: FiringDensity::Moderate,
            noise_floor: NoiseFloor::Typical,
            duration_samples: 10_000,
        }
    }

    /// Small tetrode with sparse, well-separated firing
    pub fn sparse_tetrode() -> Self {
        Self {
            name: "sparse_tetrode".to_string(),
            description: "Tetrode bundle with long quiet gaps between spikes".to_string(),
            array_geometry: ArrayGeometry::Tetrode,
            firing_density: FiringDensity::Sparse,
            noise_floor: NoiseFloor::Typical,
            duration_samples: 20_000,
        }
    }

    /// Challenging conditions for sorter stress testing
    pub fn stress_test() -> Self {
        Self {
            name: "stress_test".to_string(),
            description: "Dense grid with bursty collisions and a harsh noise floor".to_string(),
            array_geometry: ArrayGeometry::DenseGrid,
            firing_density: FiringDensity::Bursty,
            noise_floor: NoiseFloor::Harsh,
            duration_samples: 10_000,
        }
    }

    /// Noiseless variant of the baseline geometry, for exact ground-truth
    /// comparisons
    pub fn clean_validation() -> Self {
        Self {
            name: "clean_validation".to_string(),
            description: "Baseline geometry with the noise floor removed".to_string(),
            array_geometry: ArrayGeometry::SiliconProbe,
            firing_density: FiringDensity::Moderate,
            noise_floor: NoiseFloor::Clean,
            duration_samples: 10_000,
        }
    }

    pub fn to_recording_config(&self) -> RecordingConfig {
        let (num_electrodes, num_cells) = match self.array_geometry {
            ArrayGeometry::Tetrode => (4, 3),
            ArrayGeometry::SiliconProbe => (5, 5),
            ArrayGeometry::DenseGrid => (16, 12),
        };

        let overlap_level = match self.firing_density {
            FiringDensity::Sparse => 2_000.0,
            FiringDensity::Moderate => 1_000.0,
            FiringDensity::Bursty => 150.0,
        };

        let noise_level = match self.noise_floor {
            NoiseFloor::Clean => 0.0,
            NoiseFloor::Typical => 0.01,
            NoiseFloor::Harsh => 0.2,
        };

        RecordingConfig {
            num_electrodes,
            num_cells,
            total_time: self.duration_samples,
            noise_level,
            overlap_level,
            spike_len: synthesis::DEFAULT_SPIKE_LEN,
        }
    }
}
