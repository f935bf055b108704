// src/utils/stats.rs
//! Summary statistics over generated signals

/// Basic descriptive statistics for a single signal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalStats {
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

impl SignalStats {
    /// Compute statistics over a sample slice. An empty slice yields all zeros.
    pub fn from_slice(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self {
                mean: 0.0,
                variance: 0.0,
                std_dev: 0.0,
                min: 0.0,
                max: 0.0,
                count: 0,
            };
        }

        let count = samples.len();
        let mean = samples.iter().sum::<f64>() / count as f64;
        let variance = samples.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / count as f64;

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &x in samples {
            if x < min {
                min = x;
            }
            if x > max {
                max = x;
            }
        }

        Self {
            mean,
            variance,
            std_dev: variance.sqrt(),
            min,
            max,
            count,
        }
    }

    /// Largest sample magnitude regardless of sign.
    pub fn peak(&self) -> f64 {
        self.max.abs().max(self.min.abs())
    }
}
