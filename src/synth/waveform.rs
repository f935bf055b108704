//! Difference-of-Gaussians waveform synthesis
//! Location: src/synth/waveform.rs

use crate::config::constants::synthesis;
use crate::error::{SynthResult, SynthesisError};
use crate::synth::timeline::SpikeTimeline;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Six-parameter description of a biphasic spike shape.
///
/// The pulse is the difference of two Gaussian lobes evaluated over a
/// window centered at zero: lobe one adds, lobe two subtracts. Centers may
/// carry either sign; widths must be non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveformTemplate {
    pub mu1: f64,
    pub mu2: f64,
    pub sigma1: f64,
    pub sigma2: f64,
    pub height1: f64,
    pub height2: f64,
}

impl WaveformTemplate {
    /// Bundle the six shape parameters.
    pub fn new(mu1: f64, mu2: f64, sigma1: f64, sigma2: f64, height1: f64, height2: f64) -> Self {
        Self {
            mu1,
            mu2,
            sigma1,
            sigma2,
            height1,
            height2,
        }
    }

    /// Draw the per-pair randomized template.
    ///
    /// The two centers always take opposite signs (one fair flip decides
    /// which is negative), magnitudes come from the configured inclusive
    /// ranges. Draw order is fixed: sign flip, mu1, mu2, sigma1, sigma2,
    /// height1, height2.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let (sign1, sign2) = if rng.gen_bool(0.5) {
            (-1.0, 1.0)
        } else {
            (1.0, -1.0)
        };

        let mu1 = sign1 * rng.gen_range(synthesis::CENTER_MAG_MIN..=synthesis::CENTER_MAG_MAX) as f64;
        let mu2 = sign2 * rng.gen_range(synthesis::CENTER_MAG_MIN..=synthesis::CENTER_MAG_MAX) as f64;
        let sigma1 = rng.gen_range(synthesis::WIDTH_MIN..=synthesis::WIDTH_MAX) as f64;
        let sigma2 = rng.gen_range(synthesis::WIDTH_MIN..=synthesis::WIDTH_MAX) as f64;
        let height1 = rng.gen_range(synthesis::AMPLITUDE_MIN..=synthesis::AMPLITUDE_MAX) as f64;
        let height2 = rng.gen_range(synthesis::AMPLITUDE_MIN..=synthesis::AMPLITUDE_MAX) as f64;

        Self {
            mu1,
            mu2,
            sigma1,
            sigma2,
            height1,
            height2,
        }
    }

    /// Noise intensity for this template at a given noise level: half the
    /// combined lobe amplitude, scaled.
    pub fn noise_epsilon(&self, noise_level: f64) -> f64 {
        noise_level * (self.height1 + self.height2) / 2.0
    }

    /// Reject degenerate shapes before any kernel is built.
    pub fn validate(&self) -> SynthResult<()> {
        let fields = [
            ("mu1", self.mu1),
            ("mu2", self.mu2),
            ("sigma1", self.sigma1),
            ("sigma2", self.sigma2),
            ("height1", self.height1),
            ("height2", self.height2),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(SynthesisError::invalid_parameter(name, "must be finite"));
            }
        }
        if self.sigma1 == 0.0 {
            return Err(SynthesisError::invalid_parameter(
                "sigma1",
                "zero width degenerates the Gaussian lobe",
            ));
        }
        if self.sigma2 == 0.0 {
            return Err(SynthesisError::invalid_parameter(
                "sigma2",
                "zero width degenerates the Gaussian lobe",
            ));
        }
        Ok(())
    }
}

/// Stamps a precomputed pulse kernel onto a timeline's onsets.
///
/// The kernel is evaluated once at construction over
/// `x in [-spike_len/2, spike_len/2)` and copied verbatim into the output
/// at every stampable onset. Stamps overwrite: where two windows overlap,
/// the later stamp replaces the earlier samples rather than summing with
/// them.
#[derive(Debug, Clone)]
pub struct WaveformSynthesizer {
    template: WaveformTemplate,
    spike_len: u64,
    kernel: Vec<f64>,
}

impl WaveformSynthesizer {
    /// Validate the template and precompute the pulse kernel.
    pub fn new(template: WaveformTemplate, spike_len: u64) -> SynthResult<Self> {
        template.validate()?;

        let half = spike_len as f64 / 2.0;
        let kernel = (0..spike_len)
            .map(|i| {
                let x = i as f64 - half;
                template.height1 * gaussian(x, template.mu1, template.sigma1)
                    - template.height2 * gaussian(x, template.mu2, template.sigma2)
            })
            .collect();

        Ok(Self {
            template,
            spike_len,
            kernel,
        })
    }

    /// The precomputed difference-of-Gaussians pulse, `spike_len` samples.
    pub fn kernel(&self) -> &[f64] {
        &self.kernel
    }

    /// Shape parameters this synthesizer was built from.
    pub fn template(&self) -> &WaveformTemplate {
        &self.template
    }

    /// Support width of the stamped pulse, in samples.
    pub fn spike_len(&self) -> u64 {
        self.spike_len
    }

    /// Produce a full-length signal with the kernel stamped at every
    /// stampable onset of `timeline`.
    ///
    /// The output has exactly `timeline.horizon()` samples and is zero
    /// wherever no window was stamped. Timelines produced by
    /// [`SpikeTimeline::sample`] and shifted by composer delays always fit;
    /// a hand-built timeline whose stamp window would cross the horizon is
    /// rejected.
    pub fn synthesize(&self, timeline: &SpikeTimeline) -> SynthResult<Vec<f64>> {
        let len = timeline.horizon() as usize;
        let mut signal = vec![0.0; len];

        for &onset in timeline.stamp_onsets() {
            let end = onset.saturating_add(self.spike_len);
            if end > timeline.horizon() {
                return Err(SynthesisError::invalid_parameter(
                    "timeline",
                    format!(
                        "stamp window [{}, {}) crosses the horizon {}",
                        onset,
                        end,
                        timeline.horizon()
                    ),
                ));
            }
            signal[onset as usize..end as usize].copy_from_slice(&self.kernel);
        }

        Ok(signal)
    }
}

fn gaussian(x: f64, mu: f64, sigma: f64) -> f64 {
    let z = (x - mu) / sigma;
    (-0.5 * z * z).exp()
}
