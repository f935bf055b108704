//! Multi-electrode recording composition
//! Location: src/synth/composer.rs

use crate::config::constants::synthesis;
use crate::error::{SynthResult, SynthesisError};
use crate::synth::config::RecordingConfig;
use crate::synth::noise;
use crate::synth::timeline::SpikeTimeline;
use crate::synth::waveform::{WaveformSynthesizer, WaveformTemplate};
use ndarray::{aview1, s, Array2, Array3, ArrayView1, Axis};
use rand::Rng;
use tracing::{debug, warn};

#[cfg(feature = "parallel")]
use rand::SeedableRng;
#[cfg(feature = "parallel")]
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One complete synthetic recording together with its ground truth.
///
/// Everything is created fresh per generation run and fully determined by
/// the configuration and the random stream; nothing here mutates afterwards.
#[derive(Debug, Clone)]
pub struct MultiElectrodeRecording {
    /// What each electrode records: per-pair contributions summed over the
    /// cell axis, shape `electrodes x total_time`.
    pub composite: Array2<f64>,
    /// Which electrode can observe which cell at all, shape
    /// `electrodes x cells`.
    pub detection_mask: Array2<bool>,
    /// Per-pair onset delay in samples, shape `electrodes x cells`.
    pub delays: Array2<u64>,
    /// Individual masked, noised contributions, shape
    /// `electrodes x cells x total_time`.
    pub per_pair: Array3<f64>,
    /// Base timeline of each cell, before per-electrode delay shifting.
    pub timelines: Vec<SpikeTimeline>,
}

impl MultiElectrodeRecording {
    /// How many cells each electrode can observe, per the detection mask.
    pub fn cells_per_electrode(&self) -> Vec<usize> {
        self.detection_mask
            .outer_iter()
            .map(|row| row.iter().filter(|&&visible| visible).count())
            .collect()
    }
}

/// Per-cell intermediate: each electrode's finished contribution plus the
/// ground truth that produced it.
struct CellSlab {
    signals: Array2<f64>,
    delays: Vec<u64>,
    timeline: SpikeTimeline,
}

/// Orchestrates per-(electrode, cell) synthesis into full recordings.
///
/// Construction validates the configuration once; the same composer can then
/// generate any number of recordings from caller-supplied random streams.
#[derive(Debug, Clone)]
pub struct RecordingComposer {
    config: RecordingConfig,
}

impl RecordingComposer {
    /// Validate `config` and build a composer.
    ///
    /// A noise level outside `[0, 1]` is clamped here with a warning; a bad
    /// noise level never aborts generation.
    pub fn new(config: RecordingConfig) -> SynthResult<Self> {
        config.validate()?;

        let mut config = config;
        let effective = config.effective_noise_level();
        if effective != config.noise_level {
            warn!(
                requested = config.noise_level,
                clamped = effective,
                "noise_level outside [0, 1], clamping"
            );
            config.noise_level = effective;
        }

        Ok(Self { config })
    }

    /// The validated configuration, noise level already clamped.
    pub fn config(&self) -> &RecordingConfig {
        &self.config
    }

    /// Generate a recording, drawing everything from `rng`.
    ///
    /// The draw order is fixed: the detection mask first (row major), then
    /// per cell its base timeline, then per electrode the delay, the
    /// template, and the noise samples. Identical configuration plus an
    /// identically seeded stream reproduces the output bit for bit.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> SynthResult<MultiElectrodeRecording> {
        let mask = self.draw_detection_mask(rng);
        self.generate_with_mask(mask, rng)
    }

    /// Generate with a caller-supplied detection mask in place of the coin
    /// flips, pinning detectability for controlled validation scenarios.
    /// The remaining draw order matches [`generate`](Self::generate).
    pub fn generate_with_mask<R: Rng + ?Sized>(
        &self,
        mask: Array2<bool>,
        rng: &mut R,
    ) -> SynthResult<MultiElectrodeRecording> {
        let expected = (self.config.num_electrodes, self.config.num_cells);
        if mask.dim() != expected {
            return Err(SynthesisError::invalid_parameter(
                "detection_mask",
                format!(
                    "shape {:?} does not match the configured {:?}",
                    mask.dim(),
                    expected
                ),
            ));
        }

        debug!(
            electrodes = self.config.num_electrodes,
            cells = self.config.num_cells,
            total_time = self.config.total_time,
            "composing recording"
        );

        let mut slabs = Vec::with_capacity(self.config.num_cells);
        for cell in 0..self.config.num_cells {
            slabs.push(self.compose_cell(mask.column(cell), rng)?);
        }

        Ok(self.assemble(mask, slabs))
    }

    /// Generate from a master seed, composing cells in parallel.
    ///
    /// The mask and one sub-seed per cell are drawn from a ChaCha stream
    /// seeded with `seed`; every cell then runs on its own independently
    /// seeded stream and the results are assembled in cell order. Output is
    /// bit-reproducible for a given seed, though the draw sequence differs
    /// from [`generate`](Self::generate) on the same seed.
    #[cfg(feature = "parallel")]
    pub fn generate_seeded(&self, seed: u64) -> SynthResult<MultiElectrodeRecording> {
        let mut master = ChaCha8Rng::seed_from_u64(seed);
        let mask = self.draw_detection_mask(&mut master);
        let cell_seeds: Vec<u64> = (0..self.config.num_cells).map(|_| master.gen()).collect();

        debug!(
            electrodes = self.config.num_electrodes,
            cells = self.config.num_cells,
            total_time = self.config.total_time,
            "composing recording across worker streams"
        );

        let slabs = cell_seeds
            .into_par_iter()
            .enumerate()
            .map(|(cell, cell_seed)| {
                let mut rng = ChaCha8Rng::seed_from_u64(cell_seed);
                self.compose_cell(mask.column(cell), &mut rng)
            })
            .collect::<SynthResult<Vec<CellSlab>>>()?;

        Ok(self.assemble(mask, slabs))
    }

    /// Independent fair coin flip per (electrode, cell) entry, row major.
    fn draw_detection_mask<R: Rng + ?Sized>(&self, rng: &mut R) -> Array2<bool> {
        let mut mask = Array2::from_elem(
            (self.config.num_electrodes, self.config.num_cells),
            false,
        );
        for flag in mask.iter_mut() {
            *flag = rng.gen_bool(0.5);
        }
        mask
    }

    /// Synthesize one cell as seen by every electrode.
    ///
    /// Draw order per electrode: delay, template, then noise. The mask
    /// zeroes the waveform before noise injection, so an invisible pair
    /// still carries pure noise whenever the noise level is non-zero.
    fn compose_cell<R: Rng + ?Sized>(
        &self,
        mask_column: ArrayView1<'_, bool>,
        rng: &mut R,
    ) -> SynthResult<CellSlab> {
        let base = SpikeTimeline::sample(
            self.config.total_time,
            self.config.overlap_level,
            self.config.spike_len,
            rng,
        )?;

        let mut signals = Array2::zeros((
            self.config.num_electrodes,
            self.config.total_time as usize,
        ));
        let mut delays = Vec::with_capacity(self.config.num_electrodes);

        for electrode in 0..self.config.num_electrodes {
            let delay = rng.gen_range(synthesis::DELAY_MIN..synthesis::DELAY_MAX);
            delays.push(delay);

            let shifted = base.shifted(delay);
            let template = WaveformTemplate::sample(rng);
            let synthesizer = WaveformSynthesizer::new(template, self.config.spike_len)?;
            let mut signal = synthesizer.synthesize(&shifted)?;

            if !mask_column[electrode] {
                signal.fill(0.0);
            }

            let epsilon = template.noise_epsilon(self.config.noise_level);
            let noisy = noise::inject(&signal, epsilon, rng)?;

            signals.row_mut(electrode).assign(&aview1(&noisy));
        }

        Ok(CellSlab {
            signals,
            delays,
            timeline: base,
        })
    }

    /// Stitch per-cell slabs into the output tensors, in cell order.
    fn assemble(&self, mask: Array2<bool>, slabs: Vec<CellSlab>) -> MultiElectrodeRecording {
        let mut per_pair = Array3::zeros((
            self.config.num_electrodes,
            self.config.num_cells,
            self.config.total_time as usize,
        ));
        let mut delays = Array2::zeros((self.config.num_electrodes, self.config.num_cells));
        let mut timelines = Vec::with_capacity(slabs.len());

        for (cell, slab) in slabs.into_iter().enumerate() {
            per_pair.slice_mut(s![.., cell, ..]).assign(&slab.signals);
            for (electrode, &delay) in slab.delays.iter().enumerate() {
                delays[[electrode, cell]] = delay;
            }
            timelines.push(slab.timeline);
        }

        let composite = per_pair.sum_axis(Axis(1));

        MultiElectrodeRecording {
            composite,
            detection_mask: mask,
            delays,
            per_pair,
            timelines,
        }
    }
}
