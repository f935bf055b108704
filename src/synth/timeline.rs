//! Spike timing generation via an exponential renewal process
//! Location: src/synth/timeline.rs

use crate::error::{SynthResult, SynthesisError};
use crate::utils::validation::{validate_constraint, validate_positive, validate_range};
use rand::Rng;
use rand_distr::{Distribution, Exp};

/// Spike onset times for one cell over a fixed observation horizon.
///
/// Genuine spike events live in `onsets`, strictly increasing and spaced by
/// at least the spike window width. The observation end is stored separately
/// as `horizon`: the renewal loop always overshoots the usable range on its
/// final draw, and that draw is replaced by the horizon marker instead of
/// being kept as a spike. Keeping the marker out of `onsets` means no
/// consumer has to strip it by index arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpikeTimeline {
    onsets: Vec<u64>,
    horizon: u64,
}

impl SpikeTimeline {
    /// Sample a fresh timeline from the renewal process.
    ///
    /// Starting from a cursor at zero, draws exponential inter-spike gaps
    /// with mean `mean_interval`, truncates each to an integer, and advances
    /// by `gap + spike_len` so consecutive spikes never overlap their own
    /// waveform tails. Sampling stops once the cursor passes
    /// `total_time - spike_len`; the overshooting entry becomes the horizon
    /// marker.
    pub fn sample<R: Rng + ?Sized>(
        total_time: u64,
        mean_interval: f64,
        spike_len: u64,
        rng: &mut R,
    ) -> SynthResult<Self> {
        validate_constraint(
            total_time > spike_len,
            &["total_time", "spike_len"],
            format!(
                "observation horizon ({}) must exceed the spike window ({})",
                total_time, spike_len
            ),
        )?;
        validate_positive(mean_interval, "mean_interval")?;

        let gap_dist = Exp::new(1.0 / mean_interval).map_err(|_| {
            SynthesisError::invalid_parameter("mean_interval", "must be strictly positive")
        })?;

        let mut onsets = Vec::new();
        let mut cursor: u64 = 0;
        while cursor < total_time - spike_len {
            let gap = gap_dist.sample(rng) as u64;
            cursor = cursor.saturating_add(gap).saturating_add(spike_len);
            onsets.push(cursor);
        }

        // The final draw always lands at or beyond the stop threshold; it is
        // the horizon marker's slot, not a spike.
        onsets.pop();

        Ok(Self {
            onsets,
            horizon: total_time,
        })
    }

    /// Build a timeline from known onsets, e.g. to replay a recorded ground
    /// truth. Onsets must be non-decreasing and inside `[0, horizon]`.
    pub fn new(onsets: Vec<u64>, horizon: u64) -> SynthResult<Self> {
        for (index, &onset) in onsets.iter().enumerate() {
            validate_range(onset, 0, horizon, "onsets")?;
            if index > 0 && onset < onsets[index - 1] {
                return Err(SynthesisError::invalid_parameter(
                    "onsets",
                    format!("entry {} ({}) precedes its predecessor", index, onset),
                ));
            }
        }

        Ok(Self { onsets, horizon })
    }

    /// Genuine spike onsets, marker excluded.
    pub fn onsets(&self) -> &[u64] {
        &self.onsets
    }

    /// Observation horizon: the terminal value of the flat sequence and the
    /// length of any signal synthesized from this timeline.
    pub fn horizon(&self) -> u64 {
        self.horizon
    }

    /// Number of genuine spikes.
    pub fn num_spikes(&self) -> usize {
        self.onsets.len()
    }

    /// Onsets that receive a waveform stamp.
    ///
    /// The trailing onset is reserved as guard space: a per-electrode delay
    /// may push every onset forward by up to the spike window width, and
    /// dropping the last one guarantees no stamp can cross the horizon.
    pub fn stamp_onsets(&self) -> &[u64] {
        let keep = self.onsets.len().saturating_sub(1);
        &self.onsets[..keep]
    }

    /// Copy of this timeline with every onset moved forward by `delay`.
    ///
    /// The horizon is unchanged, which re-asserts the marker invariant after
    /// the shift. Onsets are not re-validated; composer delays stay below the
    /// spike window width, so shifted onsets remain inside the horizon.
    pub fn shifted(&self, delay: u64) -> SpikeTimeline {
        SpikeTimeline {
            onsets: self
                .onsets
                .iter()
                .map(|&onset| onset.saturating_add(delay))
                .collect(),
            horizon: self.horizon,
        }
    }

    /// Flat form: every genuine onset followed by the horizon marker.
    pub fn to_vec(&self) -> Vec<u64> {
        let mut flat = Vec::with_capacity(self.onsets.len() + 1);
        flat.extend_from_slice(&self.onsets);
        flat.push(self.horizon);
        flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SEED: u64 = 42;

    #[test]
    fn test_last_entry_is_horizon() {
        let mut rng = StdRng::seed_from_u64(SEED);
        let timeline = SpikeTimeline::sample(1000, 200.0, 100, &mut rng).unwrap();

        let flat = timeline.to_vec();
        assert_eq!(flat.last(), Some(&1000));
    }

    #[test]
    fn test_onsets_stay_below_stop_threshold() {
        // Every kept onset was followed by at least one more draw, so it must
        // sit strictly below total_time - spike_len.
        let mut rng = StdRng::seed_from_u64(SEED);
        let timeline = SpikeTimeline::sample(1000, 200.0, 100, &mut rng).unwrap();

        assert!(timeline.onsets().iter().all(|&t| t < 900));
    }

    #[test]
    fn test_onsets_strictly_increasing_with_min_spacing() {
        let mut rng = StdRng::seed_from_u64(SEED);
        let timeline = SpikeTimeline::sample(20_000, 150.0, 100, &mut rng).unwrap();

        for pair in timeline.onsets().windows(2) {
            assert!(pair[1] > pair[0]);
            assert!(pair[1] - pair[0] >= 100);
        }
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        let mut rng = StdRng::seed_from_u64(SEED);

        assert!(SpikeTimeline::sample(100, 200.0, 100, &mut rng).is_err());
        assert!(SpikeTimeline::sample(50, 200.0, 100, &mut rng).is_err());
        assert!(SpikeTimeline::sample(1000, 0.0, 100, &mut rng).is_err());
        assert!(SpikeTimeline::sample(1000, -5.0, 100, &mut rng).is_err());
        assert!(SpikeTimeline::sample(1000, f64::NAN, 100, &mut rng).is_err());
    }

    #[test]
    fn test_tight_horizon_yields_marker_only() {
        // With total_time = spike_len + 1 the very first draw overshoots, so
        // the timeline is just the marker, independent of the stream.
        let mut rng = StdRng::seed_from_u64(SEED);
        let timeline = SpikeTimeline::sample(101, 50.0, 100, &mut rng).unwrap();

        assert!(timeline.onsets().is_empty());
        assert_eq!(timeline.to_vec(), vec![101]);
        assert!(timeline.stamp_onsets().is_empty());
    }

    #[test]
    fn test_shift_moves_onsets_and_keeps_horizon() {
        let base = SpikeTimeline::new(vec![120, 400, 733], 1000).unwrap();
        let shifted = base.shifted(30);

        assert_eq!(shifted.onsets(), &[150, 430, 763]);
        assert_eq!(shifted.horizon(), 1000);
    }

    #[test]
    fn test_stamp_onsets_reserves_trailing_guard() {
        let timeline = SpikeTimeline::new(vec![100, 250, 470], 1000).unwrap();
        assert_eq!(timeline.stamp_onsets(), &[100, 250]);

        let sparse = SpikeTimeline::new(vec![100], 1000).unwrap();
        assert!(sparse.stamp_onsets().is_empty());
    }

    #[test]
    fn test_manual_construction_validates() {
        assert!(SpikeTimeline::new(vec![5, 3], 100).is_err());
        assert!(SpikeTimeline::new(vec![5, 200], 100).is_err());
        assert!(SpikeTimeline::new(vec![5, 30], 100).is_ok());
    }

    #[test]
    fn test_fixed_seed_reproducibility() {
        let mut first = StdRng::seed_from_u64(SEED);
        let mut second = StdRng::seed_from_u64(SEED);

        let a = SpikeTimeline::sample(10_000, 500.0, 100, &mut first).unwrap();
        let b = SpikeTimeline::sample(10_000, 500.0, 100, &mut second).unwrap();

        assert_eq!(a, b);
    }
}
