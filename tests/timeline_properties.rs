// tests/timeline_properties.rs
//! Randomized timeline invariants
//!
//! Sweeps the timeline sampler across its parameter space. Every sampled
//! timeline must terminate in its horizon marker, keep onsets strictly
//! increasing, and leave enough guard space for delayed stamp windows.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use spikesim_core::synth::SpikeTimeline;

proptest! {
    #[test]
    fn timeline_always_ends_at_horizon(
        total_time in 201u64..20_000,
        mean_interval in 1.0f64..3_000.0,
        spike_len in 100u64..200,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let timeline =
            SpikeTimeline::sample(total_time, mean_interval, spike_len, &mut rng).unwrap();
        let entries = timeline.to_vec();

        prop_assert_eq!(*entries.last().unwrap(), total_time);
        for &onset in timeline.onsets() {
            prop_assert!(onset < total_time - spike_len);
        }
        for pair in timeline.onsets().windows(2) {
            prop_assert!(pair[1] >= pair[0] + spike_len);
        }
    }

    #[test]
    fn shifted_stamp_windows_stay_inside_the_horizon(
        total_time in 301u64..20_000,
        mean_interval in 1.0f64..3_000.0,
        delay in 1u64..100,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let timeline = SpikeTimeline::sample(total_time, mean_interval, 100, &mut rng).unwrap();
        let shifted = timeline.shifted(delay);

        prop_assert_eq!(shifted.horizon(), total_time);
        for &onset in shifted.stamp_onsets() {
            prop_assert!(onset + 100 <= total_time);
        }
    }

    #[test]
    fn sampling_is_deterministic_per_seed(seed in any::<u64>()) {
        let mut a = StdRng::seed_from_u64(seed);
        let mut b = StdRng::seed_from_u64(seed);

        let first = SpikeTimeline::sample(5_000, 400.0, 100, &mut a).unwrap();
        let second = SpikeTimeline::sample(5_000, 400.0, 100, &mut b).unwrap();

        prop_assert_eq!(first, second);
    }
}
