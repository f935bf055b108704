//! Recording Generation Demo
//!
//! This example generates a complete synthetic multi-electrode recording
//! with known ground truth and prints summary statistics per electrode.

use rand::rngs::StdRng;
use rand::SeedableRng;
use spikesim_core::synth::{
    RecordingComposer, RecordingProfile, SpikeTimeline, WaveformSynthesizer, WaveformTemplate,
};
use spikesim_core::utils::SignalStats;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("SpikeSim Recording Demo");
    println!("=======================");

    println!("Single-unit synthesis:");
    let mut unit_rng = StdRng::seed_from_u64(7);
    let timeline = SpikeTimeline::sample(10_000, 500.0, 100, &mut unit_rng)?;
    let template = WaveformTemplate::new(-45.0, 45.0, 1.0, 1.0, 100.0, 500.0);
    let trace = WaveformSynthesizer::new(template, 100)?.synthesize(&timeline)?;
    let unit_stats = SignalStats::from_slice(&trace);
    println!(
        "  {} spikes over {} samples, peak amplitude {:.1}",
        timeline.num_spikes(),
        trace.len(),
        unit_stats.peak()
    );
    println!();

    let profile = RecordingProfile::baseline();
    let config = profile.to_recording_config();

    println!("Profile: {} ({})", profile.name, profile.description);
    println!("Configuration:");
    println!("  Electrodes: {}", config.num_electrodes);
    println!("  Cells: {}", config.num_cells);
    println!("  Horizon: {} samples", config.total_time);
    println!("  Noise level: {}", config.noise_level);
    println!("  Mean spike gap: {} samples", config.overlap_level);
    println!();

    let composer = RecordingComposer::new(config)?;
    let mut rng = StdRng::seed_from_u64(42);
    let recording = composer.generate(&mut rng)?;

    println!("Generated:");
    println!("  Composite shape: {:?}", recording.composite.dim());
    println!("  Per-pair tensor shape: {:?}", recording.per_pair.dim());
    println!(
        "  Visible cells per electrode: {:?}",
        recording.cells_per_electrode()
    );
    println!();

    println!("Ground truth:");
    for (cell, timeline) in recording.timelines.iter().enumerate() {
        let preview = timeline.onsets().len().min(4);
        println!(
            "  Cell {}: {} spikes, first onsets {:?}",
            cell,
            timeline.num_spikes(),
            &timeline.onsets()[..preview]
        );
    }
    println!();

    println!("Per-electrode composite statistics:");
    for (electrode, row) in recording.composite.outer_iter().enumerate() {
        let values = row.to_vec();
        let stats = SignalStats::from_slice(&values);
        println!(
            "  Electrode {}: mean={:.3}, std={:.3}, peak={:.1}",
            electrode,
            stats.mean,
            stats.std_dev,
            stats.peak()
        );
    }

    println!();
    println!("Demo completed successfully!");
    Ok(())
}
