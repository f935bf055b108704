use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;
use spikesim_core::synth::{
    noise, RecordingComposer, RecordingConfig, SpikeTimeline, WaveformSynthesizer,
    WaveformTemplate,
};

const HORIZONS: &[u64] = &[10_000, 50_000, 200_000];
const GRID_SIZES: &[(usize, usize)] = &[(4, 3), (5, 5), (16, 12)];

fn benchmark_timeline_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("timeline");

    for &total_time in HORIZONS {
        group.throughput(Throughput::Elements(total_time));

        group.bench_with_input(
            BenchmarkId::new("sample", format!("{}samples", total_time)),
            &total_time,
            |b, &total_time| {
                let mut rng = StdRng::seed_from_u64(42);

                b.iter(|| {
                    SpikeTimeline::sample(black_box(total_time), 1_000.0, 100, &mut rng).unwrap()
                });
            },
        );
    }

    group.finish();
}

fn benchmark_waveform_stamping(c: &mut Criterion) {
    let mut group = c.benchmark_group("waveform");

    for &total_time in HORIZONS {
        group.throughput(Throughput::Elements(total_time));

        group.bench_with_input(
            BenchmarkId::new("synthesize", format!("{}samples", total_time)),
            &total_time,
            |b, &total_time| {
                let mut rng = StdRng::seed_from_u64(42);
                let timeline = SpikeTimeline::sample(total_time, 1_000.0, 100, &mut rng).unwrap();
                let template = WaveformTemplate::sample(&mut rng);
                let synthesizer = WaveformSynthesizer::new(template, 100).unwrap();

                b.iter(|| synthesizer.synthesize(black_box(&timeline)).unwrap());
            },
        );
    }

    group.finish();
}

fn benchmark_noise_injection(c: &mut Criterion) {
    let mut group = c.benchmark_group("noise");

    for &total_time in HORIZONS {
        group.throughput(Throughput::Elements(total_time));

        group.bench_with_input(
            BenchmarkId::new("inject", format!("{}samples", total_time)),
            &total_time,
            |b, &total_time| {
                let signal = vec![0.0; total_time as usize];
                let mut rng = StdRng::seed_from_u64(42);

                b.iter(|| noise::inject(black_box(&signal), 3.0, &mut rng).unwrap());
            },
        );
    }

    group.finish();
}

fn benchmark_recording_composition(c: &mut Criterion) {
    let mut group = c.benchmark_group("composer");
    group.sample_size(10);

    for &(electrodes, cells) in GRID_SIZES {
        let config = RecordingConfig {
            num_electrodes: electrodes,
            num_cells: cells,
            total_time: 10_000,
            noise_level: 0.01,
            overlap_level: 1_000.0,
            spike_len: 100,
        };

        group.throughput(Throughput::Elements((electrodes * cells * 10_000) as u64));

        group.bench_with_input(
            BenchmarkId::new("generate", format!("{}x{}", electrodes, cells)),
            &config,
            |b, config| {
                let composer = RecordingComposer::new(config.clone()).unwrap();
                let mut rng = StdRng::seed_from_u64(42);

                b.iter(|| composer.generate(black_box(&mut rng)).unwrap());
            },
        );

        #[cfg(feature = "parallel")]
        group.bench_with_input(
            BenchmarkId::new("generate_seeded", format!("{}x{}", electrodes, cells)),
            &config,
            |b, config| {
                let composer = RecordingComposer::new(config.clone()).unwrap();

                b.iter(|| composer.generate_seeded(black_box(42)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_timeline_sampling,
    benchmark_waveform_stamping,
    benchmark_noise_injection,
    benchmark_recording_composition
);
criterion_main!(benches);
