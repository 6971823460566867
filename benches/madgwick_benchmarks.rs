use criterion::{Criterion, black_box, criterion_group, criterion_main};
use madgwick_ahrs::{DEG_TO_RAD, Madgwick};
use nalgebra::Vector3;
use rand::prelude::*;
use rand_pcg::Pcg64;
use std::f32::consts::PI;
use std::time::Duration;

const DELTA_TIME: Duration = Duration::from_millis(10); // 100 Hz

// Pre-generated sensor data to eliminate RNG overhead during benchmarks
struct PreGeneratedData {
    samples: Vec<(Vector3<f32>, Vector3<f32>)>,
    index: usize,
}

impl PreGeneratedData {
    fn new(count: usize, seed: u64) -> Self {
        let mut rng = Pcg64::seed_from_u64(seed);
        let mut samples = Vec::with_capacity(count);

        for i in 0..count {
            let time = i as f32 * 0.01; // 100Hz sample rate

            // Smooth motion pattern with a little noise on top
            let motion_phase = time * 0.5 * 2.0 * PI;

            let gyroscope = Vector3::new(
                0.2 * motion_phase.sin() + rng.random_range(-0.01..0.01),
                0.2 * (motion_phase * 1.3).cos() + rng.random_range(-0.01..0.01),
                0.2 * (motion_phase * 0.7).sin() + rng.random_range(-0.01..0.01),
            );

            let accelerometer = Vector3::new(
                -0.1 * motion_phase.sin() + rng.random_range(-0.002..0.002),
                0.1 * motion_phase.cos() + rng.random_range(-0.002..0.002),
                1.0 + rng.random_range(-0.002..0.002),
            );

            samples.push((gyroscope, accelerometer));
        }

        Self { samples, index: 0 }
    }

    fn next(&mut self) -> (Vector3<f32>, Vector3<f32>) {
        let sample = self.samples[self.index];
        self.index = (self.index + 1) % self.samples.len();
        sample
    }
}

/// Benchmark a single update with realistic sensor readings
fn bench_update(c: &mut Criterion) {
    let mut filter = Madgwick::new(5.0 * DEG_TO_RAD);
    let mut data = PreGeneratedData::new(1_024, 1);

    c.bench_function("madgwick_update", |b| {
        b.iter(|| {
            let (gyroscope, accelerometer) = data.next();
            filter.update(
                black_box(gyroscope),
                black_box(accelerometer),
                black_box(DELTA_TIME),
            )
        })
    });
}

/// Benchmark the pure-integration path taken when no accelerometer
/// direction is available
fn bench_update_gyro_only(c: &mut Criterion) {
    let mut filter = Madgwick::new(5.0 * DEG_TO_RAD);
    let mut data = PreGeneratedData::new(1_024, 2);

    c.bench_function("madgwick_update_gyro_only", |b| {
        b.iter(|| {
            let (gyroscope, _) = data.next();
            filter.update(
                black_box(gyroscope),
                black_box(Vector3::zeros()),
                black_box(DELTA_TIME),
            )
        })
    });
}

/// Benchmark batch processing of sensor updates
fn bench_batch_updates(c: &mut Criterion) {
    let mut filter = Madgwick::new(5.0 * DEG_TO_RAD);
    let mut data = PreGeneratedData::new(1_024, 3);

    c.bench_function("madgwick_batch_100_updates", |b| {
        b.iter(|| {
            for _ in 0..100 {
                let (gyroscope, accelerometer) = data.next();
                filter.update(
                    black_box(gyroscope),
                    black_box(accelerometer),
                    black_box(DELTA_TIME),
                )
            }
        })
    });
}

/// Benchmark filter construction (gain derivation included)
fn bench_creation(c: &mut Criterion) {
    c.bench_function("madgwick_new", |b| {
        b.iter(|| black_box(Madgwick::new(black_box(5.0 * DEG_TO_RAD))))
    });
}

/// Benchmark quaternion retrieval
fn bench_quaternion_access(c: &mut Criterion) {
    let filter = Madgwick::new(5.0 * DEG_TO_RAD);

    c.bench_function("madgwick_quaternion", |b| {
        b.iter(|| black_box(filter.quaternion()))
    });
}

/// Benchmark the gravity-direction accessor
fn bench_gravity(c: &mut Criterion) {
    let filter = Madgwick::new(5.0 * DEG_TO_RAD);

    c.bench_function("madgwick_gravity", |b| b.iter(|| black_box(filter.gravity())));
}

criterion_group!(
    benches,
    bench_update,
    bench_update_gyro_only,
    bench_batch_updates,
    bench_creation,
    bench_quaternion_access,
    bench_gravity
);

criterion_main!(benches);
