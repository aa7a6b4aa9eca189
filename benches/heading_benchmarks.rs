use criterion::{Criterion, black_box, criterion_group, criterion_main};
use compass_assistant::{
    AssistantSettings, CompassAssistant, CompassListener, MovingAverage, SensorReading,
    continuity, tilt_compensated_heading,
};
use nalgebra::Vector3;
use rand::prelude::*;
use rand_pcg::Pcg64;
use std::f32::consts::PI;

/// Listener that swallows events, to benchmark the pipeline rather than
/// a consumer
struct NullListener;

impl CompassListener for NullListener {
    fn on_heading(&mut self, _degrees: f32) {}
    fn on_smoothed_heading(&mut self, _degrees: f32) {}
}

// Pre-generated sensor data to eliminate RNG overhead during benchmarks
struct PreGeneratedData {
    samples: Vec<SensorReading>,
    index: usize,
}

impl PreGeneratedData {
    fn new(count: usize, seed: u64) -> Self {
        let mut rng = Pcg64::seed_from_u64(seed);
        let mut samples = Vec::with_capacity(count);

        for i in 0..count {
            let time = i as f32 * 0.02; // 50Hz delivery per kind
            let yaw = time * 0.25 * 2.0 * PI; // slow rotation

            let reading = if i % 2 == 0 {
                SensorReading::accelerometer(
                    Vector3::new(
                        rng.random_range(-0.02..0.02),
                        rng.random_range(-0.02..0.02),
                        1.0 + rng.random_range(-0.02..0.02),
                    ),
                    i as i64,
                )
            } else {
                SensorReading::magnetometer(
                    Vector3::new(
                        -yaw.sin() * 22.0 + rng.random_range(-0.5..0.5),
                        yaw.cos() * 22.0 + rng.random_range(-0.5..0.5),
                        -41.0 + rng.random_range(-0.5..0.5),
                    ),
                    i as i64,
                )
            };
            samples.push(reading);
        }

        Self { samples, index: 0 }
    }

    fn next(&mut self) -> SensorReading {
        let sample = self.samples[self.index];
        self.index = (self.index + 1) % self.samples.len();
        sample
    }
}

/// Benchmark the full per-sample pipeline: fusion, continuity correction,
/// smoothing and listener fan-out
fn bench_handle_reading(c: &mut Criterion) {
    let mut assistant = CompassAssistant::new().unwrap();
    assistant.add_listener(Box::new(NullListener));
    assistant.start();
    let mut data = PreGeneratedData::new(1024, 42);

    c.bench_function("assistant_handle_reading", |b| {
        b.iter(|| assistant.handle_reading(black_box(data.next())))
    });
}

/// Benchmark the tilt-compensated fusion in isolation
fn bench_fusion(c: &mut Criterion) {
    let accelerometer = Vector3::new(0.01, -0.02, 1.0);
    let magnetometer = Vector3::new(15.0, 16.0, -41.0);

    c.bench_function("tilt_compensated_heading", |b| {
        b.iter(|| tilt_compensated_heading(black_box(accelerometer), black_box(magnetometer)))
    });
}

/// Benchmark continuity correction in isolation
fn bench_normalize(c: &mut Criterion) {
    c.bench_function("continuity_normalize", |b| {
        b.iter(|| continuity::normalize(black_box(350.0), black_box(5.0)))
    });
}

/// Benchmark a push into the default-sized smoothing window
fn bench_moving_average(c: &mut Criterion) {
    let settings = AssistantSettings::default();
    let mut average = MovingAverage::new(settings.smoothing_window).unwrap();
    for value in 0..settings.smoothing_window {
        average.push(value as f32);
    }

    c.bench_function("moving_average_push", |b| {
        b.iter(|| average.push(black_box(42.0)))
    });
}

criterion_group!(
    benches,
    bench_handle_reading,
    bench_fusion,
    bench_normalize,
    bench_moving_average
);
criterion_main!(benches);
