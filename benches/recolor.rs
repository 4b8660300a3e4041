//! Benchmarks for the per-frame recolor pass.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::{Vec3, Vec4};
use particle_tint::{ColorMode, ColorUpdater, Gradient, Palette, ParticleSim, ParticleSnapshot};

/// Minimal in-memory simulation holding a fixed set of alive particles.
struct BenchSim {
    particles: Vec<ParticleSnapshot>,
}

impl BenchSim {
    fn new(count: usize) -> Self {
        let particles = (0..count)
            .map(|i| {
                let phase = i as f32 / count as f32;
                let mut p = ParticleSnapshot::new(
                    2.0 + phase,
                    Vec3::new(phase - 0.5, 1.0 - phase, phase * 0.25),
                );
                p.remaining_lifetime = (2.0 + phase) * phase;
                p
            })
            .collect();
        Self { particles }
    }
}

impl ParticleSim for BenchSim {
    fn max_particles(&self) -> usize {
        self.particles.len()
    }

    fn read_alive(&mut self, buffer: &mut [ParticleSnapshot]) -> usize {
        let n = self.particles.len().min(buffer.len());
        buffer[..n].copy_from_slice(&self.particles[..n]);
        n
    }

    fn write_particles(&mut self, particles: &[ParticleSnapshot]) {
        let n = particles.len().min(self.particles.len());
        self.particles[..n].copy_from_slice(&particles[..n]);
    }

    fn play(&mut self) {}
    fn stop(&mut self) {}
}

fn bench_update_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_10k");
    let modes = [
        ("lifetime", ColorMode::Lifetime),
        ("inverse_lifetime", ColorMode::InverseLifetime),
        ("total_velocity", ColorMode::TotalVelocity { min: -1.0, max: 1.0 }),
    ];

    for (name, mode) in modes {
        group.bench_function(name, |b| {
            let mut sim = BenchSim::new(10_000);
            let mut updater = ColorUpdater::new(Gradient::from(Palette::Rainbow)).with_mode(mode);
            b.iter(|| black_box(updater.update(&mut sim)))
        });
    }
    group.finish();
}

fn bench_gradient_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("gradient_eval");

    let two_key = Gradient::two_color(
        Vec4::new(1.0, 0.0, 0.0, 1.0),
        Vec4::new(0.0, 0.0, 1.0, 1.0),
    );
    group.bench_function("two_key", |b| {
        b.iter(|| black_box(two_key.eval(black_box(0.37))))
    });

    let five_key = Gradient::from(Palette::Viridis);
    group.bench_function("five_key", |b| {
        b.iter(|| black_box(five_key.eval(black_box(0.37))))
    });

    group.finish();
}

fn bench_update_by_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_by_count");
    for count in [100usize, 1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut sim = BenchSim::new(count);
            let mut updater =
                ColorUpdater::new(Gradient::from(Palette::Fire)).with_mode(ColorMode::Lifetime);
            b.iter(|| black_box(updater.update(&mut sim)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_update_modes,
    bench_gradient_eval,
    bench_update_by_count
);
criterion_main!(benches);
