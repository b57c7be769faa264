// PPU Benchmarks
// Measures the tick loop and the status-read path.

use criterion::{criterion_group, criterion_main, Criterion};
use famicore::Ppu;
use std::hint::black_box;

/// Ticks per full frame: 262 scanlines of 341 positions
const TICKS_PER_FRAME: u32 = 262 * 341;

fn bench_ppu(c: &mut Criterion) {
    let mut group = c.benchmark_group("ppu");

    group.bench_function("tick", |b| {
        let mut ppu = Ppu::new();
        b.iter(|| {
            black_box(&mut ppu).tick();
        });
    });

    group.bench_function("full_frame", |b| {
        let mut ppu = Ppu::new();
        b.iter(|| {
            for _ in 0..TICKS_PER_FRAME {
                ppu.tick();
            }
            black_box(ppu.frame());
        });
    });

    group.bench_function("read_status", |b| {
        let mut ppu = Ppu::new();
        b.iter(|| {
            black_box(ppu.read_status());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_ppu);
criterion_main!(benches);
