use criterion::{black_box, criterion_group, criterion_main, Criterion};
use iptcolor::{random_color, Ipt, PackedIpt};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    group.bench_function("from-24bit", |b| {
        b.iter(|| Ipt::from_24bit(black_box(0x33), black_box(0x66), black_box(0x99)))
    });

    let packed = PackedIpt::from(Ipt::from_24bit(0x33, 0x66, 0x99));
    group.bench_function("unpack-to-24bit", |b| {
        b.iter(|| Ipt::from(black_box(packed)).to_24bit())
    });

    group.bench_function("pack", |b| {
        let color = Ipt::from_24bit(0xc0, 0x40, 0x80);
        b.iter(|| PackedIpt::from(black_box(color)))
    });

    group.finish();

    let mut group = c.benchmark_group("gamut");

    let inside = Ipt::from_24bit(0x80, 0x40, 0xc0);
    group.bench_function("in-gamut", |b| b.iter(|| black_box(inside).in_gamut()));

    // Saturated chroma at mid intensity requires the full scan.
    let outside = Ipt::new(0.5, 1.0, 1.0, 1.0);
    group.bench_function("limit-worst-case", |b| {
        b.iter(|| black_box(outside).limit_to_gamut())
    });

    group.bench_function("random-color", |b| {
        let mut rng = StdRng::seed_from_u64(665);
        b.iter(|| random_color(&mut rng))
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
