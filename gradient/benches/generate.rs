use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gradient::gradient::{Corners, GradientParams, Interpolation};
use gradient::hexgrid::write_grid;

fn corners() -> Corners {
    Corners {
        top_left: 0xf800,
        top_right: 0x07e0,
        bottom_left: 0x001f,
        bottom_right: 0xffff,
    }
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for size in [64u16, 256, 1024] {
        let params = GradientParams::new(size, size, corners()).unwrap();
        group.bench_function(format!("bilinear_{size}x{size}"), |b| {
            b.iter(|| Interpolation::Bilinear.generate(black_box(&params)))
        });
    }
    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let params = GradientParams::new(512, 512, corners()).unwrap();
    let grid = Interpolation::Bilinear.generate(&params);
    let mut buf = Vec::with_capacity(512 * 512 * 7);
    c.bench_function("write_grid_512x512", |b| {
        b.iter(|| {
            buf.clear();
            write_grid(black_box(&grid), &mut buf).unwrap();
        })
    });
}

criterion_group!(benches, bench_generate, bench_serialize);
criterion_main!(benches);
