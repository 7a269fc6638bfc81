use criterion::black_box;
use criterion::Criterion;
use criterion::{criterion_group, criterion_main};

use areal::prelude::*;

fn three_circles() -> CircleIntersection {
    CircleIntersection::new(vec![
        Circle::new(1.0, 1.0, 1.0).unwrap(),
        Circle::new(1.5, 2.0, 1.25_f64.sqrt()).unwrap(),
        Circle::new(2.0, 1.5, 1.25_f64.sqrt()).unwrap(),
    ])
    .unwrap()
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("region contains");

    let circle = Circle::new(1.0, 1.0, 1.0).unwrap();
    let region = three_circles();
    let pt = Point::new(1.5, 1.5);

    group.bench_function("circle", |b| {
        b.iter(|| circle.contains(black_box(&pt)))
    });
    group.bench_function("three circle intersection", |b| {
        b.iter(|| region.contains(black_box(&pt)))
    });
}

fn bench_estimate_area(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate_area");

    let region = three_circles();
    let rect = Rect::new(0.0, 0.0, 3.2, 3.2).unwrap();

    for n in [1_000_usize, 10_000] {
        group.bench_function(&format!("wide box, n = {}", n), |b| {
            let mut rng = rand::thread_rng();
            b.iter(|| estimate_area(&region, &rect, black_box(n), &mut rng))
        });
    }
}

criterion_group!(estimator_benches, bench_contains, bench_estimate_area);
criterion_main!(estimator_benches);
