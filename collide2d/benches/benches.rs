use collide2d::{
    core::math::Vector2,
    overlap::{
        circle_circle_overlap, circle_rect_overlap_closest_point, circle_rect_overlap_sat,
        rect_rect_overlap,
    },
    shapes::{Circle, OrientedRect},
};
use criterion::{Bencher, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_circle_circle(b: &mut Bencher) {
    let c1 = Circle::new(Vector2::new(2.0, 3.0), 1.0);
    let c2 = Circle::new(Vector2::new(1.0, 1.0), 2.0);
    b.iter(|| circle_circle_overlap(black_box(c1), black_box(c2)));
}

fn bench_circle_rect(b: &mut Bencher, test: fn(Circle<f64>, OrientedRect<f64>) -> bool, angle: f64) {
    let circle = Circle::new(Vector2::new(2.5, 0.5), 1.0);
    let rect = OrientedRect::from_center_rotation(Vector2::new(0.0, 0.0), 2.0, 1.0, angle);
    b.iter(|| test(black_box(circle), black_box(rect)));
}

fn bench_rect_rect(b: &mut Bencher, angle: f64) {
    let r1 = OrientedRect::from_center_rotation(Vector2::new(0.0, 0.0), 2.0, 1.0, angle);
    let r2 = OrientedRect::from_center_rotation(Vector2::new(1.5, 0.5), 1.0, 1.0, -angle);
    b.iter(|| rect_rect_overlap(black_box(r1), black_box(r2)));
}

fn overlap_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlap");
    group.bench_function("circle_circle", bench_circle_circle);

    let angles = &[0.0, 0.5, 1.0];
    for &angle in angles {
        group.bench_with_input(
            BenchmarkId::new("circle_rect_closest_point", angle),
            &angle,
            |b, &angle| bench_circle_rect(b, circle_rect_overlap_closest_point, angle),
        );
        group.bench_with_input(
            BenchmarkId::new("circle_rect_sat", angle),
            &angle,
            |b, &angle| bench_circle_rect(b, circle_rect_overlap_sat, angle),
        );
        group.bench_with_input(BenchmarkId::new("rect_rect", angle), &angle, |b, &angle| {
            bench_rect_rect(b, angle)
        });
    }

    group.finish();
}

criterion_group!(overlap, overlap_group,);
criterion_main!(overlap);
