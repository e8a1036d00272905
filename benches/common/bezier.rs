use criterion::{black_box, Criterion};
use nbezier_sketch::Sampling;
use crate::common::samples::POLYGONS;

pub fn eval(c: &mut Criterion) {
    c.bench_function("eval", |b| {
        for polygon in POLYGONS.iter() {
            b.iter(|| black_box(polygon.evaluate(black_box(0.5))))
        }
    });
}

pub fn castlejau(c: &mut Criterion) {
    c.bench_function("castlejau", |b| {
        for polygon in POLYGONS.iter() {
            b.iter(|| black_box(polygon.castlejau_eval(black_box(0.5))))
        }
    });
}

pub fn sample(c: &mut Criterion) {
    let sampling = Sampling::default();
    c.bench_function("sample", |b| {
        for polygon in POLYGONS.iter() {
            b.iter(|| black_box(polygon.sample(&sampling)))
        }
    });
}

pub fn all(c: &mut Criterion) {
    eval(c);
    castlejau(c);
    sample(c);
}
