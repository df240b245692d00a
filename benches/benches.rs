use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use cplx::Complex;
use num_complex::ComplexDistribution;
use rand_distr::{Distribution, StandardNormal};

fn sample(n: usize) -> Vec<Complex> {
    let dist = ComplexDistribution::new(StandardNormal, StandardNormal);
    let mut rng = rand::thread_rng();
    dist.sample_iter(&mut rng)
        .take(n)
        .map(|z: num_complex::Complex64| Complex::from(z))
        .collect()
}

pub fn arithmetic(c: &mut Criterion) {
    let data = sample(1024);

    c.bench_function("multiply", |b| {
        b.iter(|| data.iter().fold(Complex::ONE, |acc, &z| acc * z))
    });
    c.bench_function("divide", |b| {
        b.iter(|| data.windows(2).map(|w| w[0] / w[1]).fold(Complex::ZERO, |acc, z| acc + z))
    });
}

pub fn functions(c: &mut Criterion) {
    let data = sample(1024);
    let fns: [(&str, fn(Complex) -> Complex); 5] = [
        ("sqrt", cplx::sqrt),
        ("exp", cplx::exp),
        ("log", cplx::log),
        ("cos", cplx::cos),
        ("acos", cplx::acos),
    ];

    for (name, f) in fns {
        c.bench_with_input(BenchmarkId::new("function", name), &data, |b, data| {
            b.iter(|| data.iter().map(|&z| f(z)).fold(Complex::ZERO, |acc, z| acc + z));
        });
    }
}

pub fn text(c: &mut Criterion) {
    let data = sample(256);
    let texts: Vec<String> = data.iter().map(ToString::to_string).collect();

    c.bench_function("format", |b| {
        b.iter(|| data.iter().map(|z| z.to_string().len()).sum::<usize>())
    });
    c.bench_function("parse", |b| {
        b.iter(|| texts.iter().filter_map(|s| cplx::parse(s).ok()).count())
    });
}

criterion_group!(benches, arithmetic, functions, text);
criterion_main!(benches);
