use criterion::{black_box, criterion_group, criterion_main, Criterion};
use num_bigint::BigInt;
use primefield::PrimeField;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_field(c, "secp256k1", PrimeField::secp256k1());
    bench_field(c, "stark252", PrimeField::stark252());
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

pub fn bench_field(c: &mut Criterion, name: &str, field: PrimeField) {
    let rng = &mut ChaCha8Rng::seed_from_u64(0);

    let mut grp = c.benchmark_group(name);

    let x = field.random(rng);
    let y = field.random(rng);
    let e = BigInt::from(field.random(rng).into_value());

    grp.bench_function("add", |b| b.iter(|| black_box(x.add(&y))));
    grp.bench_function("mul", |b| b.iter(|| black_box(x.mul(&y))));
    grp.bench_function("square", |b| b.iter(|| black_box(x.square())));
    grp.bench_function("pow", |b| b.iter(|| black_box(x.pow(e.clone()))));
    grp.bench_function("inverse", |b| b.iter(|| black_box(x.inverse())));
    grp.bench_function("div", |b| b.iter(|| black_box(x.div(&y))));

    let square = x.square();
    grp.bench_function("sqrt", |b| b.iter(|| black_box(square.sqrt())));

    grp.finish();
}
