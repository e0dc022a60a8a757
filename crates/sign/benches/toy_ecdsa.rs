//! Benchmarks for toy ECDSA and the brute-force key search

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::OsRng;
use toyecc_sign::{brute_force_private_key, ToyEcdsa};

fn bench_signatures(c: &mut Criterion) {
    let mut group = c.benchmark_group("toy_ecdsa");
    let scheme = ToyEcdsa::toy();
    let keypair = scheme
        .generate_keys(&mut OsRng)
        .expect("key generation should succeed");
    let message = b"Send 1 BTC to Alice";
    let signature = scheme
        .sign(message, keypair.secret_key(), &mut OsRng)
        .expect("signing should succeed");

    group.bench_function("keygen", |b| b.iter(|| scheme.generate_keys(&mut OsRng)));

    group.bench_function("sign", |b| {
        b.iter(|| scheme.sign(black_box(message), keypair.secret_key(), &mut OsRng))
    });

    group.bench_function("verify", |b| {
        b.iter(|| scheme.verify(black_box(message), &signature, keypair.public_key()))
    });

    group.bench_function("brute_force", |b| {
        b.iter(|| brute_force_private_key(scheme.params(), black_box(keypair.public_key())))
    });

    group.finish();
}

criterion_group!(benches, bench_signatures);
criterion_main!(benches);
