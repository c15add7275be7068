use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_minhash(c: &mut Criterion) {
    let features: Vec<u32> = (0..5000u32).collect();
    c.bench_function("minimum_hash_5000_features", |b| {
        b.iter(|| iscc::minhash::minimum_hash(black_box(&features)))
    });
}

fn bench_simhash(c: &mut Criterion) {
    let digests: Vec<Vec<u8>> = (0..200u8).map(|i| vec![i; 8]).collect();
    c.bench_function("similarity_hash_200_digests", |b| {
        b.iter(|| iscc::simhash::similarity_hash(black_box(&digests)))
    });
}

fn bench_content_id_text(c: &mut Criterion) {
    let text = "the quick brown fox jumps over the lazy dog ".repeat(200);
    c.bench_function("content_id_text_long", |b| {
        b.iter(|| iscc::content_id_text(black_box(&text), false).unwrap())
    });
}

criterion_group!(benches, bench_minhash, bench_simhash, bench_content_id_text);
criterion_main!(benches);
