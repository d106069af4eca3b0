use criterion::{criterion_group, criterion_main, Criterion};
use huffman::{decode, encode};

fn bench_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_text");
    let corpus = "the quick brown fox jumps over the lazy dog ".repeat(100);
    let input: Vec<char> = corpus.chars().collect();

    group.bench_function("encode", |b| b.iter(|| encode(&input)));

    let (bits, tree) = encode(&input);
    group.bench_function("decode", |b| b.iter(|| decode(&bits, &tree)));
}

fn bench_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_bytes");
    // geometric-ish distribution over a 16-symbol alphabet
    let input = (0..4096u32)
        .map(|i| (i.trailing_zeros() % 16) as u8)
        .collect::<Vec<_>>();

    group.bench_function("encode", |b| b.iter(|| encode(&input)));

    let (bits, tree) = encode(&input);
    group.bench_function("decode", |b| b.iter(|| decode(&bits, &tree)));
}

criterion_group!(benches, bench_text, bench_bytes);
criterion_main!(benches);
