use criterion::{criterion_group, criterion_main, Criterion};

fn bench_skewed(c: &mut Criterion) {
    let mut group = c.benchmark_group("skewed");
    // 90% one symbol, the shape Huffman rewards most
    let input = (0..4096)
        .map(|i| if i % 10 == 0 { b'b' } else { b'a' })
        .collect::<Vec<_>>();

    group.bench_function("compress", |b| b.iter(|| zmh::compress(&input).unwrap()));

    let container = zmh::compress(&input).unwrap();
    group.bench_function("decompress", |b| {
        b.iter(|| zmh::decompress(&container).unwrap())
    });
}

fn bench_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");
    let input = b"the quick brown fox jumps over the lazy dog. "
        .iter()
        .copied()
        .cycle()
        .take(4096)
        .collect::<Vec<_>>();

    group.bench_function("compress", |b| b.iter(|| zmh::compress(&input).unwrap()));

    let container = zmh::compress(&input).unwrap();
    group.bench_function("decompress", |b| {
        b.iter(|| zmh::decompress(&container).unwrap())
    });
}

criterion_group!(benches, bench_skewed, bench_text);
criterion_main!(benches);
