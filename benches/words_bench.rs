use bitwords::{BitRing, WordRing};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn stream(len: usize) -> Vec<bool> {
    // xorshift64
    let mut x = 0x9E37_79B9_7F4A_7C15u64;
    (0..len)
        .map(|_| {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            x & 1 == 1
        })
        .collect()
}

fn bench_words(c: &mut Criterion) {
    let mut group = c.benchmark_group("words");
    let bits_in = stream(64_000);

    group.bench_function("slide_8bit", |b| {
        b.iter(|| {
            let mut bits = BitRing::new(8).unwrap();
            let mut ring = WordRing::new(8, 1024).unwrap();
            for &bit in &bits_in {
                bits.insert_bit(bit);
                let _ = black_box(ring.try_extract_and_store(&mut bits));
            }
        })
    });

    group.bench_function("overlap_16bit", |b| {
        b.iter(|| {
            let mut bits = BitRing::new(16).unwrap();
            let mut ring = WordRing::with_overlap(16, 1024, 12).unwrap();
            for chunk in bits_in.chunks(4) {
                for &bit in chunk {
                    bits.insert_bit(bit);
                }
                let _ = black_box(ring.try_extract_and_store(&mut bits));
            }
        })
    });

    let mut bits = BitRing::new(12).unwrap();
    let mut ring = WordRing::new(12, 4096).unwrap();
    for &bit in &bits_in {
        bits.insert_bit(bit);
        let _ = ring.try_extract_and_store(&mut bits);
    }
    group.bench_function("histogram_12bit", |b| {
        b.iter(|| black_box(ring.histogram().total()))
    });
}

criterion_group!(benches, bench_words);
criterion_main!(benches);
