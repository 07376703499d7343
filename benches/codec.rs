use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use stream_links::crypto::codec;
use stream_links::ids::{decode_triple, encode_triple};
use stream_links::SecretKey;

fn test_key() -> SecretKey {
    SecretKey::from_hex("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f").unwrap()
}

fn codec_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let key = test_key();

    // Payload sizes from a single id up to an oversized blob
    let sizes = vec![4, 12, 64, 256];

    for size in sizes {
        group.throughput(Throughput::Bytes(size as u64));

        let payload = vec![0x5a; size];
        let token = codec::encode(&payload, &key);

        group.bench_with_input(BenchmarkId::new("encode", size), &payload, |b, payload| {
            b.iter(|| codec::encode(black_box(payload), &key))
        });

        group.bench_with_input(BenchmarkId::new("decode", size), &token, |b, token| {
            b.iter(|| codec::decode(black_box(token), &key).unwrap())
        });
    }

    group.finish();
}

fn triple_benchmark(c: &mut Criterion) {
    let key = test_key();
    let token = encode_triple(7, 3, 42, &key);

    c.bench_function("encode_triple", |b| {
        b.iter(|| encode_triple(black_box(7), black_box(3), black_box(42), &key))
    });

    c.bench_function("decode_triple", |b| {
        b.iter(|| decode_triple(black_box(&token), &key).unwrap())
    });

    // One changed character
    let mut forged = token.clone().into_bytes();
    forged[0] = if forged[0] == b'A' { b'B' } else { b'A' };
    let forged = String::from_utf8(forged).unwrap();

    c.bench_function("decode_triple_forged", |b| {
        b.iter(|| decode_triple(black_box(&forged), &key).is_err())
    });
}

criterion_group!(benches, codec_benchmark, triple_benchmark);
criterion_main!(benches);
