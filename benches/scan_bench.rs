//! Benchmarks for gzsplit.
//!
//! Run with:
//!     cargo bench

use std::io::Cursor;

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use gzsplit::{HashConfig, ScanConfig, Scanner, Splitter};

const MARKER: &[u8] = &[0x00, 0x00, 0x1f, 0x8b];

fn concatenated(members: usize, payload: usize) -> Vec<u8> {
    let filler: Vec<u8> = (0..payload).map(|i| (i * 7 + 13) as u8 | 1).collect();
    let mut data = Vec::with_capacity(members * (payload + MARKER.len()));
    for _ in 0..members {
        data.extend_from_slice(MARKER);
        data.extend_from_slice(&filler);
    }
    data
}

fn bench_scanner(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner");
    let data = concatenated(16, 64 * 1024);
    group.throughput(Throughput::Bytes(data.len() as u64));

    // Different read sizes
    for read_size in [1024, 8 * 1024, 64 * 1024] {
        group.bench_with_input(format!("read_{}k", read_size / 1024), &data, |b, data| {
            b.iter(|| {
                let config = ScanConfig::new(read_size).unwrap();
                let mut scanner = Scanner::new(Cursor::new(black_box(data)), config).unwrap();
                let mut count = 0;
                while scanner.advance() {
                    count += 1;
                }
                black_box(count)
            });
        });
    }

    group.finish();
}

fn bench_splitter(c: &mut Criterion) {
    let mut group = c.benchmark_group("splitter");

    // Many small members vs. few large ones
    for (members, payload) in [(4096, 256), (16, 64 * 1024)] {
        let data = concatenated(members, payload);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(format!("{}x{}", members, payload), &data, |b, data| {
            b.iter(|| {
                let members = Splitter::new(ScanConfig::default())
                    .split_bytes(black_box(data))
                    .unwrap();
                black_box(members.len())
            });
        });
    }

    // Hashing cost
    let data = concatenated(16, 64 * 1024);
    group.bench_function("hashed", |b| {
        let config = ScanConfig::default().with_hash_config(HashConfig::enabled());
        b.iter(|| {
            let members = Splitter::new(config).split_bytes(black_box(&data)).unwrap();
            black_box(members.len())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_scanner, bench_splitter);
criterion_main!(benches);
