//! Benchmarks for jtag-client protocol encoding/decoding

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jtag_client::protocol::{decode_response, encode_command, encode_response};
use jtag_client::Transaction;

fn codec_benchmarks(c: &mut Criterion) {
    let read = Transaction::read(0x1000).unwrap();
    let write = Transaction::write(0x2000, 0xDEAD_BEEF).unwrap();

    c.bench_function("encode_read", |b| b.iter(|| encode_command(black_box(&read))));
    c.bench_function("encode_write", |b| b.iter(|| encode_command(black_box(&write))));

    let response = encode_response(0xCAFE_F00D);
    c.bench_function("decode_response", |b| {
        b.iter(|| decode_response(black_box(response.as_bytes())))
    });
}

criterion_group!(benches, codec_benchmarks);
criterion_main!(benches);
