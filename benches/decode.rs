//! Benchmarks for the full decode pipeline over a synthetic version-1 symbol.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qrprobe::decoder::bitstream::ZigzagReader;
use qrprobe::decoder::structure::StructureMap;
use qrprobe::decoder::unmask::unmask;
use qrprobe::{MaskPattern, ModuleMatrix};

/// Masked 21x21 symbol carrying a byte-mode payload.
fn synthetic_symbol(payload: &[u8], mask: MaskPattern) -> ModuleMatrix {
    let mut matrix = ModuleMatrix::new(21, 21);

    let raw = mask.id() ^ 0b10101u8; // EC bits 00 (level M)
    for col in 0..5 {
        matrix.set(col, 8, (raw >> (4 - col)) & 1 == 1);
    }

    let mut stream = vec![false, true, false, false];
    for i in (0..8).rev() {
        stream.push((payload.len() >> i) & 1 == 1);
    }
    for &b in payload {
        for i in (0..8).rev() {
            stream.push((b >> i) & 1 == 1);
        }
    }

    let structure = StructureMap::new(21);
    for (&bit, (x, y)) in stream.iter().zip(ZigzagReader::coordinates(&structure)) {
        matrix.set(x, y, bit);
    }
    unmask(&mut matrix, mask, &structure);
    matrix
}

fn bench_decode(c: &mut Criterion) {
    let symbol = synthetic_symbol(b"https://example.com", MaskPattern::Pattern4);

    c.bench_function("decode_v1_byte_mode", |b| {
        b.iter(|| qrprobe::decode(black_box(&symbol)).unwrap())
    });

    c.bench_function("structure_map_v1", |b| {
        b.iter(|| StructureMap::new(black_box(21)))
    });

    c.bench_function("zigzag_read_v1", |b| {
        let structure = StructureMap::new(21);
        b.iter(|| ZigzagReader::read(black_box(&symbol), &structure))
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
