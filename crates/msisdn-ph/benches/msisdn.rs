//! MSISDN Benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use msisdn_ph::{Notation, PhoneNumber};

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_punctuated", |b| {
        b.iter(|| PhoneNumber::parse(black_box("+63 (917) 123-4567")))
    });

    c.bench_function("validate_invalid", |b| {
        b.iter(|| msisdn_ph::validate(black_box("0917 123 45")))
    });
}

fn bench_format(c: &mut Criterion) {
    let number = PhoneNumber::parse("09171234567").unwrap();

    c.bench_function("format_local_grouped", |b| {
        b.iter(|| number.format(black_box(Notation::Local), black_box("-")))
    });

    c.bench_function("format_international_grouped", |b| {
        b.iter(|| number.format(black_box(Notation::International), black_box(" ")))
    });
}

fn bench_operator(c: &mut Criterion) {
    // warm the shared tables so only lookup is measured
    let _ = PhoneNumber::parse("09181234567").map(|n| n.operator());

    c.bench_function("operator_fresh_number", |b| {
        b.iter(|| {
            PhoneNumber::parse(black_box("09181234567"))
                .map(|n| n.operator())
        })
    });
}

criterion_group!(benches, bench_parse, bench_format, bench_operator);
criterion_main!(benches);
