use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chile_rut_core::{check_digit, check_digit_of_digits, format, is_valid, normalize, Style};

fn bench_check_digit(c: &mut Criterion) {
    c.bench_function("check_digit u64", |b| {
        b.iter(|| check_digit(black_box(13_552_901)))
    });
    c.bench_function("check_digit digits", |b| {
        b.iter(|| check_digit_of_digits(black_box("13552901")))
    });
}

fn bench_pipeline(c: &mut Criterion) {
    c.bench_function("normalize", |b| b.iter(|| normalize(black_box("13.552.901-k"))));
    c.bench_function("is_valid", |b| b.iter(|| is_valid(black_box("13.552.901-k"))));
    c.bench_function("format dotted", |b| {
        b.iter(|| format(black_box("13552901K"), Style::Dotted))
    });
}

criterion_group!(benches, bench_check_digit, bench_pipeline);
criterion_main!(benches);
