use criterion::{Criterion, criterion_group, criterion_main};
use pulldown_cmark::Parser;
use supermark_engine::Markdown;
mod common;

fn bench_pulldown_cmark_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    group.bench_function("pulldown_cmark", |b| {
        b.iter(|| {
            let parser = Parser::new(std::hint::black_box(&content));
            let events: Vec<_> = parser.collect();
            std::hint::black_box(events);
        });
    });

    group.finish();
}

fn bench_supermark(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let md = Markdown::with_defaults();
    let content = common::generate_markdown_content(100);
    group.bench_function("supermark_convert", |b| {
        b.iter(|| std::hint::black_box(md.convert(std::hint::black_box(&content))));
    });

    let noise = common::generate_caret_noise(500);
    group.bench_function("supermark_caret_noise", |b| {
        b.iter(|| std::hint::black_box(md.convert(std::hint::black_box(&noise))));
    });

    let plain = Markdown::new();
    group.bench_function("supermark_without_extensions", |b| {
        b.iter(|| std::hint::black_box(plain.convert(std::hint::black_box(&content))));
    });

    group.finish();
}

criterion_group!(benches, bench_pulldown_cmark_baseline, bench_supermark);
criterion_main!(benches);
