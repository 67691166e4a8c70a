//! Diff and Layout Benchmarks
//!
//! Throughput of line annotation and word-wrap layout for documents of
//! growing size.
//!
//! Run with: `cargo bench --bench diff_layout`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use pdf_diff_server::config::LayoutConfig;
use pdf_diff_server::diff::annotate;
use pdf_diff_server::render::{layout, render_pdf, Helvetica};

/// Synthetic document text; `variant` perturbs every seventh line
fn document(lines: usize, variant: u32) -> String {
    (0..lines)
        .map(|i| {
            if i % 7 == 0 {
                format!("Section {} revision {} of the quarterly report text", i, variant)
            } else {
                format!("Paragraph {} explains the findings in considerable detail", i)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_annotate(c: &mut Criterion) {
    let mut group = c.benchmark_group("annotate");

    for lines in [100, 1_000, 5_000] {
        let old = document(lines, 1);
        let new = document(lines, 2);
        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &lines, |b, _| {
            b.iter(|| annotate(black_box(&old), black_box(&new)))
        });
    }

    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let config = LayoutConfig::default();
    let mut group = c.benchmark_group("layout");

    for lines in [100, 1_000, 5_000] {
        let annotated = annotate(&document(lines, 1), &document(lines, 2));
        group.throughput(Throughput::Elements(annotated.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &annotated, |b, annotated| {
            b.iter(|| layout(black_box(annotated), &config, &Helvetica))
        });
    }

    group.finish();
}

fn bench_render_pdf(c: &mut Criterion) {
    let config = LayoutConfig::default();
    let annotated = annotate(&document(1_000, 1), &document(1_000, 2));

    c.bench_function("render_pdf/1000", |b| {
        b.iter(|| render_pdf(black_box(&annotated), &config))
    });
}

criterion_group!(benches, bench_annotate, bench_layout, bench_render_pdf);
criterion_main!(benches);
