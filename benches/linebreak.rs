//! Segmentation throughput benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use textbreak::{linebreak_locations, Input, LineBreaker};

fn ascii_paragraph() -> String {
    "The quick brown fox jumps over the lazy dog, then naps.\n".repeat(64)
}

fn mixed_paragraph() -> String {
    "木漏れ日 sifts through the trees — ヵヶ 3.5%, \"quoted\" (parenthetical).\n".repeat(64)
}

fn bench_locations(c: &mut Criterion) {
    let ascii = ascii_paragraph();
    let mixed = mixed_paragraph();

    c.bench_function("locations/ascii", |b| {
        b.iter(|| linebreak_locations(black_box(&ascii)))
    });
    c.bench_function("locations/mixed", |b| {
        b.iter(|| linebreak_locations(black_box(&mixed)))
    });
}

fn bench_hard_wrap(c: &mut Criterion) {
    let ascii = ascii_paragraph();
    let breaker = LineBreaker::new();

    c.bench_function("hard_wrap/ascii", |b| {
        b.iter(|| {
            breaker
                .apply_required_linebreaks(Input::from_text(black_box(ascii.clone())))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_locations, bench_hard_wrap);
criterion_main!(benches);
