use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pblite_filters::{dog_filter_bank, gabor_filter_bank, lm_filter_bank, LmVariant};

fn bench_banks(c: &mut Criterion) {
    let mut group = c.benchmark_group("FilterBanks");

    group.bench_function("dog", |b| b.iter(|| black_box(dog_filter_bank())));

    for variant in [LmVariant::Small, LmVariant::Large] {
        group.bench_function(format!("lm_{variant}"), |b| {
            b.iter(|| black_box(lm_filter_bank(black_box(variant))))
        });
    }

    group.bench_function("gabor_8", |b| {
        b.iter(|| black_box(gabor_filter_bank(black_box(8), 8.0, 0.65, 0.0)))
    });

    group.finish();
}

criterion_group!(benches, bench_banks);
criterion_main!(benches);
