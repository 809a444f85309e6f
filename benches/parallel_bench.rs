use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use greekbook::core::OptionType;
use greekbook::instruments::OptionInstrument;
use greekbook::risk::Portfolio;
use rayon::ThreadPoolBuilder;
use std::hint::black_box;

fn benchmark_book(n: usize) -> Portfolio {
    let mut book = Portfolio::new(50_000_000.0);
    for i in 0..n {
        let option = OptionInstrument::new(
            OptionType::Call,
            100.0,
            70.0 + (i % 61) as f64,
            0.04,
            0.0,
            1 + (i % 365) as i64,
            0.1 + 0.01 * (i % 50) as f64,
        )
        .expect("benchmark option should be valid");
        book.add_option(option, 1.0 + (i % 7) as f64, 100.0);
    }
    book
}

fn bench_risk_summary_threads(c: &mut Criterion) {
    let book = benchmark_book(50_000);
    let mut group = c.benchmark_group("risk_summary_50k");
    group.sample_size(20);

    for threads in [1_usize, 2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("rayon_threads", threads),
            &threads,
            |b, &threads| {
                let pool = ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .expect("thread pool should build");
                b.iter(|| {
                    let summary = pool
                        .install(|| black_box(&book).risk_summary())
                        .expect("aggregation should succeed");
                    black_box(summary)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(parallel_benches, bench_risk_summary_threads);
criterion_main!(parallel_benches);
