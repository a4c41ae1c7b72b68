//! Benchmarks for the home and detail aggregators
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use medalboard::aggregate;
use medalboard::dataset::{Country, Participation};

fn create_dataset(countries: u32, participations: u32) -> Vec<Country> {
    (1..=countries)
        .map(|id| {
            (0..participations).fold(Country::new(id, format!("Country {}", id)), |c, i| {
                // Every fourth participation repeats an earlier id
                let pid = if i % 4 == 3 { i - 1 } else { i };
                c.participation(Participation::new(pid, 1896 + i * 4, i % 50, 100 + i))
            })
        })
        .collect()
}

fn bench_home(c: &mut Criterion) {
    let mut group = c.benchmark_group("home");

    for size in [10, 200, 2000] {
        let countries = create_dataset(size, 30);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("summarize_{}", size), |b| {
            b.iter(|| aggregate::summarize(black_box(&countries)))
        });
    }

    group.finish();
}

fn bench_detail(c: &mut Criterion) {
    let mut group = c.benchmark_group("detail");
    let countries = create_dataset(200, 30);

    group.bench_function("select_and_build", |b| {
        b.iter(|| {
            aggregate::select_country(black_box(&countries), 150).map(aggregate::build_detail)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_home, bench_detail);
criterion_main!(benches);
