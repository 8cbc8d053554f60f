use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use movies::MovieCollection;
use rand::prelude::*;

const CATEGORIES: [&str; 4] = ["Fantasy", "Drama", "Animated comedy", "Crime"];

fn release_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2001, 11, 10).unwrap()
}

fn filled(count: usize) -> MovieCollection {
    let mut collection = MovieCollection::new();
    for i in 0..count {
        let _ = collection
            .add(format!("movie{}", i), CATEGORIES[i % CATEGORIES.len()], release_date(), "90")
            .unwrap();
    }
    collection
}

fn add_bench(c: &mut Criterion) {
    c.bench_function("add", |b| {
        b.iter_batched(
            MovieCollection::new,
            |mut collection| {
                for i in 0..100 {
                    let _ = collection
                        .add(format!("movie{}", i), "Drama", release_date(), "90")
                        .unwrap();
                }
            },
            BatchSize::SmallInput,
        );
    });
}

fn query_bench(c: &mut Criterion) {
    let collection = filled(1000);
    let mut group = c.benchmark_group("query");

    group.bench_function("details", |b| {
        let mut rng = thread_rng();
        b.iter(|| collection.details(&format!("movie{}", rng.gen_range(0..1000))));
    });

    group.bench_function("list_by_category", |b| {
        let mut rng = thread_rng();
        b.iter(|| {
            let category = CATEGORIES.choose(&mut rng).unwrap().to_lowercase();
            collection.list_by_category(&category).count()
        });
    });

    group.finish();
}

criterion_group!(benches, add_bench, query_bench);
criterion_main!(benches);
