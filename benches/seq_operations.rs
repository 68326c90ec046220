use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use rs2_seq::prelude::*;

fn random_values(size: usize) -> Vec<u32> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen_range(0..1_000)).collect()
}

fn bench_basic_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("basic_operations");

    for size in [1_000, 10_000, 100_000].iter() {
        let values = random_values(*size);

        group.bench_with_input(BenchmarkId::new("map_filter_count", size), &values, |b, values| {
            let pipeline = from_vec(values.clone())
                .into_pipeline()
                .map(|x| black_box(x * 2))
                .filter(|x| black_box(x % 4 == 0));
            b.iter(|| black_box(pipeline.count()));
        });

        group.bench_with_input(BenchmarkId::new("reduce", size), &values, |b, values| {
            let pipeline = from_vec(values.clone()).into_pipeline();
            b.iter(|| black_box(pipeline.reduce(|x, acc: u64| acc + x as u64, 0)));
        });

        group.bench_with_input(BenchmarkId::new("choose", size), &values, |b, values| {
            let pipeline = from_vec(values.clone())
                .into_pipeline()
                .choose(|x| (x % 3 == 0).then_some(x / 3));
            b.iter(|| black_box(pipeline.count()));
        });
    }

    group.finish();
}

fn bench_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouping");

    for size in [1_000, 10_000, 100_000].iter() {
        let values = random_values(*size);

        group.bench_with_input(BenchmarkId::new("group_eager", size), &values, |b, values| {
            let source = from_vec(values.clone()).into_pipeline();
            b.iter(|| black_box(source.group_eager(|x| x % 64).count()));
        });

        group.bench_with_input(BenchmarkId::new("group_then_flatten", size), &values, |b, values| {
            let groups = from_vec(values.clone()).into_pipeline().group_eager(|x| x % 64);
            b.iter(|| black_box(groups.flatten().count()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_basic_operations, bench_grouping);
criterion_main!(benches);
