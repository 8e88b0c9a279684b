use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use iap_core::record::{Gender, Record, SpendingSegment};
use iap_core::smooth::{moving_average, MultiSeriesPoint};
use iap_core::{rollup_sum2, PipelineOptions, SelectionState};

const GENRES: [&str; 6] = ["RPG", "Puzzle", "Action", "Strategy", "Racing", "Simulation"];

fn gen_records(n: usize) -> Vec<Record> {
    let segments = [SpendingSegment::Whale, SpendingSegment::Dolphin, SpendingSegment::Minnow];
    let genders = [Gender::Male, Gender::Female, Gender::Other];
    (0..n)
        .map(|i| Record {
            age: 10 + (i % 55) as i32,
            purchase_amount: ((i * 37) % 500) as f64 * 0.25,
            genre: GENRES[i % GENRES.len()].to_string(),
            gender: genders[i % genders.len()],
            segment: segments[(i / 3) % segments.len()],
            session_count: (i % 40) as u32,
        })
        .collect()
}

fn bench_rollup(c: &mut Criterion) {
    let mut group = c.benchmark_group("rollup_sum2");
    for &n in &[10_000usize, 100_000usize] {
        let records = gen_records(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &records, |b, recs| {
            b.iter(|| {
                let totals = rollup_sum2(
                    recs,
                    |r| Some(r.genre.clone()),
                    |r| Some(r.segment),
                    |r| r.purchase_amount,
                );
                black_box(totals);
            })
        });
    }
    group.finish();
}

fn bench_smooth(c: &mut Criterion) {
    let mut group = c.benchmark_group("moving_average");
    for &n in &[1_000usize, 10_000usize] {
        let rows: Vec<MultiSeriesPoint> = (0..n)
            .map(|i| {
                let v = (i as f64 * 0.01).sin() * 10.0;
                let gap = if i % 7 == 0 { None } else { Some(v) };
                MultiSeriesPoint::new(i as f64, vec![Some(v), gap, Some(v * 2.0), Some(v + 1.0)])
            })
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &rows, |b, rows| {
            b.iter_batched(
                || rows.clone(),
                |r| {
                    let _ = black_box(moving_average(&r, 5));
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_recompute(c: &mut Criterion) {
    let records = gen_records(50_000);
    let sel = SelectionState::new();
    let opts = PipelineOptions::default();
    c.bench_function("recompute_50k", |b| {
        b.iter(|| {
            let data = iap_core::recompute(&records, &sel, &opts);
            black_box(data);
        })
    });
}

criterion_group!(benches, bench_rollup, bench_smooth, bench_recompute);
criterion_main!(benches);
