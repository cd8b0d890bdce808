use criterion::{criterion_group, criterion_main, Criterion};
use hijri_engine::{lock_instant, period_for, to_hijri, ChallengeScope, GregorianDate};
use std::hint::black_box;

fn bench_to_hijri(c: &mut Criterion) {
    let date = GregorianDate::parse("2026-03-01").unwrap();
    c.bench_function("to_hijri", |b| b.iter(|| to_hijri(black_box(date))));
}

fn bench_period_for(c: &mut Criterion) {
    let mut group = c.benchmark_group("period_for");
    for scope in [ChallengeScope::Daily, ChallengeScope::Weekly, ChallengeScope::Monthly] {
        group.bench_function(scope.as_str(), |b| {
            b.iter(|| period_for(black_box("2026-03-01"), scope).unwrap())
        });
    }
    group.finish();
}

fn bench_lock_instant(c: &mut Criterion) {
    let date = GregorianDate::parse("2026-03-01").unwrap();
    let mut group = c.benchmark_group("lock_instant");
    group.bench_function("known_zone", |b| {
        b.iter(|| lock_instant(black_box(date), black_box("America/New_York")))
    });
    group.bench_function("fallback", |b| {
        b.iter(|| lock_instant(black_box(date), black_box("not/a-zone")))
    });
    group.finish();
}

criterion_group!(benches, bench_to_hijri, bench_period_for, bench_lock_instant);
criterion_main!(benches);
