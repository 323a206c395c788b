use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kyusei_time::{CalendarDate, QiDate, SolarTerm, major_term_entry, major_terms};

fn solar_term_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("solar_term");
    group.bench_function("risshun", |b| {
        b.iter(|| major_term_entry(black_box(2024), SolarTerm::Risshun))
    });
    group.bench_function("major_terms", |b| b.iter(|| major_terms(black_box(2024))));
    group.finish();
}

fn qi_date_bench(c: &mut Criterion) {
    let date = CalendarDate::from_days_since_epoch(19_800);
    let january = CalendarDate::from_days_since_epoch(19_740);

    let mut group = c.benchmark_group("qi_date");
    group.bench_function("of_mid_year", |b| b.iter(|| QiDate::of(black_box(date))));
    group.bench_function("of_january", |b| b.iter(|| QiDate::of(black_box(january))));
    group.bench_function("plus_months", |b| {
        let q = QiDate::of(date);
        b.iter(|| q.plus_months(black_box(7)))
    });
    group.finish();
}

criterion_group!(benches, solar_term_bench, qi_date_bench);
criterion_main!(benches);
