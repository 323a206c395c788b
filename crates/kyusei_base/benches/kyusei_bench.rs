use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kyusei_base::{
    DayStarTable, LuckyStars, StarGroup, day_star, direction_fortunes, month_star, year_star,
};
use kyusei_time::CalendarDate;

fn star_bench(c: &mut Criterion) {
    let date = CalendarDate::from_days_since_epoch(19_800);

    let mut group = c.benchmark_group("star");
    group.bench_function("year_star", |b| b.iter(|| year_star(black_box(date))));
    group.bench_function("month_star", |b| b.iter(|| month_star(black_box(date))));
    group.finish();
}

fn day_star_bench(c: &mut Criterion) {
    let date = CalendarDate::from_days_since_epoch(19_800);
    let end = date.plus_days(365);

    let mut group = c.benchmark_group("day_star");
    group.bench_function("single", |b| b.iter(|| day_star(black_box(date))));
    group.bench_function("table_one_year", |b| {
        b.iter(|| DayStarTable::build(black_box(date), black_box(end)))
    });
    group.finish();
}

fn fortune_bench(c: &mut Criterion) {
    let Ok(birth) = StarGroup::resolve(CalendarDate::from_days_since_epoch(7_439)) else {
        return;
    };
    let Ok(current) = StarGroup::resolve(CalendarDate::from_days_since_epoch(19_894)) else {
        return;
    };
    let lucky = LuckyStars::from_own_lucky(birth.year);

    let mut group = c.benchmark_group("fortune");
    group.bench_function("direction_fortunes", |b| {
        b.iter(|| direction_fortunes(black_box(&birth), &lucky, black_box(&current)))
    });
    group.finish();
}

criterion_group!(benches, star_bench, day_star_bench, fortune_bench);
criterion_main!(benches);
