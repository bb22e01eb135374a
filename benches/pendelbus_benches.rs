use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pendelbus_libs::lookup::next_schedule;
use pendelbus_libs::schedule::Schedule;
use pendelbus_libs::time::TimeOfDay;

fn lookup_benches(c: &mut Criterion) {
    c.bench_function("upcoming", |b| {
        let schedule = Schedule::default();

        b.iter(|| black_box(schedule.upcoming(TimeOfDay::new(10, 0))));
    });

    c.bench_function("next_schedule", |b| {
        let schedule = Schedule::default();

        b.iter(|| black_box(next_schedule(TimeOfDay::new(6, 5), &schedule)));
    });

    c.bench_function("next_schedule_end_of_day", |b| {
        let schedule = Schedule::default();

        b.iter(|| black_box(next_schedule(TimeOfDay::new(20, 0), &schedule)));
    });

    c.bench_function("validate", |b| {
        let departures: Vec<TimeOfDay> = Schedule::default().departures().to_vec();

        b.iter(|| black_box(Schedule::new(departures.clone())));
    });
}

criterion_group!(benches, lookup_benches);
criterion_main!(benches);
