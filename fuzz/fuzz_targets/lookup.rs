#![no_main]
use libfuzzer_sys::fuzz_target;
use pendelbus_libs::lookup::next_schedule;
use pendelbus_libs::schedule::Schedule;
use pendelbus_libs::time::TimeOfDay;

fuzz_target!(|data: (TimeOfDay, Schedule)| {
    let (now, schedule) = data;

    let upcoming = schedule.upcoming(now);

    assert!(
        upcoming.len() <= schedule.len(),
        "upcoming cannot outgrow the timetable"
    );
    assert_eq!(
        upcoming,
        &schedule.departures()[schedule.len() - upcoming.len()..],
        "upcoming must be a suffix of the timetable"
    );
    assert!(
        upcoming.iter().all(|&d| now.is_not_later(d)),
        "every upcoming departure is at or after now"
    );

    let result = next_schedule(now, &schedule);
    match upcoming.first() {
        Some(&next) => {
            assert!(
                now.minutes_until(next) >= 0,
                "wait until the next departure went negative"
            );
            assert_eq!(
                result.upcoming.as_ref().map(Vec::len),
                Some(upcoming.len())
            );
            assert!(result.announcement().starts_with(&result.message));
        }
        None => {
            assert!(result.upcoming.is_none());
            assert_eq!(result.announcement(), result.message);
        }
    }
});
