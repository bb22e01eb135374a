#![no_main]
use libfuzzer_sys::fuzz_target;
use pendelbus_libs::time::TimeOfDay;

fuzz_target!(|data: (TimeOfDay, TimeOfDay)| {
    let (a, b) = data;

    assert!(a.is_not_later(a), "comparison must be reflexive");

    assert_eq!(
        a.minutes_until(b),
        -b.minutes_until(a),
        "minute difference must be antisymmetric"
    );

    if a.is_not_later(b) {
        assert!(
            a.minutes_until(b) >= 0,
            "an upcoming time cannot be a negative wait away"
        );
    }

    let rendered = b.to_string();
    assert!(
        rendered.ends_with(" AM") || rendered.ends_with(" PM"),
        "rendered time missing its suffix: {}",
        rendered
    );
});
