use chrono::{DateTime, FixedOffset, Timelike, Utc};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A (hour, minute) wall-clock time on the 24-hour clock
/// Ordering is hour first, then minute
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TimeOfDay(pub u8, pub u8);

impl TimeOfDay {
    /// Construct a new TimeOfDay
    /// Components are not validated here; `Schedule::new` rejects
    /// out-of-range entries when a timetable is built
    ///
    /// # Examples
    /// ```
    /// use pendelbus_libs::time::TimeOfDay;
    ///
    /// let test = TimeOfDay::new(6, 10);
    ///
    /// assert_eq!(test.0, 6);
    /// assert_eq!(test.1, 10);
    /// ```
    pub fn new(hour: u8, minute: u8) -> TimeOfDay {
        TimeOfDay(hour, minute)
    }

    /// Convenience function for readability
    /// Returns the hour of the TimeOfDay
    ///
    /// # Examples
    /// ```
    /// use pendelbus_libs::time::TimeOfDay;
    ///
    /// let test = TimeOfDay::new(6, 10);
    /// assert_eq!(test.0, test.hour());
    /// ```
    pub fn hour(self) -> u8 {
        self.0
    }

    /// Convenience function for readability
    /// Returns the minute of the TimeOfDay
    ///
    /// # Examples
    /// ```
    /// use pendelbus_libs::time::TimeOfDay;
    ///
    /// let test = TimeOfDay::new(6, 10);
    /// assert_eq!(test.1, test.minute());
    /// ```
    pub fn minute(self) -> u8 {
        self.1
    }

    /// Returns true if `self` is at or before `other`
    /// The boundary is inclusive: a departure at exactly "now"
    /// still counts as upcoming
    ///
    /// # Examples
    /// ```
    /// use pendelbus_libs::time::TimeOfDay;
    ///
    /// assert!(TimeOfDay::new(6, 35).is_not_later(TimeOfDay::new(7, 35)));
    /// assert!(TimeOfDay::new(7, 40).is_not_later(TimeOfDay::new(7, 40)));
    /// assert!(!TimeOfDay::new(7, 40).is_not_later(TimeOfDay::new(7, 35)));
    /// ```
    pub fn is_not_later(self, other: TimeOfDay) -> bool {
        self <= other
    }

    /// Signed number of minutes from `self` until `later`
    /// Negative when the arguments are reversed; callers that require a
    /// non-negative difference check on their side
    ///
    /// # Examples
    /// ```
    /// use pendelbus_libs::time::TimeOfDay;
    ///
    /// let a = TimeOfDay::new(10, 10);
    /// let b = TimeOfDay::new(11, 10);
    ///
    /// assert_eq!(a.minutes_until(b), 60);
    /// assert_eq!(b.minutes_until(a), -60);
    /// assert_eq!(a.minutes_until(a), 0);
    /// ```
    pub fn minutes_until(self, later: TimeOfDay) -> i32 {
        later.total_minutes() - self.total_minutes()
    }

    fn total_minutes(self) -> i32 {
        i32::from(self.0) * 60 + i32::from(self.1)
    }
}

impl fmt::Display for TimeOfDay {
    /// 12-hour clock with AM/PM suffix and zero-padded minutes
    /// The hour is taken modulo 12, so 0 and 12 render as "0" rather
    /// than "12", matching the output the webhook has always produced
    ///
    /// # Examples
    /// ```
    /// use pendelbus_libs::time::TimeOfDay;
    ///
    /// assert_eq!(TimeOfDay::new(6, 10).to_string(), "6:10 AM");
    /// assert_eq!(TimeOfDay::new(20, 0).to_string(), "8:00 PM");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let am_or_pm = if self.0 >= 12 { "PM" } else { "AM" };
        write!(f, "{}:{:02} {}", self.0 % 12, self.1, am_or_pm)
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for TimeOfDay {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(TimeOfDay(
            u.int_in_range(0..=23)?,
            u.int_in_range(0..=59)?,
        ))
    }
}

/// The fixed Pacific offset used for all schedule comparisons
/// PST is UTC-8; daylight saving transitions are deliberately not
/// handled, so in summer the result runs an hour behind PDT
pub fn pacific() -> FixedOffset {
    FixedOffset::west_opt(8 * 3600).expect("8 hours is within the valid offset range")
}

/// Converts an absolute timestamp to a local wall-clock time at the
/// given fixed offset
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use pendelbus_libs::time::{localize, pacific, TimeOfDay};
///
/// let ts = Utc.with_ymd_and_hms(2018, 1, 15, 14, 5, 0).unwrap();
/// assert_eq!(localize(ts, pacific()), TimeOfDay::new(6, 5));
/// ```
pub fn localize(timestamp: DateTime<Utc>, offset: FixedOffset) -> TimeOfDay {
    let local = timestamp.with_timezone(&offset);
    TimeOfDay(local.hour() as u8, local.minute() as u8)
}
