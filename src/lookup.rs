use crate::schedule::Schedule;
use crate::time::TimeOfDay;
use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The webhook's answer to "when is the next shuttle bus?"
/// `upcoming` is `None` once the last departure of the day has passed
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LookupResult {
    pub message: String,
    pub upcoming: Option<Vec<String>>,
}

impl LookupResult {
    /// The full spoken reply: the message with the next departure time
    /// appended when one remains
    ///
    /// # Examples
    /// ```
    /// use pendelbus_libs::lookup::next_schedule;
    /// use pendelbus_libs::schedule::Schedule;
    /// use pendelbus_libs::time::TimeOfDay;
    ///
    /// let result = next_schedule(TimeOfDay::new(6, 5), &Schedule::default());
    /// assert_eq!(
    ///     result.announcement(),
    ///     "Your next shuttle bus arrives in 5 minutes at 6:10 AM"
    /// );
    /// ```
    pub fn announcement(&self) -> String {
        match self.upcoming.as_ref().and_then(|times| times.first()) {
            Some(next) => format!("{} at {}", self.message, next),
            None => self.message.clone(),
        }
    }
}

/// Renders the arrival message for a wait of `diff` minutes
/// Waits above an hour are split into hour and minute parts; the units
/// are never pluralized, matching the replies the skill has always given
///
/// # Examples
/// ```
/// use pendelbus_libs::lookup::arrival_message;
///
/// assert_eq!(
///     arrival_message(65),
///     "Your next shuttle bus arrives in 1 hour 5 minutes"
/// );
/// assert_eq!(arrival_message(5), "Your next shuttle bus arrives in 5 minutes");
/// ```
pub fn arrival_message(diff: i32) -> String {
    if diff > 60 {
        format!(
            "Your next shuttle bus arrives in {} hour {} minutes",
            diff / 60,
            diff % 60
        )
    } else {
        format!("Your next shuttle bus arrives in {} minutes", diff)
    }
}

/// Looks up the next departure at or after `now`
///
/// Stateless: each call filters the timetable, measures the wait until
/// the soonest remaining departure, and renders the reply. When nothing
/// remains for the day the result carries the "no shuttle bus" message
/// and no departure list; that is a normal outcome, not an error.
///
/// # Examples
/// ```
/// use pendelbus_libs::lookup::next_schedule;
/// use pendelbus_libs::schedule::Schedule;
/// use pendelbus_libs::time::TimeOfDay;
///
/// let schedule = Schedule::default();
///
/// let result = next_schedule(TimeOfDay::new(6, 5), &schedule);
/// assert_eq!(result.message, "Your next shuttle bus arrives in 5 minutes");
///
/// let result = next_schedule(TimeOfDay::new(20, 0), &schedule);
/// assert_eq!(result.message, "No shuttle bus is available as of 8:00 PM");
/// assert_eq!(result.upcoming, None);
/// ```
pub fn next_schedule(now: TimeOfDay, schedule: &Schedule) -> LookupResult {
    let upcoming = schedule.upcoming(now);
    trace!(
        "{} of {} departures remain at {}",
        upcoming.len(),
        schedule.len(),
        now
    );

    match upcoming.first() {
        Some(&next) => {
            let diff = now.minutes_until(next);
            // upcoming() only returns departures at or after now
            debug_assert!(diff >= 0, "upcoming departure earlier than now");
            debug!("next departure {} in {} minutes", next, diff);

            LookupResult {
                message: arrival_message(diff),
                upcoming: Some(upcoming.iter().map(TimeOfDay::to_string).collect()),
            }
        }
        None => LookupResult {
            message: format!("No shuttle bus is available as of {}", now),
            upcoming: None,
        },
    }
}
