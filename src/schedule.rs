use crate::time::TimeOfDay;
use itertools::Itertools;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::Serialize;

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Error, Debug, Eq, PartialEq)]
pub enum ValidationError {
    #[error("departure {hour}:{minute} is outside the 24-hour clock")]
    OutOfRange { hour: u8, minute: u8 },
    #[error("timetable is not ascending: {next} follows {prev}")]
    OutOfOrder { prev: TimeOfDay, next: TimeOfDay },
}

// Morning shuttle bus schedule, Pacific time
const MORNING: [TimeOfDay; 11] = [
    TimeOfDay(6, 10),
    TimeOfDay(6, 26),
    TimeOfDay(6, 38),
    TimeOfDay(6, 52),
    TimeOfDay(7, 20),
    TimeOfDay(7, 37),
    TimeOfDay(7, 52),
    TimeOfDay(8, 17),
    TimeOfDay(8, 35),
    TimeOfDay(8, 52),
    TimeOfDay(9, 12),
];

// Afternoon schedule
const AFTERNOON: [TimeOfDay; 10] = [
    TimeOfDay(15, 43),
    TimeOfDay(16, 3),
    TimeOfDay(16, 39),
    TimeOfDay(17, 7),
    TimeOfDay(17, 29),
    TimeOfDay(17, 47),
    TimeOfDay(18, 6),
    TimeOfDay(18, 27),
    TimeOfDay(18, 45),
    TimeOfDay(19, 5),
];

/// One calendar day of departures, kept in strictly ascending order
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Schedule {
    departures: Vec<TimeOfDay>,
}

impl Default for Schedule {
    /// The fixed daily shuttle bus timetable: 11 morning and 10
    /// afternoon departures
    fn default() -> Schedule {
        Schedule {
            departures: MORNING.iter().chain(AFTERNOON.iter()).copied().collect(),
        }
    }
}

impl Schedule {
    /// Constructs a Schedule from caller-supplied departures
    ///
    /// # Errors
    /// Rejects entries outside the 24-hour clock, and timetables that
    /// are not strictly ascending (duplicates included)
    ///
    /// # Examples
    /// ```
    /// use pendelbus_libs::schedule::{Schedule, ValidationError};
    /// use pendelbus_libs::time::TimeOfDay;
    ///
    /// let schedule = Schedule::new(vec![TimeOfDay::new(6, 10), TimeOfDay::new(9, 12)]);
    /// assert!(schedule.is_ok());
    ///
    /// assert_eq!(
    ///     Schedule::new(vec![TimeOfDay::new(6, 60)]),
    ///     Err(ValidationError::OutOfRange { hour: 6, minute: 60 })
    /// );
    /// ```
    pub fn new(departures: Vec<TimeOfDay>) -> Result<Schedule, ValidationError> {
        if let Some(&bad) = departures
            .iter()
            .find(|d| d.hour() > 23 || d.minute() > 59)
        {
            return Err(ValidationError::OutOfRange {
                hour: bad.hour(),
                minute: bad.minute(),
            });
        }

        if let Some((prev, next)) = departures
            .iter()
            .copied()
            .tuple_windows()
            .find(|(prev, next)| prev >= next)
        {
            return Err(ValidationError::OutOfOrder { prev, next });
        }

        Ok(Schedule { departures })
    }

    /// Every departure at or after `now`, in timetable order
    /// Because the timetable is ascending this is always a suffix of it;
    /// past the final departure of the day the suffix is empty
    ///
    /// # Examples
    /// ```
    /// use pendelbus_libs::schedule::Schedule;
    /// use pendelbus_libs::time::TimeOfDay;
    ///
    /// let schedule = Schedule::default();
    ///
    /// assert_eq!(schedule.upcoming(TimeOfDay::new(6, 0)).len(), 21);
    /// assert_eq!(schedule.upcoming(TimeOfDay::new(10, 0)).len(), 10);
    /// assert!(schedule.upcoming(TimeOfDay::new(20, 0)).is_empty());
    /// ```
    pub fn upcoming(&self, now: TimeOfDay) -> &[TimeOfDay] {
        match self.departures.iter().position(|&d| now.is_not_later(d)) {
            Some(first) => &self.departures[first..],
            None => &[],
        }
    }

    pub fn departures(&self) -> &[TimeOfDay] {
        &self.departures
    }

    pub fn len(&self) -> usize {
        self.departures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departures.is_empty()
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Schedule {
    /// Sorts and dedups the raw input so that every fuzzed Schedule
    /// upholds the ascending-order invariant
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut departures = u.arbitrary::<Vec<TimeOfDay>>()?;
        departures.sort_unstable();
        departures.dedup();
        Ok(Schedule { departures })
    }
}
