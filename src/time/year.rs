use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::time::{Date, Month, WeekDay};

#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize, Display,
)]
#[serde(from = "usize")]
#[serde(into = "usize")]
#[display("{_0}")]
pub struct Year(usize);

impl Year {
    #[must_use]
    pub const fn new(year: usize) -> Self {
        Self(year)
    }

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        self.0
    }

    /// A year that is not a leap year is a common year.
    pub const fn is_common_year(&self) -> bool {
        self.as_usize() % 4 != 0 || (self.as_usize() % 100 == 0 && self.as_usize() % 400 != 0)
    }

    /// A leap year is a calendar year that contains an additional day added to February, so
    /// it has 29 days instead of the regular 28 days.
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        // https://en.wikipedia.org/wiki/Leap_year#Algorithm
        !self.is_common_year() && (self.as_usize() % 100 != 0 || self.as_usize() % 400 == 0)
    }

    #[must_use]
    pub const fn number_of_days_in_month(&self, month: Month) -> usize {
        match month {
            Month::January => 31,
            Month::February => {
                if self.is_leap_year() {
                    29
                } else {
                    28
                }
            }
            Month::March => 31,
            Month::April => 30,
            Month::May => 31,
            Month::June => 30,
            Month::July => 31,
            Month::August => 31,
            Month::September => 30,
            Month::October => 31,
            Month::November => 30,
            Month::December => 31,
        }
    }

    /// Returns the number of days in this year.
    #[must_use]
    pub const fn days(&self) -> usize {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    /// Calculate the weekday of this year and the specified month and day.
    ///
    /// # Note
    ///
    /// This function assumes that the day is valid.
    #[must_use]
    pub const fn week_day(&self, month: Month, day: usize) -> WeekDay {
        // Sakamoto's method:
        // https://en.wikipedia.org/wiki/Determination_of_the_day_of_the_week#Sakamoto's_methods
        const OFFSETS: [usize; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

        let year = if month.as_usize() < 3 {
            self.as_usize() - 1
        } else {
            self.as_usize()
        };

        let number =
            (year + year / 4 - year / 100 + year / 400 + OFFSETS[month.as_usize() - 1] + day) % 7;

        match number {
            0 => WeekDay::Sunday,
            1 => WeekDay::Monday,
            2 => WeekDay::Tuesday,
            3 => WeekDay::Wednesday,
            4 => WeekDay::Thursday,
            5 => WeekDay::Friday,
            6 => WeekDay::Saturday,
            _ => unreachable!(),
        }
    }

    pub fn iter_days_in(&self, month: Month) -> impl Iterator<Item = Date> {
        let year = *self;

        (1..=self.number_of_days_in_month(month))
            .map(move |day| Date::new(year, month, day).expect("day is within the month"))
    }
}

impl From<usize> for Year {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<Year> for usize {
    fn from(value: Year) -> Self {
        value.as_usize()
    }
}
