use core::fmt;
use core::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::time::{holiday, schedule, Month, WeekDay, Year};
use crate::utils::StrExt;

#[macro_export]
macro_rules! date {
    ($year:literal : $month:literal : $day:literal) => {{
        const _YEAR: $crate::time::Year = $crate::time::Year::new($year);
        static_assertions::const_assert!($month >= 1 && $month <= 12);

        const _MONTH: $crate::time::Month = $crate::time::Month::new($month);

        // validate the day
        static_assertions::const_assert!($day != 0);
        static_assertions::const_assert!($day <= _YEAR.number_of_days_in_month(_MONTH));

        unsafe { $crate::time::Date::new_unchecked(_YEAR, _MONTH, $day) }
    }};
}

/// A calendar date with day granularity. Two dates are equal iff they name
/// the same calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Date {
    year: Year,
    month: Month,
    day: usize,
}

impl Date {
    pub fn new(year: impl Into<Year>, month: Month, day: usize) -> Result<Self, InvalidDate> {
        let year = year.into();
        if year.number_of_days_in_month(month) < day || day == 0 {
            return Err(InvalidDate::InvalidDay { year, month, day });
        }

        Ok(Self { year, month, day })
    }

    #[doc(hidden)]
    #[must_use]
    pub const unsafe fn new_unchecked(year: Year, month: Month, day: usize) -> Self {
        Self { year, month, day }
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> usize {
        self.day
    }

    pub const fn week_day(&self) -> WeekDay {
        self.year().week_day(self.month(), self.day())
    }

    /// Whether this date is one of the belgian public holidays.
    #[must_use]
    pub fn is_holiday(&self) -> bool {
        holiday::is_holiday(*self)
    }

    /// A working day is a monday through friday that is not a public holiday.
    ///
    /// Only working days can have vacation marked on them, but this is the
    /// caller's responsibility to check. The accounting functions accept any
    /// date.
    #[must_use]
    pub fn is_working_day(&self) -> bool {
        !self.week_day().is_weekend() && !self.is_holiday()
    }

    /// The number of workable hours on this date, split over both half-day
    /// periods.
    #[must_use]
    pub fn working_hours(&self) -> u32 {
        schedule::working_hours(*self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDate {
    #[error("\"{input}\" is not valid date. Expected format: \"YYYY-MM-DD\"")]
    ParseDateError { input: String },
    #[error("{day:02} is not a valid day for {year:04}-{month:02}")]
    InvalidDay {
        year: Year,
        month: Month,
        day: usize,
    },
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.as_usize(),
            self.month.as_usize(),
            self.day
        )
    }
}

fn parse_or_err(input: &str) -> Result<usize, InvalidDate> {
    input
        .parse::<usize>()
        .map_err(|_| InvalidDate::ParseDateError {
            input: input.to_string(),
        })
}

impl FromStr for Date {
    type Err = InvalidDate;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        if let [Some(year), Some(month), Some(day)] = string.split_exact::<3>("-") {
            let year = Year::new(parse_or_err(year)?);
            let month =
                Month::try_from(parse_or_err(month)?).map_err(|_| InvalidDate::ParseDateError {
                    input: string.to_string(),
                })?;
            let day = parse_or_err(day)?;

            Self::new(year, month, day)
        } else {
            Err(InvalidDate::ParseDateError {
                input: string.to_string(),
            })
        }
    }
}

impl TryFrom<String> for Date {
    type Error = <Self as FromStr>::Err;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(value.as_str())
    }
}
