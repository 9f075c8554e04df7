use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(try_from = "usize")]
#[serde(into = "usize")]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    pub const fn new(number: usize) -> Self {
        Self::months()[number - 1]
    }

    pub const fn months() -> [Self; 12] {
        [
            Self::January,
            Self::February,
            Self::March,
            Self::April,
            Self::May,
            Self::June,
            Self::July,
            Self::August,
            Self::September,
            Self::October,
            Self::November,
            Self::December,
        ]
    }

    pub const fn as_usize(&self) -> usize {
        *self as usize
    }

    /// The french month name, as shown in the calendar headers.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::January => "Janvier",
            Self::February => "Février",
            Self::March => "Mars",
            Self::April => "Avril",
            Self::May => "Mai",
            Self::June => "Juin",
            Self::July => "Juillet",
            Self::August => "Août",
            Self::September => "Septembre",
            Self::October => "Octobre",
            Self::November => "Novembre",
            Self::December => "Décembre",
        }
    }
}

impl From<Month> for usize {
    fn from(month: Month) -> Self {
        month.as_usize()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_usize().fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Error)]
#[error("invalid month number")]
pub struct InvalidNumberForMonth;

impl TryFrom<usize> for Month {
    type Error = InvalidNumberForMonth;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::months()
            .into_iter()
            .find(|month| *month as usize == value)
            .ok_or(InvalidNumberForMonth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_display() {
        for month in Month::months() {
            assert_eq!(month.to_string(), month.as_usize().to_string());
        }
    }

    #[test]
    fn test_new_round_trips() {
        for month in Month::months() {
            assert_eq!(Month::new(month.as_usize()), month);
            assert_eq!(Month::try_from(month.as_usize()), Ok(month));
        }

        assert_eq!(Month::try_from(0), Err(InvalidNumberForMonth));
        assert_eq!(Month::try_from(13), Err(InvalidNumberForMonth));
    }
}
