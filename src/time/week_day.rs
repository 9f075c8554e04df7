use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum WeekDay {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl WeekDay {
    pub const fn as_usize(&self) -> usize {
        *self as usize
    }

    pub const fn week_days() -> [Self; 7] {
        [
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
            Self::Sunday,
        ]
    }

    /// Saturdays and sundays are never working days.
    #[must_use]
    pub const fn is_weekend(&self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }

    /// The two-letter french column header used by the calendar renderer.
    #[must_use]
    pub const fn short_name(&self) -> &'static str {
        match self {
            Self::Monday => "Lu",
            Self::Tuesday => "Ma",
            Self::Wednesday => "Me",
            Self::Thursday => "Je",
            Self::Friday => "Ve",
            Self::Saturday => "Sa",
            Self::Sunday => "Di",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidWeekDayNumber;

impl TryFrom<usize> for WeekDay {
    type Error = InvalidWeekDayNumber;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Monday),
            2 => Ok(Self::Tuesday),
            3 => Ok(Self::Wednesday),
            4 => Ok(Self::Thursday),
            5 => Ok(Self::Friday),
            6 => Ok(Self::Saturday),
            7 => Ok(Self::Sunday),
            _ => Err(InvalidWeekDayNumber),
        }
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_weekend() {
        for day in 1..=7 {
            let week_day = WeekDay::try_from(day).unwrap();
            assert_eq!(week_day.is_weekend(), day >= 6, "{} is_weekend", week_day);
        }
    }

    #[test]
    fn test_try_from() {
        assert_eq!(WeekDay::try_from(1), Ok(WeekDay::Monday));
        assert_eq!(WeekDay::try_from(7), Ok(WeekDay::Sunday));
        assert_eq!(WeekDay::try_from(0), Err(InvalidWeekDayNumber));
        assert_eq!(WeekDay::try_from(8), Err(InvalidWeekDayNumber));
    }
}
