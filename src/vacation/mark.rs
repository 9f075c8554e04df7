use serde::Deserialize;

use crate::time::{schedule, Date};

/// One of the two halves of a working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Morning,
    Afternoon,
}

/// A day on which at least one half-day period is taken as vacation.
///
/// A mark with neither period set must not exist: toggling the last set
/// period removes the mark from the ledger instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VacationMark {
    date: Date,
    morning: bool,
    afternoon: bool,
}

impl VacationMark {
    #[must_use]
    pub fn new(date: Date, period: Period) -> Self {
        Self {
            date,
            morning: period == Period::Morning,
            afternoon: period == Period::Afternoon,
        }
    }

    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    #[must_use]
    pub const fn morning(&self) -> bool {
        self.morning
    }

    #[must_use]
    pub const fn afternoon(&self) -> bool {
        self.afternoon
    }

    /// Flips the given period. Returns `None` when neither period is set
    /// afterwards, in which case the mark has to disappear.
    #[must_use]
    pub(crate) fn toggled(mut self, period: Period) -> Option<Self> {
        match period {
            Period::Morning => self.morning = !self.morning,
            Period::Afternoon => self.afternoon = !self.afternoon,
        }

        if !self.morning && !self.afternoon {
            None
        } else {
            Some(self)
        }
    }

    /// The vacation hours this mark accounts for.
    #[must_use]
    pub fn hours(&self) -> u32 {
        let mut hours = 0;

        if self.morning {
            hours += schedule::morning_hours();
        }

        if self.afternoon {
            hours += schedule::afternoon_hours(self.date);
        }

        hours
    }
}
