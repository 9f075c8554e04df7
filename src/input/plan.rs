use std::fs;
use std::path::Path;

use anyhow::Context as _;
use log::warn;
use serde::Deserialize;

use crate::time::Date;
use crate::vacation::{Period, VacationLedger};

/// What is taken off on a planned day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlannedPeriod {
    Morning,
    Afternoon,
    Full,
}

impl PlannedPeriod {
    const fn periods(&self) -> &'static [Period] {
        match self {
            Self::Morning => &[Period::Morning],
            Self::Afternoon => &[Period::Afternoon],
            Self::Full => &[Period::Morning, Period::Afternoon],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PlannedDay {
    date: Date,
    period: PlannedPeriod,
}

impl PlannedDay {
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }
}

/// A vacation plan file:
///
/// ```toml
/// total_hours = 152
///
/// [[day]]
/// date = "2025-03-14"
/// period = "full"
/// ```
///
/// The entries are a toggle script, so naming the same date and period twice
/// unmarks it again, exactly like clicking the period twice would.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Plan {
    total_hours: Option<u32>,
    #[serde(default, rename = "day")]
    days: Vec<PlannedDay>,
}

impl Plan {
    pub fn from_toml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let input = fs::read_to_string(path)
            .with_context(|| format!("failed to read plan file \"{}\"", path.display()))?;

        toml::from_str(&input)
            .with_context(|| format!("failed to parse plan file \"{}\"", path.display()))
    }

    #[must_use]
    pub fn total_hours(&self) -> Option<u32> {
        self.total_hours
    }

    #[must_use]
    pub fn days(&self) -> &[PlannedDay] {
        &self.days
    }

    /// Applies every entry to a fresh ledger.
    ///
    /// Entries on weekends or holidays are skipped, the calendar never
    /// offers those periods for marking.
    #[must_use]
    pub fn build_ledger(&self) -> VacationLedger {
        let mut ledger = match self.total_hours {
            Some(hours) => VacationLedger::with_total_hours(hours),
            None => VacationLedger::new(),
        };

        for day in &self.days {
            if !day.date.is_working_day() {
                warn!("skipping {}: not a working day", day.date);
                continue;
            }

            for period in day.period.periods() {
                ledger.toggle(day.date, *period);
            }
        }

        ledger
    }
}
