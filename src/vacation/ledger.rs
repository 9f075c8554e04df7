use std::collections::BTreeMap;

use log::debug;

use crate::time::Date;
use crate::vacation::{EntitlementBalance, Period, VacationMark};

/// Returns a new mark set with the given half-day period flipped.
///
/// The input set is never mutated. Replacing the whole set on every change
/// keeps observers of the previous set consistent and makes the per-date
/// state machine easy to test in isolation.
#[must_use]
pub fn toggled(
    marks: &BTreeMap<Date, VacationMark>,
    date: Date,
    period: Period,
) -> BTreeMap<Date, VacationMark> {
    let mut next = marks.clone();

    match next.remove(&date) {
        Some(mark) => {
            if let Some(mark) = mark.toggled(period) {
                next.insert(date, mark);
            }
        }
        None => {
            next.insert(date, VacationMark::new(date, period));
        }
    }

    next
}

/// Sums the vacation hours over all marks.
///
/// This is recomputed from scratch on every change instead of keeping a
/// running total, so a missed update can never make the balance drift. The
/// set is bounded by the days of a year, so the linear cost does not matter.
#[must_use]
pub fn used_hours<'a>(marks: impl IntoIterator<Item = &'a VacationMark>) -> u32 {
    marks.into_iter().map(VacationMark::hours).sum()
}

/// The set of marked vacation half-days of one session, together with the
/// entitlement balance derived from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VacationLedger {
    marks: BTreeMap<Date, VacationMark>,
    balance: EntitlementBalance,
}

impl VacationLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_total_hours(hours: u32) -> Self {
        Self {
            marks: BTreeMap::new(),
            balance: EntitlementBalance::new(hours),
        }
    }

    /// Flips the given half-day period for the date and recomputes the
    /// balance. Toggling the same period twice in a row restores the
    /// previous state exactly.
    pub fn toggle(&mut self, date: Date, period: Period) {
        self.marks = toggled(&self.marks, date, period);
        self.balance.set_used_hours(used_hours(self.marks.values()));

        debug!(
            "toggled {:?} on {}, {} hour(s) used",
            period,
            date,
            self.balance.used_hours()
        );
    }

    /// Changes the entitlement total without touching the usage figures.
    pub fn set_total_hours(&mut self, hours: u32) {
        self.balance.set_total_hours(hours);
    }

    #[must_use]
    pub fn marks(&self) -> &BTreeMap<Date, VacationMark> {
        &self.marks
    }

    #[must_use]
    pub fn mark_for(&self, date: Date) -> Option<&VacationMark> {
        self.marks.get(&date)
    }

    #[must_use]
    pub fn balance(&self) -> EntitlementBalance {
        self.balance
    }
}
