//! Quantifies the working time of a half-day period.
//!
//! Every working day splits into a morning and an afternoon period. Mornings
//! are always 4 hours. Afternoons are 4 hours as well, except on fridays,
//! which end an hour early.

use crate::time::{Date, WeekDay};

/// A full working day counts as 8 hours, which is the conversion rate
/// between the hour and day figures of the entitlement balance.
pub const HOURS_PER_DAY: u32 = 8;

#[must_use]
pub const fn morning_hours() -> u32 {
    4
}

#[must_use]
pub const fn afternoon_hours(date: Date) -> u32 {
    if matches!(date.week_day(), WeekDay::Friday) {
        3
    } else {
        4
    }
}

#[must_use]
pub const fn working_hours(date: Date) -> u32 {
    morning_hours() + afternoon_hours(date)
}
