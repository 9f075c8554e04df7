use crate::time::schedule::HOURS_PER_DAY;

/// The yearly vacation entitlement and how much of it has been used.
///
/// Only the hour figures are stored. The day figures are always derived by
/// dividing by [`HOURS_PER_DAY`], so they can never drift apart from the
/// hour figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitlementBalance {
    total_hours: u32,
    used_hours: u32,
}

impl EntitlementBalance {
    /// 20 days of 8 hours.
    pub const DEFAULT_TOTAL_HOURS: u32 = 160;

    #[must_use]
    pub const fn new(total_hours: u32) -> Self {
        Self {
            total_hours,
            used_hours: 0,
        }
    }

    pub(crate) fn set_total_hours(&mut self, hours: u32) {
        self.total_hours = hours;
    }

    pub(crate) fn set_used_hours(&mut self, hours: u32) {
        self.used_hours = hours;
    }

    #[must_use]
    pub const fn total_hours(&self) -> u32 {
        self.total_hours
    }

    #[must_use]
    pub const fn used_hours(&self) -> u32 {
        self.used_hours
    }

    #[must_use]
    pub fn total_days(&self) -> f64 {
        f64::from(self.total_hours) / f64::from(HOURS_PER_DAY)
    }

    #[must_use]
    pub fn used_days(&self) -> f64 {
        f64::from(self.used_hours) / f64::from(HOURS_PER_DAY)
    }

    /// May be negative when more vacation is marked than the entitlement
    /// covers.
    #[must_use]
    pub const fn remaining_hours(&self) -> i64 {
        self.total_hours as i64 - self.used_hours as i64
    }

    #[must_use]
    pub fn remaining_days(&self) -> f64 {
        self.remaining_hours() as f64 / f64::from(HOURS_PER_DAY)
    }
}

impl Default for EntitlementBalance {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOTAL_HOURS)
    }
}
