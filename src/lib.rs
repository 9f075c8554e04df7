mod utils;

pub mod input;
pub mod render;
pub mod time;
pub mod vacation;

use log::info;

use crate::input::Plan;
use crate::time::Year;

/// Builds the ledger described by the plan and renders the year calendar
/// together with the balance summary.
#[must_use]
pub fn vacation_overview(plan: &Plan, year: Year) -> String {
    let ledger = plan.build_ledger();

    info!(
        "{} day(s) marked, {} hour(s) used",
        ledger.marks().len(),
        ledger.balance().used_hours()
    );

    render::render_year(&ledger, year)
}
