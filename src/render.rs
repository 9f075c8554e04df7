//! Text rendering of the year calendar and the balance summary.
//!
//! Each day cell is five characters wide: the day number followed by a
//! two-character flag field. Holidays show `**`, weekends `..` and working
//! days an `a` and/or `p` for a marked morning/afternoon.

use crate::time::{holiday, Date, Month, WeekDay, Year};
use crate::vacation::{EntitlementBalance, VacationLedger, VacationMark};

const CELL_WIDTH: usize = 5;

fn day_cell(date: Date, mark: Option<&VacationMark>) -> String {
    let flags = if date.is_holiday() {
        "**".to_string()
    } else if date.week_day().is_weekend() {
        "..".to_string()
    } else {
        format!(
            "{}{}",
            if mark.is_some_and(VacationMark::morning) {
                'a'
            } else {
                ' '
            },
            if mark.is_some_and(VacationMark::afternoon) {
                'p'
            } else {
                ' '
            },
        )
    };

    format!("{:>2}{:<2} ", date.day(), flags)
}

/// Formats a day figure with up to three decimals, so a full friday shows
/// as `0.875` and a plain half day as `0.5`.
fn format_days(days: f64) -> String {
    let formatted = format!("{:.3}", days);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[must_use]
pub fn render_month(ledger: &VacationLedger, year: Year, month: Month) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} {}\n", month.name(), year));

    let mut header = String::new();
    for week_day in WeekDay::week_days() {
        header.push_str(&format!(
            "{:<width$}",
            week_day.short_name(),
            width = CELL_WIDTH
        ));
    }
    out.push_str(header.trim_end());
    out.push('\n');

    let mut line = String::new();
    for date in year.iter_days_in(month) {
        if date.day() == 1 {
            line.push_str(&" ".repeat(CELL_WIDTH * (date.week_day().as_usize() - 1)));
        }

        line.push_str(&day_cell(date, ledger.mark_for(date)));

        if date.week_day().as_usize() == 7 {
            out.push_str(line.trim_end());
            out.push('\n');
            line.clear();
        }
    }

    if !line.is_empty() {
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

#[must_use]
pub fn render_balance(balance: &EntitlementBalance) -> String {
    let mut out = String::new();

    out.push_str("Solde de congés\n");
    out.push_str(&format!(
        "  total   {:>4}h ({}j)\n",
        balance.total_hours(),
        format_days(balance.total_days())
    ));
    out.push_str(&format!(
        "  utilisé {:>4}h ({}j)\n",
        balance.used_hours(),
        format_days(balance.used_days())
    ));
    out.push_str(&format!(
        "  restant {:>4}h ({}j)\n",
        balance.remaining_hours(),
        format_days(balance.remaining_days())
    ));

    out
}

/// Renders all twelve months, the holiday list and the balance summary.
#[must_use]
pub fn render_year(ledger: &VacationLedger, year: Year) -> String {
    let mut out = String::new();

    out.push_str(&format!("Calendrier {}\n\n", year));

    for month in Month::months() {
        out.push_str(&render_month(ledger, year, month));
        out.push('\n');
    }

    out.push_str(&format!("Jours fériés {}\n", year));
    for date in holiday::holidays_for_year(year) {
        if let Some(name) = holiday::holiday_name(date) {
            out.push_str(&format!("  {} {}\n", date, name));
        }
    }
    out.push('\n');

    out.push_str(&render_balance(&ledger.balance()));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::date;
    use crate::vacation::Period;

    #[test]
    fn test_render_month() {
        let mut ledger = VacationLedger::new();
        ledger.toggle(date!(2025:03:12), Period::Morning);
        ledger.toggle(date!(2025:03:14), Period::Morning);
        ledger.toggle(date!(2025:03:14), Period::Afternoon);

        let rendered = render_month(&ledger, Year::new(2025), Month::March);
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines[0], "Mars 2025");
        assert_eq!(lines[1], "Lu   Ma   Me   Je   Ve   Sa   Di");
        // march 2025 starts on a saturday
        assert_eq!(lines[2], "                          1..  2..");
        assert_eq!(lines[3], " 3    4    5    6    7    8..  9..");
        assert_eq!(lines[4], "10   11   12a  13   14ap 15.. 16..");
    }

    #[test]
    fn test_render_marks_holidays() {
        let ledger = VacationLedger::new();
        let rendered = render_month(&ledger, Year::new(2025), Month::July);

        assert!(rendered.contains("21** "), "rendered:\n{}", rendered);
    }

    #[test]
    fn test_render_balance() {
        let mut ledger = VacationLedger::new();
        ledger.toggle(date!(2025:03:14), Period::Morning);
        ledger.toggle(date!(2025:03:14), Period::Afternoon);

        assert_eq!(
            render_balance(&ledger.balance()),
            concat!(
                "Solde de congés\n",
                "  total    160h (20j)\n",
                "  utilisé    7h (0.875j)\n",
                "  restant  153h (19.125j)\n",
            )
        );
    }

    #[test]
    fn test_render_year_lists_holidays() {
        let rendered = render_year(&VacationLedger::new(), Year::new(2025));

        assert!(rendered.contains("Calendrier 2025"));
        assert!(rendered.contains("  2025-07-21 Fête Nationale"));
        assert!(rendered.contains("  2025-12-25 Noël"));
        assert!(rendered.contains("Solde de congés"));
    }
}
