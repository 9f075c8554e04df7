use pretty_assertions::assert_eq;

use conges::date;
use conges::input::Plan;
use conges::time::{Month, Year};
use conges::vacation::{Period, VacationLedger};
use conges::vacation_overview;

#[test]
fn monday_toggle_sequence() {
    let mut ledger = VacationLedger::new();
    // 2025-03-10 is a monday
    let monday = date!(2025:03:10);

    assert_eq!(ledger.balance().total_hours(), 160);
    assert_eq!(ledger.balance().used_hours(), 0);

    ledger.toggle(monday, Period::Morning);
    assert_eq!(ledger.balance().used_hours(), 4);

    ledger.toggle(monday, Period::Afternoon);
    assert_eq!(ledger.balance().used_hours(), 8);

    // unmarking the morning leaves an afternoon-only mark behind
    ledger.toggle(monday, Period::Morning);

    let mark = ledger.mark_for(monday).unwrap();
    assert!(!mark.morning());
    assert!(mark.afternoon());

    assert_eq!(ledger.marks().len(), 1);
    assert_eq!(ledger.balance().used_hours(), 4);
    assert_eq!(ledger.balance().used_days(), 0.5);
    assert_eq!(ledger.balance().remaining_hours(), 156);
}

#[test]
fn friday_counts_seven_hours() {
    let mut ledger = VacationLedger::new();
    // 2025-03-14 is a friday
    let friday = date!(2025:03:14);

    ledger.toggle(friday, Period::Morning);
    ledger.toggle(friday, Period::Afternoon);

    assert_eq!(ledger.balance().used_hours(), 7);
    assert_eq!(ledger.balance().used_days(), 0.875);
}

#[test]
fn editing_the_total_does_not_touch_usage() {
    let mut ledger = VacationLedger::new();
    ledger.toggle(date!(2025:03:12), Period::Morning);
    ledger.toggle(date!(2025:03:12), Period::Afternoon);

    ledger.set_total_hours(100);

    assert_eq!(ledger.balance().total_hours(), 100);
    assert_eq!(ledger.balance().total_days(), 12.5);
    assert_eq!(ledger.balance().used_hours(), 8);
    assert_eq!(ledger.balance().used_days(), 1.0);
}

#[test]
fn marking_every_working_day_of_a_year() {
    let year = Year::new(2025);
    let mut ledger = VacationLedger::new();
    let mut expected_hours = 0;

    for month in Month::months() {
        for date in year.iter_days_in(month) {
            if !date.is_working_day() {
                continue;
            }

            ledger.toggle(date, Period::Morning);
            ledger.toggle(date, Period::Afternoon);
            expected_hours += date.working_hours();
        }
    }

    assert_eq!(ledger.balance().used_hours(), expected_hours);

    // every mark survived with both periods set
    assert!(ledger
        .marks()
        .values()
        .all(|mark| mark.morning() && mark.afternoon()));
}

#[test]
fn overview_from_a_plan_file() {
    let plan: Plan = toml::from_str(concat!(
        "total_hours = 152\n",
        "\n",
        "[[day]]\n",
        "date = \"2025-03-14\"\n",
        "period = \"full\"\n",
    ))
    .unwrap();

    let rendered = vacation_overview(&plan, Year::new(2025));

    assert!(rendered.contains("Calendrier 2025"));
    assert!(rendered.contains("14ap"), "rendered:\n{}", rendered);
    assert!(rendered.contains("  total    152h (19j)"));
    assert!(rendered.contains("  utilisé    7h (0.875j)"));
    assert!(rendered.contains("  restant  145h (18.125j)"));
}
