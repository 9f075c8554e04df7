use crate::time::{Date, Month, Year};

/// The belgian public holidays that fall on the same calendar day every
/// year. Variable feasts (easter monday, ascension, pentecost monday) are
/// intentionally not part of the model.
const FIXED_HOLIDAYS: [(usize, Month, &str); 7] = [
    (1, Month::January, "Nouvel An"),
    (1, Month::May, "Fête du Travail"),
    (21, Month::July, "Fête Nationale"),
    (15, Month::August, "Assomption"),
    (1, Month::November, "Toussaint"),
    (11, Month::November, "Armistice"),
    (25, Month::December, "Noël"),
];

/// Returns the public holidays of the given year.
#[must_use]
pub fn holidays_for_year(year: Year) -> [Date; 7] {
    FIXED_HOLIDAYS.map(|(day, month, _)| {
        Date::new(year, month, day).expect("holiday table days are valid in every year")
    })
}

/// Returns the name of the holiday on the given date, if there is one.
#[must_use]
pub fn holiday_name(date: Date) -> Option<&'static str> {
    FIXED_HOLIDAYS
        .iter()
        .find(|(day, month, _)| date.day() == *day && date.month() == *month)
        .map(|(_, _, name)| *name)
}

#[must_use]
pub fn is_holiday(date: Date) -> bool {
    holiday_name(date).is_some()
}
