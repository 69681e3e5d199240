use chrono::{Datelike, Local, NaiveDate};

/// Current calendar date in the local timezone.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// ISO-8601 week number of a date, 1 to 53. Dates in the first days of January may belong to
/// week 52 or 53 of the previous year, e.g. 2021-01-01 is in week 53.
pub(crate) fn week_of(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// Zero-indexed month of a date, January is 0 and December is 11.
pub(crate) fn month_index(date: NaiveDate) -> u32 {
    date.month0()
}
