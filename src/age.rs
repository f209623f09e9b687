//! age.rs
//!
//! Calendar-aware elapsed time between a birth date and a reference date,
//! expressed as whole years, months and days:
//!     "X years, Y months, Z days"
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python's
//! relativedelta), so we anchor on the birth date and count whole calendar
//! months forward, then take the leftover days.
//!
//! This logic correctly handles:
//!   • month-end birthdays (Jan 31 + 1 month lands on Feb 28/29)
//!   • Feb 29 birthdays in common years
//!   • leap years
//!   • varying month lengths

use std::fmt;

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

/// Whole years, months and days between two dates.
///
/// Invariant: `months < 12` and `days` is shorter than the month it was
/// counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElapsedSpan {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl ElapsedSpan {
    pub const ZERO: Self = Self {
        years: 0,
        months: 0,
        days: 0,
    };

    /// Total whole months, years included.
    pub fn total_months(&self) -> u32 {
        self.years * 12 + self.months
    }
}

impl fmt::Display for ElapsedSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} year{}, {} month{}, {} day{}",
            self.years,
            plural(self.years),
            self.months,
            plural(self.months),
            self.days,
            plural(self.days)
        )
    }
}

/// Returns the elapsed span from `birth` to `reference`.
///
/// The caller must have checked `birth <= reference`; an inverted pair
/// yields [`ElapsedSpan::ZERO`].
pub fn elapsed_span(birth: NaiveDate, reference: NaiveDate) -> ElapsedSpan {
    if reference <= birth {
        return ElapsedSpan::ZERO;
    }

    let mut months = (reference.year() - birth.year()) * 12 + reference.month() as i32
        - birth.month() as i32;

    // Step back one month if the anchored date overshoots (e.g. the day of
    // month has not been reached yet in the reference month).
    let mut anchor = add_months(birth, months as u32);
    if anchor > reference {
        months -= 1;
        anchor = add_months(birth, months as u32);
    }

    let months = months as u32;
    let days = (reference - anchor).num_days() as u32;

    ElapsedSpan {
        years: months / 12,
        months: months % 12,
        days,
    }
}

/// `date` moved forward by `months` calendar months, clamping the day to the
/// end of the target month.
pub(crate) fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    // Saturates at NaiveDate::MAX, far beyond any birth date we accept.
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

fn plural(n: u32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn span(years: u32, months: u32, days: u32) -> ElapsedSpan {
        ElapsedSpan {
            years,
            months,
            days,
        }
    }

    #[test]
    fn same_day_is_zero() {
        assert_eq!(elapsed_span(ymd(1980, 7, 2), ymd(1980, 7, 2)), ElapsedSpan::ZERO);
    }

    #[test]
    fn exact_birthday() {
        assert_eq!(elapsed_span(ymd(1995, 1, 1), ymd(2024, 1, 1)), span(29, 0, 0));
    }

    #[test]
    fn day_before_birthday_borrows_a_year() {
        assert_eq!(
            elapsed_span(ymd(1995, 1, 1), ymd(2023, 12, 31)),
            span(28, 11, 30)
        );
    }

    #[test]
    fn six_months_and_a_day() {
        assert_eq!(elapsed_span(ymd(1995, 1, 1), ymd(2024, 7, 2)), span(29, 6, 1));
        assert_eq!(elapsed_span(ymd(1995, 1, 1), ymd(2024, 7, 1)), span(29, 6, 0));
    }

    #[test]
    fn month_end_birth_clamps_anchor() {
        // Jan 31 + 1 month is Feb 29 in 2024, then one more day.
        assert_eq!(elapsed_span(ymd(2024, 1, 31), ymd(2024, 3, 1)), span(0, 1, 1));
        assert_eq!(elapsed_span(ymd(2023, 1, 31), ymd(2023, 3, 1)), span(0, 1, 1));
    }

    #[test]
    fn leap_day_birth_in_common_year() {
        assert_eq!(
            elapsed_span(ymd(2000, 2, 29), ymd(2023, 2, 28)),
            span(23, 0, 0)
        );
        assert_eq!(elapsed_span(ymd(2000, 2, 29), ymd(2023, 3, 1)), span(23, 0, 1));
        assert_eq!(elapsed_span(ymd(2000, 2, 29), ymd(2024, 2, 29)), span(24, 0, 0));
    }

    #[test]
    fn inverted_pair_is_zero() {
        assert_eq!(elapsed_span(ymd(2024, 3, 1), ymd(2023, 12, 31)), ElapsedSpan::ZERO);
    }

    #[test]
    fn leap_day_anniversary_clamps_to_feb_28() {
        let birth = ymd(2000, 2, 29);
        assert_eq!(add_months(birth, 23 * 12), ymd(2023, 2, 28));
        assert_eq!(add_months(birth, 24 * 12), ymd(2024, 2, 29));
        assert_eq!(add_months(birth, 23 * 12 + 6), ymd(2023, 8, 29));
    }

    #[test]
    fn month_end_add_clamps() {
        assert_eq!(add_months(ymd(1990, 8, 31), 6), ymd(1991, 2, 28));
        assert_eq!(add_months(ymd(1991, 8, 31), 6), ymd(1992, 2, 29));
    }

    #[test]
    fn add_months_saturates_at_max() {
        assert_eq!(add_months(NaiveDate::MAX, 1), NaiveDate::MAX);
    }

    #[test]
    fn display_pluralises() {
        assert_eq!(span(29, 6, 1).to_string(), "29 years, 6 months, 1 day");
        assert_eq!(span(1, 1, 0).to_string(), "1 year, 1 month, 0 days");
    }
}
