//! Prediction of the next date on which the insurance age ticks up.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::age::{add_months, elapsed_span};

/// The next date the insurance age increments, and how far away it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NextRoundingEvent {
    pub date: NaiveDate,
    pub days_remaining: u32,
}

/// First date on which `completed_years` years, six months and one day have
/// elapsed since `birth`.
///
/// Months are added to `birth` itself rather than to a clamped anniversary,
/// so a Feb 29 birth jumps on the same day [`elapsed_span`] reports
/// six months and one day.
pub fn rounding_date(birth: NaiveDate, completed_years: u32) -> NaiveDate {
    let half_year = add_months(birth, completed_years * 12 + 6);
    // Saturates like add_months.
    half_year
        .checked_add_days(Days::new(1))
        .unwrap_or(NaiveDate::MAX)
}

/// Finds the next rounding date as seen from `reference`.
///
/// Requires `birth <= reference`. A reference that is itself a rounding date
/// has already rounded, so the following year's date is returned.
pub fn next_rounding_event(birth: NaiveDate, reference: NaiveDate) -> NextRoundingEvent {
    // Anchor on the most recent anniversary on or before `reference`.
    let years = elapsed_span(birth, reference).years;

    let mut date = rounding_date(birth, years);
    if reference >= date {
        date = rounding_date(birth, years + 1);
    }

    let days_remaining = (date - reference).num_days().max(0) as u32;
    tracing::trace!(%birth, %reference, years, %date, days_remaining, "next rounding date");

    NextRoundingEvent {
        date,
        days_remaining,
    }
}
