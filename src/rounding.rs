//! Half-year rounding: more than six months, or six months and at least one
//! day, past the last birthday counts as the next year of age.

use std::fmt;

use serde::Serialize;

use crate::age::ElapsedSpan;

/// Rounded actuarial age in whole years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct InsuranceAge(pub u32);

impl InsuranceAge {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for InsuranceAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which branch of the half-year rule applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingReason {
    /// Past six months and a day; one year added.
    RoundedUp,
    /// Six months or less; completed years kept.
    NotRounded,
}

impl RoundingReason {
    pub fn for_span(span: &ElapsedSpan) -> Self {
        if span.months > 6 || (span.months == 6 && span.days >= 1) {
            RoundingReason::RoundedUp
        } else {
            RoundingReason::NotRounded
        }
    }

    /// Age in whole years after this branch is applied to `span`.
    pub fn apply(self, span: &ElapsedSpan) -> InsuranceAge {
        match self {
            RoundingReason::RoundedUp => InsuranceAge(span.years + 1),
            RoundingReason::NotRounded => InsuranceAge(span.years),
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            RoundingReason::RoundedUp => "over six months, rounded up +1",
            RoundingReason::NotRounded => "six months or less, not rounded",
        }
    }
}

/// Applies the half-year rule to an elapsed span.
///
/// Exactly six months and zero days does not round up.
pub fn rounded_age(span: &ElapsedSpan) -> InsuranceAge {
    RoundingReason::for_span(span).apply(span)
}
