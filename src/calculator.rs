//! Insurance-age computation: validation, elapsed span, rounding and the
//! next rounding date combined into one result.

use chrono::NaiveDate;
use serde::Serialize;

use crate::age::{ElapsedSpan, elapsed_span};
use crate::error::{AgeError, validate};
use crate::jump::next_rounding_event;
use crate::rounding::{InsuranceAge, RoundingReason};

/// Full result of one insurance-age calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsuranceAgeReport {
    pub birth: NaiveDate,
    pub reference: NaiveDate,
    pub elapsed: ElapsedSpan,
    pub insurance_age: InsuranceAge,
    pub reason: RoundingReason,
    pub next_rounding_date: NaiveDate,
    pub days_until_next_rounding: u32,
}

/// Computes the insurance age of someone born on `birth` as of `reference`.
///
/// Fails with [`AgeError::InvalidDateOrder`] before any arithmetic when
/// `birth` is after `reference`.
pub fn compute_insurance_age(
    birth: NaiveDate,
    reference: NaiveDate,
) -> Result<InsuranceAgeReport, AgeError> {
    if let Err(e) = validate(birth, reference) {
        tracing::warn!(%birth, %reference, "rejected: {e}");
        return Err(e);
    }

    let elapsed = elapsed_span(birth, reference);
    let reason = RoundingReason::for_span(&elapsed);
    let insurance_age = reason.apply(&elapsed);
    let next = next_rounding_event(birth, reference);

    tracing::debug!(
        %birth,
        %reference,
        elapsed = %elapsed,
        insurance_age = insurance_age.get(),
        next_rounding_date = %next.date,
        "computed insurance age"
    );

    Ok(InsuranceAgeReport {
        birth,
        reference,
        elapsed,
        insurance_age,
        reason,
        next_rounding_date: next.date,
        days_until_next_rounding: next.days_remaining,
    })
}
