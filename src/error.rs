//! Error types for the insurance-age crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the insurance-age crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgeError {
    /// Returned when the birth date falls after the reference date.
    #[error("birth date {birth} is later than reference date {reference}")]
    InvalidDateOrder {
        /// The rejected birth date.
        birth: NaiveDate,
        /// The reference (policy-effective) date.
        reference: NaiveDate,
    },
}

/// Rejects a birth date that falls after the reference date.
///
/// Equal dates are accepted and yield age 0.
pub fn validate(birth: NaiveDate, reference: NaiveDate) -> Result<(), AgeError> {
    if birth > reference {
        return Err(AgeError::InvalidDateOrder { birth, reference });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn error_invalid_date_order() {
        let e = AgeError::InvalidDateOrder {
            birth: ymd(2024, 3, 1),
            reference: ymd(2023, 12, 31),
        };
        assert_eq!(
            e.to_string(),
            "birth date 2024-03-01 is later than reference date 2023-12-31"
        );
    }

    #[test]
    fn validate_accepts_equal_dates() {
        assert!(validate(ymd(1980, 7, 2), ymd(1980, 7, 2)).is_ok());
    }

    #[test]
    fn validate_rejects_birth_after_reference() {
        let result = validate(ymd(2024, 3, 1), ymd(2023, 12, 31));
        assert!(matches!(result, Err(AgeError::InvalidDateOrder { .. })));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<AgeError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<AgeError>();
    }
}
