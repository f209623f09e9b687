//! # insurance-age
//!
//! Taiwan-style insurance age: the elapsed age between a birth date and a
//! policy-effective date, rounded up once more than six months (six months
//! and a day) have passed since the last birthday, plus the next date on
//! which that rounded age increments.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use insurance_age::compute_insurance_age;
//!
//! let birth = NaiveDate::from_ymd_opt(1995, 1, 1).unwrap();
//! let reference = NaiveDate::from_ymd_opt(2024, 7, 2).unwrap();
//! let report = compute_insurance_age(birth, reference).unwrap();
//!
//! assert_eq!(report.insurance_age.get(), 30);
//! assert_eq!(report.next_rounding_date, NaiveDate::from_ymd_opt(2025, 7, 2).unwrap());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `age` | Elapsed years/months/days between two dates |
//! | `rounding` | Half-year rounding rule |
//! | `jump` | Next rounding date search |
//! | `calculator` | Validated end-to-end computation |
//! | `clock` | "Today" in a given timezone |
//! | `config` | TOML configuration |
//! | `error` | Error types and validation |

pub mod age;
pub mod calculator;
pub mod clock;
pub mod config;
pub mod error;
pub mod jump;
pub mod rounding;

pub use age::{ElapsedSpan, elapsed_span};
pub use calculator::{InsuranceAgeReport, compute_insurance_age};
pub use clock::{Clock, FixedClock, ZoneClock, reference_clock};
pub use config::{Config, OutputFormat};
pub use error::{AgeError, validate};
pub use jump::{NextRoundingEvent, next_rounding_event, rounding_date};
pub use rounding::{InsuranceAge, RoundingReason, rounded_age};
