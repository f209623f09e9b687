use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

/// Supplies "today" for callers that default the reference date.
///
/// The calculation itself always takes an explicit reference date; which
/// day counts as today depends on the implementation's timezone.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// System clock read in a fixed IANA timezone.
#[derive(Debug, Clone, Copy)]
pub struct ZoneClock {
    tz: Tz,
}

impl ZoneClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }
}

impl Default for ZoneClock {
    fn default() -> Self {
        Self::new(chrono_tz::Asia::Taipei)
    }
}

impl Clock for ZoneClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.tz).date_naive()
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}

/// Clock that yields the reference date: pinned to `reference` when given,
/// otherwise today in `tz`.
pub fn reference_clock(reference: Option<NaiveDate>, tz: Tz) -> Box<dyn Clock> {
    match reference {
        Some(date) => Box::new(FixedClock::new(date)),
        None => Box::new(ZoneClock::new(tz)),
    }
}
