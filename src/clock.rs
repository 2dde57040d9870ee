//! Wall clock in a fixed civil offset
//!
//! The engine never reads the clock; the generator asks a `Clock` for the
//! current moment and passes the date/time pair into the record.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Utc};

/// Default civil offset (UTC+07:00)
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 7;

/// Source of the current moment
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;

    /// Current date and time-of-day in the clock's offset
    fn date_time(&self) -> (NaiveDate, NaiveTime) {
        let now = self.now();
        (now.date_naive(), now.time())
    }
}

/// System clock pinned to one offset
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    /// Clock at `hours` east of UTC; `None` if out of range
    pub fn with_offset_hours(hours: i32) -> Option<Self> {
        FixedOffset::east_opt(hours * 3600).map(|offset| Self { offset })
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }
}

/// Clock frozen at one moment
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    moment: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(moment: DateTime<FixedOffset>) -> Self {
        Self { moment }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.moment
    }
}
