//! Exchange-local timestamp parsing.
//!
//! The exchange reports times as `YYYY-MM-DD HH:MM:SS` in its own local zone
//! without stating the offset. The correct offset is not known here, so the
//! default leaves the wall-clock value uncorrected (read as if it were UTC).
//! Callers that know the offset configure it through [`ExchangeTimezone::new`].

use crate::error::DomainParseErrorKind;
use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};

const LOCAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Offset applied to exchange-local timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeTimezone {
    offset: FixedOffset,
}

impl ExchangeTimezone {
    /// Interpret exchange-local times in the given offset.
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// No correction: the exchange's wall-clock time is taken as UTC.
    pub fn uncorrected() -> Self {
        Self { offset: Utc.fix() }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Parse an exchange-local timestamp string into UTC.
    pub fn parse(&self, raw: &str) -> Result<DateTime<Utc>, DomainParseErrorKind> {
        let invalid = || DomainParseErrorKind::InvalidTimestamp(raw.to_string());
        let naive = NaiveDateTime::parse_from_str(raw.trim(), LOCAL_FORMAT).map_err(|_| invalid())?;
        self.offset
            .from_local_datetime(&naive)
            .single()
            .map(|local| local.with_timezone(&Utc))
            .ok_or_else(invalid)
    }
}

impl Default for ExchangeTimezone {
    fn default() -> Self {
        Self::uncorrected()
    }
}

/// Parse Unix seconds as reported by `servertimestamp`.
pub fn from_unix_seconds(seconds: i64) -> Result<DateTime<Utc>, DomainParseErrorKind> {
    DateTime::<Utc>::from_timestamp(seconds, 0)
        .ok_or_else(|| DomainParseErrorKind::InvalidTimestamp(seconds.to_string()))
}
