//! Display formatting for ticket dates and times.

use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::error::RegistrationError;
use crate::models::TicketDateTime;

/// Renders timestamps as `12 Nov 2025` / `2:30 PM` in a fixed offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeFormatter {
    offset: FixedOffset,
}

impl Default for DateTimeFormatter {
    fn default() -> Self {
        Self::utc()
    }
}

impl DateTimeFormatter {
    /// Largest display offset accepted, in minutes (UTC+14:00).
    pub const MAX_OFFSET_MINUTES: i32 = 14 * 60;

    pub fn utc() -> Self {
        Self { offset: Utc.fix() }
    }

    /// Formatter for a display offset east of UTC, in minutes.
    ///
    /// Returns `None` if the offset is outside ±14 hours.
    pub fn with_offset_minutes(minutes: i32) -> Option<Self> {
        if minutes.unsigned_abs() > Self::MAX_OFFSET_MINUTES.unsigned_abs() {
            return None;
        }
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(|offset| Self { offset })
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Parses an RFC 3339 timestamp and formats it.
    pub fn format(&self, iso: &str) -> Result<TicketDateTime, RegistrationError> {
        let parsed = DateTime::parse_from_rfc3339(iso)
            .map_err(|e| RegistrationError::InvalidTimestamp(format!("{:?}: {}", iso, e)))?;
        Ok(self.format_datetime(parsed.with_timezone(&Utc)))
    }

    pub fn format_datetime(&self, at: DateTime<Utc>) -> TicketDateTime {
        let local = at.with_timezone(&self.offset);
        TicketDateTime {
            date: local.format("%-d %b %Y").to_string(),
            time: local.format("%-I:%M %p").to_string(),
        }
    }
}
