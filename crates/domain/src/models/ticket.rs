//! Ticket domain models.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Ticket code in `TKT-YYYYMMDDNNN` format.
///
/// The sequence part is zero-padded to three digits and widens past 999.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    pub const PREFIX: &'static str = "TKT-";

    /// Renders a ticket code for the given day and sequence number.
    pub fn from_parts(day: NaiveDate, sequence: u32) -> Self {
        Self(format!(
            "{}{}{:03}",
            Self::PREFIX,
            day.format("%Y%m%d"),
            sequence
        ))
    }

    /// Parses a ticket code, returning `None` if it is not well formed.
    pub fn parse(value: &str) -> Option<Self> {
        let rest = value.strip_prefix(Self::PREFIX)?;
        if rest.len() < 11 || !rest.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let (day, sequence) = rest.split_at(8);
        NaiveDate::parse_from_str(day, "%Y%m%d").ok()?;
        if sequence.parse::<u32>().ok()? == 0 {
            return None;
        }
        Some(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `YYYYMMDD` day-key part.
    pub fn day_key(&self) -> &str {
        &self.0[Self::PREFIX.len()..Self::PREFIX.len() + 8]
    }

    /// The per-day sequence number.
    pub fn sequence(&self) -> u32 {
        self.0[Self::PREFIX.len() + 8..].parse().unwrap_or_default()
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TicketId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Display strings printed on a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketDateTime {
    /// e.g. `12 Nov 2025`
    pub date: String,
    /// e.g. `2:30 PM`
    pub time: String,
}

/// Confirmation returned to the registrant. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: TicketId,
    pub name: String,
    pub age: i32,
    pub date: String,
    pub time: String,
    /// RFC 3339 UTC timestamp with millisecond precision.
    pub registered_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_from_parts_pads_sequence() {
        assert_eq!(
            TicketId::from_parts(day(2025, 11, 12), 1).as_str(),
            "TKT-20251112001"
        );
        assert_eq!(
            TicketId::from_parts(day(2025, 1, 5), 42).as_str(),
            "TKT-20250105042"
        );
    }

    #[test]
    fn test_from_parts_widens_past_999() {
        let id = TicketId::from_parts(day(2025, 11, 12), 1000);
        assert_eq!(id.as_str(), "TKT-202511121000");
        assert_eq!(id.sequence(), 1000);
        assert_eq!(id.day_key(), "20251112");
    }

    #[test]
    fn test_parse_valid() {
        let id = TicketId::parse("TKT-20251112007").unwrap();
        assert_eq!(id.day_key(), "20251112");
        assert_eq!(id.sequence(), 7);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(TicketId::parse("TKT-2025111201").is_none());
        assert!(TicketId::parse("TIX-20251112001").is_none());
        assert!(TicketId::parse("TKT-20251332001").is_none());
        assert!(TicketId::parse("TKT-20251112000").is_none());
        assert!(TicketId::parse("TKT-2025111200a").is_none());
    }

    #[test]
    fn test_ticket_serializes_camel_case() {
        let ticket = Ticket {
            id: TicketId::from_parts(day(2025, 11, 12), 1),
            name: "Asha".to_string(),
            age: 29,
            date: "12 Nov 2025".to_string(),
            time: "2:30 PM".to_string(),
            registered_at: "2025-11-12T14:30:00.000Z".to_string(),
        };
        let json = serde_json::to_value(&ticket).unwrap();
        assert_eq!(json["id"], "TKT-20251112001");
        assert_eq!(json["registeredAt"], "2025-11-12T14:30:00.000Z");
        assert_eq!(json["age"], 29);
    }
}
