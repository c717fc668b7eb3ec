//! Per-day sequential ticket identifiers.
//!
//! The counter lives in process memory only. It starts empty on every
//! restart and is not shared between instances, so codes can repeat across
//! restarts or replicas.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::TicketId;

/// Issues `TKT-YYYYMMDDNNN` codes, one sequence per UTC calendar day.
///
/// Create one per process and share it by `Arc`.
#[derive(Debug, Default)]
pub struct TicketIdGenerator {
    counters: Mutex<HashMap<NaiveDate, u32>>,
}

impl TicketIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the sequence for the UTC day of `now` and returns the new code.
    ///
    /// Codes are unique per day up to `u32::MAX`. Once a day's sequence is
    /// exhausted it stays at `u32::MAX` and every further call for that day
    /// repeats the last code.
    pub fn next(&self, now: DateTime<Utc>) -> TicketId {
        let day = now.date_naive();
        let sequence = {
            let mut counters = self.counters.lock().unwrap_or_else(PoisonError::into_inner);
            let count = counters.entry(day).or_insert(0);
            match count.checked_add(1) {
                Some(next) => *count = next,
                None => tracing::error!(%day, "Ticket sequence exhausted, repeating last id"),
            }
            *count
        };

        let id = TicketId::from_parts(day, sequence);
        tracing::debug!(ticket_id = %id, sequence, "Issued ticket id");
        id
    }

    /// Number of codes issued so far for the given day.
    pub fn issued_on(&self, day: NaiveDate) -> u32 {
        self.counters
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&day)
            .copied()
            .unwrap_or(0)
    }
}
