//! Registration orchestration: validate, issue a ticket, persist.

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};

use super::registration_store::RegistrationStore;
use super::ticket_format::DateTimeFormatter;
use super::ticket_id::TicketIdGenerator;
use super::validation::validate;
use crate::error::RegistrationError;
use crate::models::{RegistrationInput, RegistrationRecord, RegistrationSummary, Ticket};

/// Result of a successful registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationOutcome {
    pub record: RegistrationRecord,
    pub ticket: Ticket,
}

/// Coordinates validation, ticket issuing and persistence.
#[derive(Clone)]
pub struct RegistrationService {
    store: Arc<dyn RegistrationStore>,
    ticket_ids: Arc<TicketIdGenerator>,
    formatter: DateTimeFormatter,
}

impl RegistrationService {
    pub fn new(
        store: Arc<dyn RegistrationStore>,
        ticket_ids: Arc<TicketIdGenerator>,
        formatter: DateTimeFormatter,
    ) -> Self {
        Self {
            store,
            ticket_ids,
            formatter,
        }
    }

    pub fn ticket_ids(&self) -> &TicketIdGenerator {
        &self.ticket_ids
    }

    /// Registers a submission at the current time.
    pub async fn register(
        &self,
        input: &RegistrationInput,
    ) -> Result<RegistrationOutcome, RegistrationError> {
        self.register_at(input, Utc::now()).await
    }

    /// Registers a submission as of `now`.
    ///
    /// Invalid input leaves the ticket counter and the store untouched. A
    /// failed insert discards the already issued ticket id, leaving a gap in
    /// the day's sequence.
    pub async fn register_at(
        &self,
        input: &RegistrationInput,
        now: DateTime<Utc>,
    ) -> Result<RegistrationOutcome, RegistrationError> {
        let registration = validate(input)?;

        let ticket_id = self.ticket_ids.next(now);
        let registered_at = now.to_rfc3339_opts(SecondsFormat::Millis, true);
        let display = self.formatter.format(&registered_at)?;

        let record = self.store.insert(&registration).await.map_err(|err| {
            tracing::error!(
                ticket_id = %ticket_id,
                error = %err,
                "Failed to persist registration, ticket id discarded"
            );
            RegistrationError::from(err)
        })?;

        tracing::info!(
            ticket_id = %ticket_id,
            registration_id = record.id,
            "Registration stored"
        );

        let ticket = Ticket {
            id: ticket_id,
            name: registration.name,
            age: registration.age,
            date: display.date,
            time: display.time,
            registered_at,
        };

        Ok(RegistrationOutcome { record, ticket })
    }

    /// All registrations, newest first.
    pub async fn list_all(&self) -> Result<Vec<RegistrationRecord>, RegistrationError> {
        self.store.list_newest_first().await.map_err(|err| {
            tracing::error!(error = %err, "Failed to list registrations");
            RegistrationError::from(err)
        })
    }

    /// Dashboard figures over all registrations.
    pub async fn summary(&self) -> Result<RegistrationSummary, RegistrationError> {
        let records = self.list_all().await?;
        Ok(RegistrationSummary::from_records(&records))
    }

    /// Health probe against the datastore.
    pub async fn check_store(&self) -> Result<(), RegistrationError> {
        self.store.ping().await.map_err(RegistrationError::from)
    }
}
