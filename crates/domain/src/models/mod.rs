//! Domain models for event registration.

pub mod registration;
pub mod ticket;

pub use registration::{
    AgeValue, ListRegistrationsResponse, NewRegistration, RegisterResponse, RegistrationInput,
    RegistrationRecord, RegistrationSummary, RegistrationSummaryResponse,
};
pub use ticket::{Ticket, TicketDateTime, TicketId};
