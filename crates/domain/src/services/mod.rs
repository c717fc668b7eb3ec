//! Domain services for event registration.
//!
//! Services contain business logic that operates on domain models.

pub mod registration;
pub mod registration_store;
pub mod ticket_format;
pub mod ticket_id;
pub mod validation;

pub use registration::{RegistrationOutcome, RegistrationService};
pub use registration_store::{InMemoryRegistrationStore, RegistrationStore};
pub use ticket_format::DateTimeFormatter;
pub use ticket_id::TicketIdGenerator;
pub use validation::validate;
