//! Encapsulated in-memory registries.
//!
//! A [`Registry`] keeps an insertion-ordered collection of records behind a
//! handle that only exposes named operations: validated adds, forward-only
//! lifecycle moves, removal, copy-out queries and reset. Every accepted
//! mutation is journaled and a journal can be replayed into an equivalent
//! registry.
//!
//! Three front-ends are built on it:
//!
//! - [`Dabbawala`] tracks deliveries with auto-assigned ids.
//! - [`FestivalPlanner`] keeps festivals keyed by name.
//! - [`Election`] registers voters and counts one vote each.

mod config;
mod dabbawala;
mod election;
mod error;
mod festival;
mod journal;
mod registry;
mod validation;

pub use config::Rules;
pub use dabbawala::{Dabbawala, Delivery, DeliveryRules, DeliveryStats, DeliveryStatus};
pub use election::{
    count_votes_in_regions, tally_pure, Candidate, CandidateResult, Election, ElectionRules,
    InvalidVoter, Region, RequiredField, Tally, Validation, ValidatorRules, VoteReceipt,
    VoteRejection, VoteValidator, VoterForm, VoterStatus, DEFAULT_MIN_AGE,
};
pub use error::RegistryError;
pub use festival::{
    Festival, FestivalPlanner, FestivalRules, FestivalType, DATE_FORMAT, DEFAULT_UPCOMING_LIMIT,
};
pub use journal::EventRecord;
pub use registry::{events, percentage, Record, Registry, Staged};
