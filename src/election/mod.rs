//! Election - voter registration, one vote per voter, and tallies.
//!
//! Vote casting reports through caller-supplied continuations rather than a
//! return code, so the caller chooses the shape of both outcomes.

mod candidate;
#[allow(clippy::module_inception)]
mod election;
mod tally;
mod validator;
mod voter;

pub use candidate::{Candidate, CandidateResult};
pub use election::{Election, ElectionRules, VoteReceipt, VoteRejection};
pub use tally::{count_votes_in_regions, tally_pure, Region, Tally};
pub use validator::{InvalidVoter, Validation, ValidatorRules, VoteValidator, DEFAULT_MIN_AGE};
pub use voter::{RequiredField, VoterForm, VoterStatus};
