use serde::{Deserialize, Serialize};

use crate::impl_record;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub party: String,
}

impl Candidate {
    pub fn new(id: impl Into<String>, name: impl Into<String>, party: impl Into<String>) -> Self {
        Candidate {
            id: id.into(),
            name: name.into(),
            party: party.into(),
        }
    }
}

impl_record!(Candidate, "candidate", id: String);

/// A candidate together with the votes cast for them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateResult {
    pub id: String,
    pub name: String,
    pub party: String,
    pub votes: u64,
}

impl CandidateResult {
    pub(crate) fn from_candidate(candidate: Candidate, votes: u64) -> Self {
        CandidateResult {
            id: candidate.id,
            name: candidate.name,
            party: candidate.party,
            votes,
        }
    }
}
