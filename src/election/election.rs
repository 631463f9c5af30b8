use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::candidate::{Candidate, CandidateResult};
use super::tally::{tally_pure, Tally};
use super::validator::{ValidatorRules, VoteValidator};
use super::voter::{Voter, VoterForm, VoterStatus};
use crate::config::Rules;
use crate::error::RegistryError;
use crate::journal::EventRecord;
use crate::registry::Registry;
use crate::validation::require_text;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElectionRules {
    pub voter: ValidatorRules,
}

impl ElectionRules {
    pub fn with_voter_rules(mut self, voter: ValidatorRules) -> Self {
        self.voter = voter;
        self
    }
}

impl Rules for ElectionRules {
    fn validate(&self) -> Result<(), RegistryError> {
        self.voter.validate()
    }
}

/// Why a vote was not counted. Passed to the error continuation of
/// [`Election::cast_vote`].
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteRejection {
    #[error("not_registered")]
    NotRegistered,
    #[error("invalid_candidate")]
    InvalidCandidate,
    #[error("already_voted")]
    AlreadyVoted,
    /// The vote passed every check but could not be journaled.
    #[error("not_recorded")]
    NotRecorded,
}

impl VoteRejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteRejection::NotRegistered => "not_registered",
            VoteRejection::InvalidCandidate => "invalid_candidate",
            VoteRejection::AlreadyVoted => "already_voted",
            VoteRejection::NotRecorded => "not_recorded",
        }
    }
}

/// Passed to the success continuation of [`Election::cast_vote`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteReceipt {
    pub voter_id: String,
    pub candidate_id: String,
}

/// A single-round election over a fixed candidate list.
///
/// Voters move `registered -> voted` and cannot vote twice. Voter and
/// candidate lists are private:
///
/// ```compile_fail
/// use stateful_registry::{Candidate, Election};
///
/// let election = Election::new([Candidate::new("C1", "Sarpanch Ram", "Janata")]).unwrap();
/// let _ = election.voters;
/// ```
#[derive(Debug)]
pub struct Election {
    validator: VoteValidator,
    candidates: Registry<Candidate>,
    voters: Registry<Voter>,
}

impl Election {
    pub fn new<I>(candidates: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = Candidate>,
    {
        Self::with_rules(candidates, ElectionRules::default())
    }

    /// Fails on a candidate with a blank id or name, or a repeated id.
    pub fn with_rules<I>(candidates: I, rules: ElectionRules) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = Candidate>,
    {
        let mut registry = Registry::new();
        for candidate in candidates {
            let id = require_text("candidate", "id", Some(&candidate.id), true)?;
            let name = require_text("candidate", "name", Some(&candidate.name), true)?;
            registry.insert(Candidate { id, name, ..candidate })?;
        }

        Ok(Election {
            validator: VoteValidator::new(rules.voter),
            candidates: registry,
            voters: Registry::new(),
        })
    }

    /// Rebuild an election from the candidate list it was created with and
    /// a voter journal returned by [`history`](Self::history).
    ///
    /// Fails if a replayed vote names a candidate missing from `candidates`.
    pub fn restore<I>(
        candidates: I,
        rules: ElectionRules,
        history: Vec<EventRecord>,
    ) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = Candidate>,
    {
        let mut election = Self::with_rules(candidates, rules)?;
        election.voters = Registry::rehydrate(history)?;

        let stray = election.voters.filter(|voter| {
            voter
                .choice
                .as_ref()
                .is_some_and(|choice| !election.candidates.contains(choice))
        });
        if let Some(voter) = stray.first() {
            return Err(RegistryError::Replay(format!(
                "voter `{}` voted for an unknown candidate",
                voter.id
            )));
        }
        Ok(election)
    }

    /// A copy of the voter journal: registrations and votes.
    pub fn history(&self) -> Vec<EventRecord> {
        self.voters.history()
    }

    pub fn candidates(&self) -> Vec<Candidate> {
        self.candidates.all()
    }

    /// Validate and register a voter.
    pub fn register_voter(&mut self, form: &VoterForm) -> Result<(), RegistryError> {
        if let Err(reason) = self.validator.validate(form).into_result() {
            debug!(voter = ?form.id, reason = %reason, "registration rejected");
            return Err(reason.into());
        }
        let id = require_text("voter", "id", form.id.as_deref(), true)?;

        self.voters.insert(Voter {
            id,
            name: form.name.clone(),
            age: form.age,
            status: VoterStatus::Registered,
            choice: None,
        })?;
        Ok(())
    }

    pub fn is_registered(&self, voter_id: &str) -> bool {
        self.voters.contains(&voter_id.trim().to_string())
    }

    /// `None` for a voter who never registered.
    pub fn voter_status(&self, voter_id: &str) -> Option<VoterStatus> {
        self.voters.stage_of(&voter_id.trim().to_string())
    }

    pub fn has_voted(&self, voter_id: &str) -> bool {
        self.voter_status(voter_id) == Some(VoterStatus::Voted)
    }

    /// Cast a vote and report the outcome through exactly one continuation.
    ///
    /// `on_success` receives a [`VoteReceipt`]; `on_error` receives the
    /// [`VoteRejection`]. Whatever the invoked continuation returns is
    /// returned from here.
    pub fn cast_vote<T, S, E>(
        &mut self,
        voter_id: &str,
        candidate_id: &str,
        on_success: S,
        on_error: E,
    ) -> T
    where
        S: FnOnce(VoteReceipt) -> T,
        E: FnOnce(VoteRejection) -> T,
    {
        match self.record_vote(voter_id, candidate_id) {
            Ok(receipt) => on_success(receipt),
            Err(rejection) => {
                debug!(
                    voter = voter_id,
                    candidate = candidate_id,
                    reason = %rejection,
                    "vote rejected"
                );
                on_error(rejection)
            }
        }
    }

    fn record_vote(
        &mut self,
        voter_id: &str,
        candidate_id: &str,
    ) -> Result<VoteReceipt, VoteRejection> {
        let voter_key = voter_id.trim().to_string();
        let choice = candidate_id.trim().to_string();
        let stage = self
            .voters
            .stage_of(&voter_key)
            .ok_or(VoteRejection::NotRegistered)?;
        if !self.candidates.contains(&choice) {
            return Err(VoteRejection::InvalidCandidate);
        }
        if stage == VoterStatus::Voted {
            return Err(VoteRejection::AlreadyVoted);
        }

        let recorded = self
            .voters
            .advance_with(&voter_key, VoterStatus::Voted, |voter| {
                voter.choice = Some(choice.clone());
            });
        if !recorded {
            warn!(
                voter = voter_id,
                candidate = candidate_id,
                "vote passed checks but was not recorded"
            );
            return Err(VoteRejection::NotRecorded);
        }

        trace!(voter = voter_id, candidate = candidate_id, "vote recorded");
        Ok(VoteReceipt {
            voter_id: voter_key,
            candidate_id: choice,
        })
    }

    /// Votes per candidate id, built by folding each cast vote through
    /// [`tally_pure`].
    pub fn tally(&self) -> Tally {
        self.voters.fold(Tally::new(), |tally, voter| {
            match (voter.status, voter.choice.as_deref()) {
                (VoterStatus::Voted, Some(choice)) => tally_pure(&tally, choice),
                _ => tally,
            }
        })
    }

    pub fn votes_cast(&self) -> usize {
        self.voters
            .count_where(|voter| voter.status == VoterStatus::Voted)
    }

    /// Every candidate with their votes, most votes first. Ties keep the
    /// candidate order given at construction.
    pub fn results(&self) -> Vec<CandidateResult> {
        self.results_by(|a, b| b.votes.cmp(&a.votes))
    }

    /// Every candidate with their votes, ordered by `compare`.
    pub fn results_by<C>(&self, mut compare: C) -> Vec<CandidateResult>
    where
        C: FnMut(&CandidateResult, &CandidateResult) -> Ordering,
    {
        let tally = self.tally();
        let mut results: Vec<CandidateResult> = self
            .candidates
            .all()
            .into_iter()
            .map(|candidate| {
                let votes = tally.get(&candidate.id).copied().unwrap_or(0);
                CandidateResult::from_candidate(candidate, votes)
            })
            .collect();
        results.sort_by(|a, b| compare(a, b));
        results
    }

    /// The candidate with the most votes, or `None` before any vote is cast.
    pub fn winner(&self) -> Option<CandidateResult> {
        if self.votes_cast() == 0 {
            return None;
        }
        self.results().into_iter().next()
    }
}
