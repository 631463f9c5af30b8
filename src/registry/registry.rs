use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace, warn};

use super::counter::IdentityCounter;
use super::{events, Record, Staged};
use crate::error::RegistryError;
use crate::journal::{EventRecord, Journal};

/// Insertion-ordered, key-unique collection of records with a private
/// identity counter and mutation journal.
#[derive(Clone)]
pub struct Registry<R: Record> {
    records: Vec<R>,
    counter: IdentityCounter,
    journal: Journal,
}

impl<R: Record> Default for Registry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> fmt::Debug for Registry<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("kind", &R::KIND)
            .field("len", &self.records.len())
            .finish_non_exhaustive()
    }
}

impl<R: Record> Registry<R> {
    pub fn new() -> Self {
        Registry {
            records: Vec::new(),
            counter: IdentityCounter::default(),
            journal: Journal::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, key: &R::Key) -> bool {
        self.position(key).is_some()
    }

    /// Returns a copy of the record stored under `key`.
    pub fn get(&self, key: &R::Key) -> Option<R> {
        self.position(key).map(|index| self.records[index].clone())
    }

    /// Store a record under its caller-supplied key.
    ///
    /// Returns the new number of records.
    pub fn insert(&mut self, record: R) -> Result<usize, RegistryError> {
        self.ensure_vacant(record.key())?;
        let payload = Journal::encode(&(&record, self.counter.peek()))?;

        trace!(kind = R::KIND, key = %record.key(), "record added");
        self.records.push(record);
        self.journal.append(events::ADDED, payload);
        Ok(self.records.len())
    }

    /// Store a record built around the next auto-assigned identity.
    ///
    /// The counter only moves when the record is accepted, so a rejected
    /// build leaves the next identity unchanged.
    pub fn allocate<F>(&mut self, build: F) -> Result<u64, RegistryError>
    where
        F: FnOnce(u64) -> R,
    {
        let identity = self.counter.peek();
        let record = build(identity);
        self.ensure_vacant(record.key())?;
        let payload = Journal::encode(&(&record, identity + 1))?;

        trace!(kind = R::KIND, key = %record.key(), "record allocated");
        self.counter.advance();
        self.records.push(record);
        self.journal.append(events::ADDED, payload);
        Ok(identity)
    }

    /// Remove the record stored under `key`. Returns `false` if absent.
    pub fn remove(&mut self, key: &R::Key) -> bool {
        let Some(index) = self.position(key) else {
            debug!(kind = R::KIND, key = %key, "remove rejected: not found");
            return false;
        };
        let payload = match Journal::encode(key) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(kind = R::KIND, key = %key, error = %err, "remove skipped");
                return false;
            }
        };

        trace!(kind = R::KIND, key = %key, "record removed");
        self.records.remove(index);
        self.journal.append(events::REMOVED, payload);
        true
    }

    /// Copies of every record in insertion order.
    pub fn all(&self) -> Vec<R> {
        self.records.clone()
    }

    /// Copies of the records matching `predicate`, in insertion order.
    pub fn filter<P>(&self, predicate: P) -> Vec<R>
    where
        P: Fn(&R) -> bool,
    {
        self.records
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    /// Copies of the matching records, stably sorted by `compare` and cut
    /// to at most `limit` entries.
    pub fn select<P, C>(&self, predicate: P, mut compare: C, limit: Option<usize>) -> Vec<R>
    where
        P: Fn(&R) -> bool,
        C: FnMut(&R, &R) -> Ordering,
    {
        let mut selected = self.filter(predicate);
        selected.sort_by(|a, b| compare(a, b));
        if let Some(limit) = limit {
            selected.truncate(limit);
        }
        selected
    }

    pub fn count_where<P>(&self, predicate: P) -> usize
    where
        P: Fn(&R) -> bool,
    {
        self.records.iter().filter(|record| predicate(record)).count()
    }

    /// Fold over the records in insertion order without copying them out.
    pub fn fold<B, F>(&self, init: B, f: F) -> B
    where
        F: FnMut(B, &R) -> B,
    {
        self.records.iter().fold(init, f)
    }

    /// Drop every record and restart identities at 1.
    pub fn reset(&mut self) -> bool {
        if let Err(err) = self.journal.digest(events::RESET, &()) {
            warn!(kind = R::KIND, error = %err, "reset skipped");
            return false;
        }

        trace!(kind = R::KIND, dropped = self.records.len(), "registry reset");
        self.records.clear();
        self.counter.reset();
        true
    }

    /// A copy of the mutation journal.
    pub fn history(&self) -> Vec<EventRecord> {
        self.journal.events().to_vec()
    }

    /// Rebuild a registry by replaying a journal produced by [`history`](Self::history).
    pub fn rehydrate(history: Vec<EventRecord>) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.journal.load_from_history(history);

        let Registry {
            records,
            counter,
            journal,
        } = &mut registry;

        journal.rehydrate(|event| replay_event(records, counter, event))?;
        Ok(registry)
    }

    fn position(&self, key: &R::Key) -> Option<usize> {
        self.records.iter().position(|record| record.key() == key)
    }

    fn ensure_vacant(&self, key: &R::Key) -> Result<(), RegistryError> {
        if self.contains(key) {
            debug!(kind = R::KIND, key = %key, "add rejected: duplicate key");
            return Err(RegistryError::Duplicate {
                kind: R::KIND,
                key: key.to_string(),
            });
        }
        Ok(())
    }
}

impl<R: Staged> Registry<R> {
    /// Move the record under `key` forward to `to`.
    ///
    /// Returns `false` without mutating when the record is absent or already
    /// at or past `to`.
    pub fn advance(&mut self, key: &R::Key, to: R::Stage) -> bool {
        self.advance_with(key, to, |_| {})
    }

    /// Like [`advance`](Self::advance), also applying `edit` to the record in
    /// the same step.
    pub fn advance_with<F>(&mut self, key: &R::Key, to: R::Stage, edit: F) -> bool
    where
        F: FnOnce(&mut R),
    {
        let Some(index) = self.position(key) else {
            debug!(kind = R::KIND, key = %key, "advance rejected: not found");
            return false;
        };

        let current = self.records[index].stage();
        if current >= to {
            debug!(kind = R::KIND, key = %key, stage = ?current, "advance rejected: not forward");
            return false;
        }

        let mut advanced = self.records[index].clone();
        edit(&mut advanced);
        advanced.set_stage(to);
        let payload = match Journal::encode(&advanced) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(kind = R::KIND, key = %key, error = %err, "advance skipped");
                return false;
            }
        };

        trace!(kind = R::KIND, key = %key, from = ?current, to = ?to, "record advanced");
        self.records[index] = advanced;
        self.journal.append(events::ADVANCED, payload);
        true
    }

    pub fn stage_of(&self, key: &R::Key) -> Option<R::Stage> {
        self.position(key).map(|index| self.records[index].stage())
    }
}

fn replay_event<R: Record>(
    records: &mut Vec<R>,
    counter: &mut IdentityCounter,
    event: &EventRecord,
) -> Result<(), RegistryError> {
    match event.event_name.as_str() {
        events::ADDED => {
            let (record, next): (R, u64) = event.decode()?;
            if records.iter().any(|r| r.key() == record.key()) {
                return Err(RegistryError::Replay(format!(
                    "event {} adds duplicate {} `{}`",
                    event.sequence,
                    R::KIND,
                    record.key()
                )));
            }
            records.push(record);
            counter.restore(next);
        }
        events::ADVANCED => {
            let record: R = event.decode()?;
            let slot = records
                .iter_mut()
                .find(|r| r.key() == record.key())
                .ok_or_else(|| missing(event, record.key()))?;
            *slot = record;
        }
        events::REMOVED => {
            let key: R::Key = event.decode()?;
            let index = records
                .iter()
                .position(|r| r.key() == &key)
                .ok_or_else(|| missing(event, &key))?;
            records.remove(index);
        }
        events::RESET => {
            records.clear();
            counter.reset();
        }
        other => {
            return Err(RegistryError::Replay(format!(
                "event {} has unknown name `{}`",
                event.sequence, other
            )));
        }
    }
    Ok(())
}

fn missing<K: fmt::Display>(event: &EventRecord, key: &K) -> RegistryError {
    RegistryError::Replay(format!(
        "event {} ({}) targets unknown key `{}`",
        event.sequence, event.event_name, key
    ))
}
