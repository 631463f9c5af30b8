use std::fmt;

use serde::Serialize;

use super::EventRecord;
use crate::error::RegistryError;

/// Append-only log of the mutations applied to one registry.
#[derive(Default, Clone)]
pub struct Journal {
    events: Vec<EventRecord>,
    replaying: bool,
}

impl fmt::Debug for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Journal")
            .field("len", &self.events.len())
            .field("replaying", &self.replaying)
            .finish()
    }
}

struct ReplayGuard<'a> {
    replaying: &'a mut bool,
}

impl<'a> ReplayGuard<'a> {
    fn new(replaying: &'a mut bool) -> Self {
        *replaying = true;
        ReplayGuard { replaying }
    }
}

impl Drop for ReplayGuard<'_> {
    fn drop(&mut self) {
        *self.replaying = false;
    }
}

impl Journal {
    pub fn new() -> Self {
        Journal::default()
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    /// Encode a payload ahead of a mutation so the mutation can be skipped
    /// when encoding fails.
    pub fn encode<T: Serialize>(payload: &T) -> Result<Vec<u8>, RegistryError> {
        bitcode::serialize(payload).map_err(|e| RegistryError::Codec(e.to_string()))
    }

    /// Append an already-encoded event. Ignored while replaying.
    pub fn append(&mut self, name: impl Into<String>, payload: Vec<u8>) {
        if self.replaying {
            return;
        }

        let sequence = self.events.len() as u64 + 1;
        self.events.push(EventRecord::new(name, payload, sequence));
    }

    /// Encode and append in one step.
    pub fn digest<T: Serialize>(
        &mut self,
        name: impl Into<String>,
        payload: &T,
    ) -> Result<(), RegistryError> {
        let bytes = Self::encode(payload)?;
        self.append(name, bytes);
        Ok(())
    }

    pub fn load_from_history(&mut self, history: Vec<EventRecord>) {
        self.events = history;
    }

    pub fn rehydrate<F, E>(&mut self, mut apply: F) -> Result<(), E>
    where
        F: FnMut(&EventRecord) -> Result<(), E>,
    {
        let _guard = ReplayGuard::new(&mut self.replaying);

        for event in &self.events {
            apply(event)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new() {
        let journal = Journal::new();
        assert!(journal.events().is_empty());
        assert!(!journal.replaying);
    }

    #[test]
    fn digest_assigns_sequence() {
        let mut journal = Journal::new();
        journal.digest("Added", &("Andheri", "Churchgate")).unwrap();
        journal.digest("Removed", &1u64).unwrap();

        assert_eq!(journal.events().len(), 2);
        assert_eq!(journal.events()[0].sequence, 1);
        assert_eq!(journal.events()[1].sequence, 2);
        let removed: u64 = journal.events()[1].decode().unwrap();
        assert_eq!(removed, 1);
    }

    #[test]
    fn rehydrate_visits_in_order_and_clears_flag() {
        let mut journal = Journal::new();
        journal.digest("first", &"a").unwrap();
        journal.digest("second", &"b").unwrap();

        let mut seen = Vec::new();
        let result = journal.rehydrate(|event| {
            seen.push(event.event_name.clone());
            Ok::<(), ()>(())
        });

        assert!(result.is_ok());
        assert_eq!(seen, vec!["first", "second"]);
        assert!(!journal.replaying);
    }

    #[test]
    fn rehydrate_stops_on_first_error() {
        let mut journal = Journal::new();
        journal.digest("first", &"a").unwrap();
        journal.digest("second", &"b").unwrap();

        let mut visited = 0;
        let result = journal.rehydrate(|_| {
            visited += 1;
            Err::<(), _>("boom")
        });

        assert_eq!(result, Err("boom"));
        assert_eq!(visited, 1);
        assert!(!journal.replaying);
    }

    #[test]
    fn append_ignored_while_replaying() {
        let mut journal = Journal::new();
        journal.replaying = true;
        journal.append("Added", vec![1]);
        assert!(journal.events().is_empty());
    }
}
