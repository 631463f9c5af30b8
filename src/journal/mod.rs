//! Journal - the append-only mutation log kept by every registry.
//!
//! Each accepted mutation is digested as an [`EventRecord`] whose payload is
//! bitcode-encoded. Replaying the records in sequence order rebuilds the
//! registry that produced them.

mod event_record;
#[allow(clippy::module_inception)]
mod journal;

pub use event_record::EventRecord;
pub use journal::Journal;
