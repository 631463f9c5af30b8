use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Delivery, DeliveryStats, DeliveryStatus};
use crate::config::Rules;
use crate::error::RegistryError;
use crate::journal::EventRecord;
use crate::registry::{percentage, Registry};
use crate::validation::require_text;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryRules {
    /// Trim stops before storing them; a whitespace-only stop counts as empty.
    pub trim_stops: bool,
}

impl Default for DeliveryRules {
    fn default() -> Self {
        DeliveryRules { trim_stops: true }
    }
}

impl DeliveryRules {
    pub fn with_trim_stops(mut self, trim_stops: bool) -> Self {
        self.trim_stops = trim_stops;
        self
    }
}

impl Rules for DeliveryRules {}

/// Delivery tracker for one dabbawala.
///
/// Delivery ids are assigned from 1 upwards and restart at 1 after
/// [`reset`](Self::reset). The delivery list and id counter are private:
///
/// ```compile_fail
/// use stateful_registry::Dabbawala;
///
/// let ram = Dabbawala::new("Ram", "Dadar");
/// let _ = ram.deliveries;
/// ```
///
/// ```compile_fail
/// use stateful_registry::Dabbawala;
///
/// let ram = Dabbawala::new("Ram", "Dadar");
/// let _ = ram.next_id;
/// ```
///
/// ```
/// use stateful_registry::Dabbawala;
///
/// let mut ram = Dabbawala::new("Ram", "Dadar");
/// assert_eq!(ram.add_delivery("Andheri", "Churchgate"), Ok(1));
/// assert_eq!(ram.add_delivery("Bandra", "CST"), Ok(2));
/// assert!(ram.complete_delivery(1));
/// assert_eq!(ram.stats().success_rate, "50.00%");
/// ```
#[derive(Debug)]
pub struct Dabbawala {
    name: String,
    area: String,
    rules: DeliveryRules,
    deliveries: Registry<Delivery>,
}

impl Dabbawala {
    pub fn new(name: impl Into<String>, area: impl Into<String>) -> Self {
        Self::with_rules(name, area, DeliveryRules::default())
    }

    pub fn with_rules(
        name: impl Into<String>,
        area: impl Into<String>,
        rules: DeliveryRules,
    ) -> Self {
        Dabbawala {
            name: name.into(),
            area: area.into(),
            rules,
            deliveries: Registry::new(),
        }
    }

    /// Rebuild a tracker from a journal returned by [`history`](Self::history).
    pub fn restore(
        name: impl Into<String>,
        area: impl Into<String>,
        rules: DeliveryRules,
        history: Vec<EventRecord>,
    ) -> Result<Self, RegistryError> {
        Ok(Dabbawala {
            name: name.into(),
            area: area.into(),
            rules,
            deliveries: Registry::rehydrate(history)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn area(&self) -> &str {
        &self.area
    }

    /// Record a new pending delivery and return its id.
    pub fn add_delivery(&mut self, from: &str, to: &str) -> Result<u64, RegistryError> {
        let from = require_text("delivery", "from", Some(from), self.rules.trim_stops)?;
        let to = require_text("delivery", "to", Some(to), self.rules.trim_stops)?;

        self.deliveries.allocate(|id| Delivery {
            id,
            from,
            to,
            status: DeliveryStatus::Pending,
        })
    }

    /// Mark a pending delivery completed.
    ///
    /// Returns `false` for an unknown id or an already completed delivery.
    pub fn complete_delivery(&mut self, id: u64) -> bool {
        let completed = self.deliveries.advance(&id, DeliveryStatus::Completed);
        if !completed {
            debug!(dabbawala = %self.name, id, "complete rejected");
        }
        completed
    }

    /// Pending deliveries in the order they were added.
    pub fn active_deliveries(&self) -> Vec<Delivery> {
        self.deliveries
            .filter(|delivery| delivery.status == DeliveryStatus::Pending)
    }

    pub fn stats(&self) -> DeliveryStats {
        let total = self.deliveries.len();
        let completed = self
            .deliveries
            .count_where(|delivery| delivery.status == DeliveryStatus::Completed);

        DeliveryStats {
            name: self.name.clone(),
            area: self.area.clone(),
            total,
            completed,
            pending: total - completed,
            success_rate: percentage(completed, total),
        }
    }

    /// Forget every delivery and restart ids at 1.
    pub fn reset(&mut self) -> bool {
        self.deliveries.reset()
    }

    pub fn history(&self) -> Vec<EventRecord> {
        self.deliveries.history()
    }
}
