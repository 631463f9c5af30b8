use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::festival::parse_date;
use super::{Festival, FestivalType};
use crate::config::Rules;
use crate::error::RegistryError;
use crate::journal::EventRecord;
use crate::registry::Registry;
use crate::validation::require_text;

pub const DEFAULT_UPCOMING_LIMIT: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FestivalRules {
    /// Categories `add_festival` accepts.
    pub allowed_types: Vec<FestivalType>,
    /// How many festivals `upcoming` returns when no limit is given.
    pub upcoming_limit: usize,
}

impl Default for FestivalRules {
    fn default() -> Self {
        FestivalRules {
            allowed_types: FestivalType::ALL.to_vec(),
            upcoming_limit: DEFAULT_UPCOMING_LIMIT,
        }
    }
}

impl FestivalRules {
    pub fn with_allowed_types(mut self, allowed_types: impl Into<Vec<FestivalType>>) -> Self {
        self.allowed_types = allowed_types.into();
        self
    }

    pub fn with_upcoming_limit(mut self, upcoming_limit: usize) -> Self {
        self.upcoming_limit = upcoming_limit;
        self
    }
}

impl Rules for FestivalRules {
    fn validate(&self) -> Result<(), RegistryError> {
        if self.allowed_types.is_empty() {
            return Err(RegistryError::Config(
                "festival rules allow no festival types".to_string(),
            ));
        }
        Ok(())
    }
}

/// Festival calendar keyed by festival name.
///
/// ```compile_fail
/// use stateful_registry::FestivalPlanner;
///
/// let planner = FestivalPlanner::new();
/// let _ = planner.festivals;
/// ```
#[derive(Debug, Default)]
pub struct FestivalPlanner {
    rules: FestivalRules,
    festivals: Registry<Festival>,
}

impl FestivalPlanner {
    pub fn new() -> Self {
        Self::with_rules(FestivalRules::default())
    }

    pub fn with_rules(rules: FestivalRules) -> Self {
        FestivalPlanner {
            rules,
            festivals: Registry::new(),
        }
    }

    /// Rebuild a planner from a journal returned by [`history`](Self::history).
    pub fn restore(rules: FestivalRules, history: Vec<EventRecord>) -> Result<Self, RegistryError> {
        Ok(FestivalPlanner {
            rules,
            festivals: Registry::rehydrate(history)?,
        })
    }

    /// Add a festival and return the new festival count.
    ///
    /// `date` must be `YYYY-MM-DD` and `kind` one of the allowed types.
    pub fn add_festival(
        &mut self,
        name: &str,
        date: &str,
        kind: &str,
    ) -> Result<usize, RegistryError> {
        let name = require_text("festival", "name", Some(name), true)?;
        let date = parse_date(date)?;
        let kind: FestivalType = kind.parse()?;
        if !self.rules.allowed_types.contains(&kind) {
            debug!(festival = %name, kind = %kind, "add rejected: type not allowed");
            return Err(RegistryError::InvalidValue {
                kind: "festival",
                field: "type",
                value: kind.to_string(),
            });
        }

        self.festivals.insert(Festival { name, date, kind })
    }

    /// Returns `false` when no festival has that name.
    pub fn remove_festival(&mut self, name: &str) -> bool {
        self.festivals.remove(&name.trim().to_string())
    }

    /// Every festival in the order it was added.
    pub fn all(&self) -> Vec<Festival> {
        self.festivals.all()
    }

    pub fn by_type(&self, kind: FestivalType) -> Vec<Festival> {
        self.festivals.filter(|festival| festival.kind == kind)
    }

    /// Up to `limit` festivals dated strictly after `after`, soonest first.
    ///
    /// Without a limit the configured `upcoming_limit` applies.
    pub fn upcoming(&self, after: NaiveDate, limit: Option<usize>) -> Vec<Festival> {
        let limit = limit.unwrap_or(self.rules.upcoming_limit);
        self.festivals.select(
            |festival| festival.date > after,
            |a, b| a.date.cmp(&b.date),
            Some(limit),
        )
    }

    pub fn count(&self) -> usize {
        self.festivals.len()
    }

    pub fn history(&self) -> Vec<EventRecord> {
        self.festivals.history()
    }
}
