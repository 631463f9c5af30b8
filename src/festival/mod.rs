//! Festival planner - a calendar keyed by caller-supplied festival names.

#[allow(clippy::module_inception)]
mod festival;
mod planner;

pub use festival::{Festival, FestivalType, DATE_FORMAT};
pub use planner::{FestivalPlanner, FestivalRules, DEFAULT_UPCOMING_LIMIT};
