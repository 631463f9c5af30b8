#![allow(dead_code)]

use chrono::NaiveDate;
use stateful_registry::{Candidate, Dabbawala, Election, FestivalPlanner, VoterForm};

pub fn ram() -> Dabbawala {
    Dabbawala::new("Ram", "Dadar")
}

pub fn panchayat_candidates() -> Vec<Candidate> {
    vec![
        Candidate::new("C1", "Sarpanch Ram", "Janata"),
        Candidate::new("C2", "Pradhan Sita", "Lok"),
        Candidate::new("C3", "Mukhiya Gita", "Samaj"),
    ]
}

pub fn panchayat() -> Election {
    Election::new(panchayat_candidates()).expect("fixture candidates are valid")
}

pub fn adult(id: &str) -> VoterForm {
    VoterForm::new(id).with_name(id).with_age(25)
}

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, stateful_registry::DATE_FORMAT).expect("fixture date")
}

/// Planner preloaded with four festivals across 2025.
pub fn calendar_2025() -> FestivalPlanner {
    let mut planner = FestivalPlanner::new();
    planner.add_festival("Diwali", "2025-10-20", "religious").unwrap();
    planner.add_festival("Republic Day", "2025-01-26", "national").unwrap();
    planner.add_festival("Holi", "2025-03-14", "cultural").unwrap();
    planner.add_festival("Independence Day", "2025-08-15", "national").unwrap();
    planner
}
