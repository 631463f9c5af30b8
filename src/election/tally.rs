use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Votes per candidate id.
pub type Tally = BTreeMap<String, u64>;

/// Returns a new tally with one more vote for `candidate_id`; `tally` is
/// left untouched.
pub fn tally_pure(tally: &Tally, candidate_id: &str) -> Tally {
    let mut next = tally.clone();
    *next.entry(candidate_id.to_string()).or_insert(0) += 1;
    next
}

/// A counting area with its own votes and any number of nested areas.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    #[serde(default)]
    pub votes: u64,
    #[serde(default, rename = "subRegions", alias = "sub_regions")]
    pub sub_regions: Vec<Region>,
}

impl Region {
    pub fn new(name: impl Into<String>, votes: u64) -> Self {
        Region {
            name: name.into(),
            votes,
            sub_regions: Vec::new(),
        }
    }

    pub fn with_sub_region(mut self, region: Region) -> Self {
        self.sub_regions.push(region);
        self
    }

    /// Votes in this region and every region nested below it.
    pub fn total_votes(&self) -> u64 {
        self.votes
            + self
                .sub_regions
                .iter()
                .map(Region::total_votes)
                .sum::<u64>()
    }
}

/// Total votes across `region` and its sub-regions; `None` counts as zero.
pub fn count_votes_in_regions(region: Option<&Region>) -> u64 {
    region.map_or(0, Region::total_votes)
}
