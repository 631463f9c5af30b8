use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::impl_record;

/// Date format accepted and stored for festivals.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FestivalType {
    Religious,
    National,
    Cultural,
}

impl FestivalType {
    pub const ALL: [FestivalType; 3] = [
        FestivalType::Religious,
        FestivalType::National,
        FestivalType::Cultural,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FestivalType::Religious => "religious",
            FestivalType::National => "national",
            FestivalType::Cultural => "cultural",
        }
    }
}

impl fmt::Display for FestivalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FestivalType {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FestivalType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| RegistryError::InvalidValue {
                kind: "festival",
                field: "type",
                value: s.to_string(),
            })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Festival {
    pub name: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: FestivalType,
}

impl_record!(Festival, "festival", name: String);

pub(crate) fn parse_date(value: &str) -> Result<NaiveDate, RegistryError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| RegistryError::InvalidValue {
        kind: "festival",
        field: "date",
        value: value.to_string(),
    })
}
