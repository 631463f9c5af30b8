use std::fmt;

use serde::{Deserialize, Serialize};

use crate::impl_record;

/// A voter field that rules can mark as required.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequiredField {
    Id,
    Name,
    Age,
}

impl RequiredField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequiredField::Id => "id",
            RequiredField::Name => "name",
            RequiredField::Age => "age",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unvalidated voter details as submitted for registration.
///
/// Every field is optional so partial or empty submissions can be
/// represented and rejected by the validator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoterForm {
    pub id: Option<String>,
    pub name: Option<String>,
    pub age: Option<u32>,
}

impl VoterForm {
    pub fn new(id: impl Into<String>) -> Self {
        VoterForm {
            id: Some(id.into()),
            ..VoterForm::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Whether `field` is present; blank text counts as absent.
    pub fn has(&self, field: RequiredField) -> bool {
        match field {
            RequiredField::Id => has_text(self.id.as_deref()),
            RequiredField::Name => has_text(self.name.as_deref()),
            RequiredField::Age => self.age.is_some(),
        }
    }
}

fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoterStatus {
    Registered,
    Voted,
}

/// A registered voter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voter {
    pub id: String,
    pub name: Option<String>,
    pub age: Option<u32>,
    pub status: VoterStatus,
    pub(crate) choice: Option<String>,
}

impl_record!(Voter, "voter", id: String, status: VoterStatus);
