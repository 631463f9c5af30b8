use serde::{Deserialize, Serialize};

use super::voter::{RequiredField, VoterForm};
use crate::config::Rules;
use crate::error::RegistryError;

pub const DEFAULT_MIN_AGE: u32 = 18;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorRules {
    pub min_age: u32,
    /// Checked in order; the first missing field is reported.
    pub required_fields: Vec<RequiredField>,
}

impl Default for ValidatorRules {
    fn default() -> Self {
        ValidatorRules {
            min_age: DEFAULT_MIN_AGE,
            required_fields: vec![RequiredField::Id, RequiredField::Age],
        }
    }
}

impl ValidatorRules {
    pub fn with_min_age(mut self, min_age: u32) -> Self {
        self.min_age = min_age;
        self
    }

    pub fn with_required_fields(mut self, fields: impl Into<Vec<RequiredField>>) -> Self {
        self.required_fields = fields.into();
        self
    }
}

impl Rules for ValidatorRules {}

/// Why a voter form was refused.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidVoter {
    #[error("missing required field `{0}`")]
    MissingField(RequiredField),

    #[error("age {age} is below the minimum of {min_age}")]
    Underage { age: u32, min_age: u32 },
}

impl From<InvalidVoter> for RegistryError {
    fn from(err: InvalidVoter) -> Self {
        match err {
            InvalidVoter::MissingField(field) => RegistryError::MissingField {
                kind: "voter",
                field: field.as_str(),
            },
            InvalidVoter::Underage { age, min_age } => RegistryError::Underage { age, min_age },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid(InvalidVoter),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    pub fn reason(&self) -> Option<&InvalidVoter> {
        match self {
            Validation::Valid => None,
            Validation::Invalid(reason) => Some(reason),
        }
    }

    pub fn into_result(self) -> Result<(), InvalidVoter> {
        match self {
            Validation::Valid => Ok(()),
            Validation::Invalid(reason) => Err(reason),
        }
    }
}

/// Voter eligibility check built once from rules and applied to many forms.
///
/// ```
/// use stateful_registry::{RequiredField, ValidatorRules, VoteValidator, VoterForm};
///
/// let validate = VoteValidator::new(
///     ValidatorRules::default()
///         .with_required_fields([RequiredField::Id, RequiredField::Name, RequiredField::Age]),
/// );
/// assert!(validate.validate(&VoterForm::new("V1").with_name("Mohan").with_age(25)).is_valid());
/// assert!(validate.validate(&VoterForm::new("V1").with_name("NoAge")).reason().is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct VoteValidator {
    rules: ValidatorRules,
}

impl VoteValidator {
    pub fn new(rules: ValidatorRules) -> Self {
        VoteValidator { rules }
    }

    pub fn rules(&self) -> &ValidatorRules {
        &self.rules
    }

    /// Required fields are checked first, then the minimum age.
    ///
    /// A form without an age fails the age check whenever a minimum age is
    /// configured, even if `age` is not listed as required.
    pub fn validate(&self, form: &VoterForm) -> Validation {
        if let Some(field) = self
            .rules
            .required_fields
            .iter()
            .copied()
            .find(|field| !form.has(*field))
        {
            return Validation::Invalid(InvalidVoter::MissingField(field));
        }

        match form.age {
            Some(age) if age < self.rules.min_age => Validation::Invalid(InvalidVoter::Underage {
                age,
                min_age: self.rules.min_age,
            }),
            None if self.rules.min_age > 0 => {
                Validation::Invalid(InvalidVoter::MissingField(RequiredField::Age))
            }
            _ => Validation::Valid,
        }
    }
}
