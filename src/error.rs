/// Failure raised by a registry operation.
///
/// Every variant is reported before any state changes, so an `Err` always
/// means the registry is exactly as it was before the call.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A required field was absent or blank.
    #[error("{kind} field `{field}` is missing or empty")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },

    /// A field was present but held a value outside its allowed set.
    #[error("{kind} field `{field}` has invalid value `{value}`")]
    InvalidValue {
        kind: &'static str,
        field: &'static str,
        value: String,
    },

    /// The identity key is already taken within this registry.
    #[error("{kind} `{key}` already exists")]
    Duplicate { kind: &'static str, key: String },

    /// The voter is younger than the configured minimum age.
    #[error("voter age {age} is below the minimum of {min_age}")]
    Underage { age: u32, min_age: u32 },

    /// Rules failed to load or were inconsistent.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A journal payload could not be encoded or decoded.
    #[error("journal codec error: {0}")]
    Codec(String),

    /// A journal could not be replayed into a registry.
    #[error("journal replay error: {0}")]
    Replay(String),
}
