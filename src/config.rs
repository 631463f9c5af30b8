//! Rules - per-registry validation configuration.
//!
//! Every registry front-end takes a rules struct. Rules are plain serde
//! structs with defaults for every field, so a partial JSON document only
//! overrides what it names.

use serde::de::DeserializeOwned;

use crate::error::RegistryError;

pub trait Rules: DeserializeOwned + Default {
    /// Check cross-field consistency after loading.
    fn validate(&self) -> Result<(), RegistryError> {
        Ok(())
    }

    /// Parse rules from JSON and validate them.
    fn from_json(json: &str) -> Result<Self, RegistryError> {
        let rules: Self =
            serde_json::from_str(json).map_err(|e| RegistryError::Config(e.to_string()))?;
        rules.validate()?;
        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(default)]
    struct Limits {
        low: u32,
        high: u32,
    }

    impl Default for Limits {
        fn default() -> Self {
            Limits { low: 1, high: 10 }
        }
    }

    impl Rules for Limits {
        fn validate(&self) -> Result<(), RegistryError> {
            if self.low > self.high {
                return Err(RegistryError::Config(format!(
                    "low {} exceeds high {}",
                    self.low, self.high
                )));
            }
            Ok(())
        }
    }

    #[test]
    fn partial_document_keeps_defaults() {
        let limits = Limits::from_json(r#"{"high": 20}"#).unwrap();
        assert_eq!(limits, Limits { low: 1, high: 20 });
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(Limits::from_json("{}").unwrap(), Limits::default());
    }

    #[test]
    fn malformed_json_is_config_error() {
        assert!(matches!(
            Limits::from_json("{"),
            Err(RegistryError::Config(_))
        ));
    }

    #[test]
    fn validate_runs_after_parse() {
        let err = Limits::from_json(r#"{"low": 5, "high": 2}"#).unwrap_err();
        assert_eq!(
            err,
            RegistryError::Config("low 5 exceeds high 2".to_string())
        );
    }
}
