use thiserror::Error;

use crate::contract::{DEFAULT_PHYSICAL_RESOURCE_ID, DEFAULT_WORKER_FUNCTION_NAME};
use crate::invocation::{InvocationMode, UnknownInvocationMode};

pub const WORKER_FUNCTION_NAME_VAR: &str = "WORKER_FUNCTION_NAME";
pub const WORKER_INVOCATION_TYPE_VAR: &str = "WORKER_INVOCATION_TYPE";
pub const PHYSICAL_RESOURCE_ID_VAR: &str = "PHYSICAL_RESOURCE_ID";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("WORKER_INVOCATION_TYPE is invalid: {0}")]
    InvocationType(#[from] UnknownInvocationMode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerConfig {
    pub worker_function_name: String,
    pub invocation_mode: InvocationMode,
    pub physical_resource_id: String,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            worker_function_name: DEFAULT_WORKER_FUNCTION_NAME.to_string(),
            invocation_mode: InvocationMode::Event,
            physical_resource_id: DEFAULT_PHYSICAL_RESOURCE_ID.to_string(),
        }
    }
}

impl TriggerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Blank values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let invocation_mode = match non_blank(WORKER_INVOCATION_TYPE_VAR) {
            Some(value) => value.parse()?,
            None => defaults.invocation_mode,
        };

        Ok(Self {
            worker_function_name: non_blank(WORKER_FUNCTION_NAME_VAR)
                .unwrap_or(defaults.worker_function_name),
            invocation_mode,
            physical_resource_id: non_blank(PHYSICAL_RESOURCE_ID_VAR)
                .unwrap_or(defaults.physical_resource_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| values.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = TriggerConfig::from_lookup(lookup_from(&[])).expect("config");
        assert_eq!(config.worker_function_name, "LambdaHelloWorld");
        assert_eq!(config.invocation_mode, InvocationMode::Event);
        assert_eq!(
            config.physical_resource_id,
            "LambdaHelloWorld-customresource-id"
        );
    }

    #[test]
    fn overrides_are_read_from_lookup() {
        let config = TriggerConfig::from_lookup(lookup_from(&[
            (WORKER_FUNCTION_NAME_VAR, "arn:aws:lambda:us-east-1:123:function:Other"),
            (WORKER_INVOCATION_TYPE_VAR, "RequestResponse"),
            (PHYSICAL_RESOURCE_ID_VAR, "custom-id"),
        ]))
        .expect("config");

        assert_eq!(
            config.worker_function_name,
            "arn:aws:lambda:us-east-1:123:function:Other"
        );
        assert_eq!(config.invocation_mode, InvocationMode::RequestResponse);
        assert_eq!(config.physical_resource_id, "custom-id");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = TriggerConfig::from_lookup(lookup_from(&[
            (WORKER_FUNCTION_NAME_VAR, "  "),
            (WORKER_INVOCATION_TYPE_VAR, ""),
        ]))
        .expect("config");

        assert_eq!(config, TriggerConfig::default());
    }

    #[test]
    fn rejects_unknown_invocation_type() {
        let error = TriggerConfig::from_lookup(lookup_from(&[(
            WORKER_INVOCATION_TYPE_VAR,
            "DryRun",
        )]))
        .expect_err("unknown invocation type should fail");

        assert!(error.to_string().contains("WORKER_INVOCATION_TYPE"));
        assert!(error.to_string().contains("DryRun"));
    }
}
