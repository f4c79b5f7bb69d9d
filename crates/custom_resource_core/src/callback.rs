use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::contract::INVOKED_LAMBDA_RESPONSE_KEY;
use crate::lifecycle::CallbackTarget;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseStatus {
    Success,
    Failed,
}

impl ResponseStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Failed => "FAILED",
        }
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body PUT to the pre-signed `ResponseURL` of a custom-resource event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CallbackReport {
    pub status: ResponseStatus,
    pub reason: String,
    pub physical_resource_id: String,
    pub stack_id: String,
    pub request_id: String,
    pub logical_resource_id: String,
    pub no_echo: bool,
    pub data: Map<String, Value>,
}

impl CallbackReport {
    pub fn new(
        target: &CallbackTarget,
        log_stream_name: &str,
        status: ResponseStatus,
        data: Map<String, Value>,
        physical_resource_id: Option<&str>,
    ) -> Self {
        let physical_resource_id = physical_resource_id
            .filter(|value| !value.is_empty())
            .unwrap_or(log_stream_name);

        Self {
            status,
            reason: format!("See the details in CloudWatch Log Stream: {log_stream_name}"),
            physical_resource_id: physical_resource_id.to_string(),
            stack_id: target.stack_id.clone(),
            request_id: target.request_id.clone(),
            logical_resource_id: target.logical_resource_id.clone(),
            no_echo: false,
            data,
        }
    }
}

pub fn response_data(value: impl Into<String>) -> Map<String, Value> {
    let mut data = Map::new();
    data.insert(
        INVOKED_LAMBDA_RESPONSE_KEY.to_string(),
        Value::String(value.into()),
    );
    data
}
