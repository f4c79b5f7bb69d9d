use std::fmt;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestType {
    Create,
    Update,
    Delete,
    Other(String),
}

impl RequestType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Create => "Create",
            Self::Update => "Update",
            Self::Delete => "Delete",
            Self::Other(value) => value,
        }
    }
}

impl From<&str> for RequestType {
    fn from(value: &str) -> Self {
        match value {
            "Create" => Self::Create,
            "Update" => Self::Update,
            "Delete" => Self::Delete,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventError {
    #[error("lifecycle event must be a JSON object")]
    NotAnObject,
    #[error("lifecycle event is missing RequestType")]
    MissingRequestType,
    #[error("lifecycle event RequestType must be a string")]
    MalformedRequestType,
    #[error("lifecycle event is missing callback fields: {0}")]
    MissingCallbackFields(String),
}

pub fn request_type(event: &Value) -> Result<RequestType, EventError> {
    let object = event.as_object().ok_or(EventError::NotAnObject)?;
    let value = object
        .get("RequestType")
        .ok_or(EventError::MissingRequestType)?;
    value
        .as_str()
        .map(RequestType::from)
        .ok_or(EventError::MalformedRequestType)
}

/// Fields of a lifecycle event the callback report echoes back.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct CallbackTarget {
    #[serde(rename = "ResponseURL")]
    pub response_url: String,
    pub stack_id: String,
    pub request_id: String,
    pub logical_resource_id: String,
}

impl CallbackTarget {
    pub fn from_event(event: &Value) -> Result<Self, EventError> {
        Self::deserialize(event)
            .map_err(|error| EventError::MissingCallbackFields(error.to_string()))
    }
}
