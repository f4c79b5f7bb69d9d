use std::fmt;
use std::io::{self, Cursor, Read};
use std::str::FromStr;

use serde_json::{Map, Value};
use thiserror::Error;

pub const SYNC_COMPLETED_STATUS: i32 = 200;
pub const ASYNC_ACCEPTED_STATUS: i32 = 202;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvocationMode {
    RequestResponse,
    #[default]
    Event,
}

impl InvocationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RequestResponse => "RequestResponse",
            Self::Event => "Event",
        }
    }

    pub fn expected_status(self) -> i32 {
        match self {
            Self::RequestResponse => SYNC_COMPLETED_STATUS,
            Self::Event => ASYNC_ACCEPTED_STATUS,
        }
    }
}

impl fmt::Display for InvocationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown invocation type `{0}` (expected `Event` or `RequestResponse`)")]
pub struct UnknownInvocationMode(pub String);

impl FromStr for InvocationMode {
    type Err = UnknownInvocationMode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "RequestResponse" => Ok(Self::RequestResponse),
            "Event" => Ok(Self::Event),
            other => Err(UnknownInvocationMode(other.to_string())),
        }
    }
}

/// Either status counts as a delivered invocation: 200 for a completed
/// synchronous call, 202 for a queued asynchronous one.
pub fn is_accepted_status(status_code: i32) -> bool {
    status_code == SYNC_COMPLETED_STATUS || status_code == ASYNC_ACCEPTED_STATUS
}

#[derive(Debug, Error)]
pub enum StreamReadError {
    #[error("failed to read payload stream: {0}")]
    Io(#[from] io::Error),
    #[error("payload stream is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// A single-read payload body. Reading consumes the stream, so it can only be
/// drained once.
pub struct PayloadStream {
    reader: Box<dyn Read + Send>,
}

impl PayloadStream {
    pub fn new(reader: impl Read + Send + 'static) -> Self {
        Self {
            reader: Box::new(reader),
        }
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(Cursor::new(bytes.into()))
    }

    pub fn read_to_text(mut self) -> Result<String, StreamReadError> {
        let mut buffer = Vec::new();
        self.reader.read_to_end(&mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

impl fmt::Debug for PayloadStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PayloadStream").finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub enum ResultField {
    Plain(Value),
    Stream(PayloadStream),
}

impl ResultField {
    fn materialize(self) -> Result<Value, StreamReadError> {
        match self {
            Self::Plain(value) => Ok(value),
            Self::Stream(stream) => stream.read_to_text().map(Value::String),
        }
    }
}

/// Ordered view of an invocation service response.
#[derive(Debug)]
pub struct InvocationResult {
    status_code: i32,
    fields: Vec<(String, ResultField)>,
}

impl InvocationResult {
    pub fn new(status_code: i32) -> Self {
        Self {
            status_code,
            fields: vec![(
                "StatusCode".to_string(),
                ResultField::Plain(Value::from(status_code)),
            )],
        }
    }

    pub fn with_plain(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(name, ResultField::Plain(value.into()));
        self
    }

    pub fn with_stream(mut self, name: impl Into<String>, stream: PayloadStream) -> Self {
        self.push(name, ResultField::Stream(stream));
        self
    }

    pub fn push(&mut self, name: impl Into<String>, field: ResultField) {
        let name = name.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = field,
            None => self.fields.push((name, field)),
        }
    }

    pub fn status_code(&self) -> i32 {
        self.status_code
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Copies every field in order, draining stream fields into their UTF-8
    /// text.
    pub fn into_serializable(self) -> Result<Map<String, Value>, StreamReadError> {
        let mut object = Map::with_capacity(self.fields.len());
        for (name, field) in self.fields {
            object.insert(name, field.materialize()?);
        }
        Ok(object)
    }
}
