use std::fmt;

use chrono::DateTime;
use serde::{Deserialize, Serialize};

pub const DEFAULT_WORKER_FUNCTION_NAME: &str = "LambdaHelloWorld";
pub const DEFAULT_PHYSICAL_RESOURCE_ID: &str = "LambdaHelloWorld-customresource-id";
pub const INVOKED_LAMBDA_RESPONSE_KEY: &str = "InvokedLambdaResponse";
pub const WORKER_GREETING: &str = "Hello World";

/// Runtime metadata for a single handler invocation.
///
/// Decoupled from the Lambda runtime's own context type so handlers can be
/// exercised without a live runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvocationContext {
    pub request_id: String,
    pub function_name: String,
    pub function_version: String,
    pub memory_limit_mb: i32,
    pub log_group_name: String,
    pub log_stream_name: String,
    pub invoked_function_arn: String,
    pub deadline_ms: u64,
}

impl InvocationContext {
    pub fn deadline_rfc3339(&self) -> Option<String> {
        let millis = i64::try_from(self.deadline_ms).ok()?;
        DateTime::from_timestamp_millis(millis).map(|deadline| deadline.to_rfc3339())
    }
}

impl fmt::Display for InvocationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LambdaContext([aws_request_id={},log_group_name={},log_stream_name={},function_name={},memory_limit_in_mb={},function_version={},invoked_function_arn={},deadline={}])",
            self.request_id,
            self.log_group_name,
            self.log_stream_name,
            self.function_name,
            self.memory_limit_mb,
            self.function_version,
            self.invoked_function_arn,
            self.deadline_rfc3339().as_deref().unwrap_or("None"),
        )
    }
}
