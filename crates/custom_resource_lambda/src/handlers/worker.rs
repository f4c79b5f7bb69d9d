use serde_json::Value;

use crate::runtime::contract::{InvocationContext, WORKER_GREETING};

pub fn worker_log_lines(event: &Value, context: &InvocationContext) -> [String; 3] {
    let rendered_event = serde_json::to_string_pretty(event).unwrap_or_else(|_| event.to_string());
    [
        WORKER_GREETING.to_string(),
        format!("Event: {rendered_event}"),
        format!("Context: {context}"),
    ]
}

/// Logs the greeting, the event and the context. Never fails.
pub fn handle_worker_event(event: &Value, context: &InvocationContext) -> Value {
    for line in worker_log_lines(event, context) {
        tracing::info!("{line}");
    }
    Value::Null
}
