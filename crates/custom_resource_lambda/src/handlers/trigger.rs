use serde_json::{Map, Value};
use thiserror::Error;

use crate::adapters::callback::CallbackReporter;
use crate::adapters::invoke::WorkerInvoker;
use crate::runtime::callback::{response_data, CallbackReport, ResponseStatus};
use crate::runtime::config::TriggerConfig;
use crate::runtime::contract::InvocationContext;
use crate::runtime::invocation::{is_accepted_status, StreamReadError};
use crate::runtime::json_text::to_spaced_json;
use crate::runtime::lifecycle::{request_type, CallbackTarget, EventError, RequestType};

/// Failures while producing the value reported back to CloudFormation. Every
/// variant is folded into a FAILED report.
#[derive(Debug, Error)]
pub enum TriggerError {
    #[error(transparent)]
    Event(#[from] EventError),
    #[error("no invocation response was assigned for RequestType `{0}`")]
    UnassignedResponse(RequestType),
    #[error("failed to encode worker payload: {0}")]
    Payload(serde_json::Error),
    #[error("{0}")]
    Invoke(String),
    #[error(transparent)]
    Normalize(#[from] StreamReadError),
    #[error("failed to serialize invocation response: {0}")]
    Serialize(serde_json::Error),
}

/// Failures of the report itself. Nothing is left to report them to, so they
/// surface as the Lambda invocation error.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot address callback report: {0}")]
    Target(#[from] EventError),
    #[error("failed to serialize callback report: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to send callback report: {0}")]
    Send(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TriggerOutcome {
    pub status: ResponseStatus,
    pub data: Map<String, Value>,
    pub http_status: u16,
}

/// Runs the Create round trip and returns the text stored under
/// `InvokedLambdaResponse`.
///
/// Only `Create` invokes the worker. Any other request type has no response
/// value and fails. A status other than 200/202 still yields a value.
pub fn build_response_value(
    event: &Value,
    config: &TriggerConfig,
    invoker: &dyn WorkerInvoker,
) -> Result<String, TriggerError> {
    let request_type = request_type(event)?;
    tracing::info!(request_type = %request_type, "lifecycle event received");

    if request_type != RequestType::Create {
        return Err(TriggerError::UnassignedResponse(request_type));
    }

    let payload = serde_json::to_vec(&Map::new()).map_err(TriggerError::Payload)?;
    let result = invoker
        .invoke_worker(config.invocation_mode, &payload)
        .map_err(TriggerError::Invoke)?;

    let status_code = result.status_code();
    tracing::info!(
        function_name = %config.worker_function_name,
        invocation_type = %config.invocation_mode,
        status_code,
        "worker invocation returned"
    );

    if !is_accepted_status(status_code) {
        tracing::warn!(status_code, "worker invocation returned an unexpected status");
        return Ok(format!(
            "Lambda invocation failed with status code: {status_code}"
        ));
    }

    let serializable = result.into_serializable()?;
    to_spaced_json(&serializable).map_err(TriggerError::Serialize)
}

/// Handles one lifecycle event and sends exactly one callback report.
pub fn handle_trigger_event(
    event: &Value,
    context: &InvocationContext,
    config: &TriggerConfig,
    invoker: &dyn WorkerInvoker,
    reporter: &dyn CallbackReporter,
) -> Result<TriggerOutcome, ReportError> {
    let (status, data) = match build_response_value(event, config, invoker) {
        Ok(value) => (ResponseStatus::Success, response_data(value)),
        Err(error) => {
            tracing::error!("Exception: {error}");
            (ResponseStatus::Failed, response_data(error.to_string()))
        }
    };

    let outcome = send_report(event, context, config, status, data, reporter);
    if let Err(error) = &outcome {
        tracing::error!(%status, %error, "callback report was not delivered");
    }
    outcome
}

fn send_report(
    event: &Value,
    context: &InvocationContext,
    config: &TriggerConfig,
    status: ResponseStatus,
    data: Map<String, Value>,
    reporter: &dyn CallbackReporter,
) -> Result<TriggerOutcome, ReportError> {
    let target = CallbackTarget::from_event(event)?;
    let report = CallbackReport::new(
        &target,
        &context.log_stream_name,
        status,
        data,
        Some(&config.physical_resource_id),
    );
    let body = serde_json::to_string(&report)?;
    tracing::info!("Response body: {body}");

    let http_status = reporter
        .put_report(&target.response_url, &body)
        .map_err(ReportError::Send)?;
    tracing::info!(http_status, "Status code: {http_status}");

    Ok(TriggerOutcome {
        status,
        data: report.data,
        http_status,
    })
}
