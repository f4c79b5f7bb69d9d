use aws_sdk_lambda::error::DisplayErrorContext;
use aws_sdk_lambda::operation::invoke::InvokeOutput;
use aws_sdk_lambda::primitives::Blob;
use aws_sdk_lambda::types::InvocationType;
use custom_resource_lambda::adapters::callback::CallbackReporter;
use custom_resource_lambda::adapters::context::invocation_context;
use custom_resource_lambda::adapters::invoke::WorkerInvoker;
use custom_resource_lambda::handlers::trigger::handle_trigger_event;
use custom_resource_lambda::runtime::config::TriggerConfig;
use custom_resource_lambda::runtime::invocation::{
    InvocationMode, InvocationResult, PayloadStream, ResultField,
};
use custom_resource_lambda::telemetry::init_tracing;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use serde_json::{json, Value};

struct AwsLambdaWorkerInvoker {
    lambda_client: aws_sdk_lambda::Client,
    function_name: String,
}

impl WorkerInvoker for AwsLambdaWorkerInvoker {
    fn invoke_worker(
        &self,
        mode: InvocationMode,
        payload: &[u8],
    ) -> Result<InvocationResult, String> {
        let request_payload = payload.to_vec();
        let client = self.lambda_client.clone();
        let function_name = self.function_name.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .invoke()
                    .function_name(function_name)
                    .invocation_type(invocation_type(mode))
                    .payload(Blob::new(request_payload))
                    .send()
                    .await
                    .map(|output| invocation_result(&output))
                    .map_err(|error| {
                        format!(
                            "failed to invoke worker lambda: {}",
                            DisplayErrorContext(&error)
                        )
                    })
            })
        })
    }
}

fn invocation_type(mode: InvocationMode) -> InvocationType {
    match mode {
        InvocationMode::RequestResponse => InvocationType::RequestResponse,
        InvocationMode::Event => InvocationType::Event,
    }
}

/// The SDK hands back a buffered blob; it is re-exposed as a single-read
/// stream so normalization treats both invocation modes alike.
fn invocation_result(output: &InvokeOutput) -> InvocationResult {
    let mut result = InvocationResult::new(output.status_code());
    if let Some(function_error) = output.function_error() {
        result.push("FunctionError", ResultField::Plain(Value::from(function_error)));
    }
    if let Some(log_result) = output.log_result() {
        result.push("LogResult", ResultField::Plain(Value::from(log_result)));
    }
    if let Some(executed_version) = output.executed_version() {
        result.push(
            "ExecutedVersion",
            ResultField::Plain(Value::from(executed_version)),
        );
    }
    if let Some(payload) = output.payload() {
        result.push(
            "Payload",
            ResultField::Stream(PayloadStream::from_bytes(payload.as_ref().to_vec())),
        );
    }
    result
}

struct HttpCallbackReporter {
    http_client: reqwest::Client,
}

impl CallbackReporter for HttpCallbackReporter {
    fn put_report(&self, response_url: &str, body: &str) -> Result<u16, String> {
        let client = self.http_client.clone();
        let url = response_url.to_string();
        let body = body.to_string();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let response = client
                    .put(url)
                    .header(CONTENT_TYPE, "")
                    .header(CONTENT_LENGTH, body.len())
                    .body(body)
                    .send()
                    .await
                    .map_err(|error| format!("failed to PUT callback report: {error}"))?;

                let status = response.status();
                if status.is_success() {
                    Ok(status.as_u16())
                } else {
                    Err(format!("callback endpoint responded with {status}"))
                }
            })
        })
    }
}

struct RuntimeDependencies {
    config: TriggerConfig,
    invoker: AwsLambdaWorkerInvoker,
    reporter: HttpCallbackReporter,
}

async fn handle_request(
    deps: &RuntimeDependencies,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    let context = invocation_context(&event.context);
    let outcome = handle_trigger_event(
        &event.payload,
        &context,
        &deps.config,
        &deps.invoker,
        &deps.reporter,
    )
    .map_err(|error| Error::from(error.to_string()))?;

    Ok(json!({
        "Status": outcome.status,
        "CallbackStatusCode": outcome.http_status,
    }))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing("invoker_trigger_lambda");

    let config = TriggerConfig::from_env()?;
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    tracing::info!(
        function_name = %config.worker_function_name,
        invocation_type = %config.invocation_mode,
        physical_resource_id = %config.physical_resource_id,
        "trigger configured"
    );

    let deps = RuntimeDependencies {
        invoker: AwsLambdaWorkerInvoker {
            lambda_client: aws_sdk_lambda::Client::new(&aws_config),
            function_name: config.worker_function_name.clone(),
        },
        reporter: HttpCallbackReporter {
            http_client: reqwest::Client::new(),
        },
        config,
    };
    let deps = &deps;

    lambda_runtime::run(service_fn(move |event| handle_request(deps, event))).await
}
