use custom_resource_lambda::adapters::context::invocation_context;
use custom_resource_lambda::handlers::worker::handle_worker_event;
use custom_resource_lambda::telemetry::init_tracing;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn handle_request(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let context = invocation_context(&event.context);
    Ok(handle_worker_event(&event.payload, &context))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing("hello_world_lambda");
    lambda_runtime::run(service_fn(handle_request)).await
}
