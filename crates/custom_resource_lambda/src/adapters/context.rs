use lambda_runtime::Context;

use crate::runtime::contract::InvocationContext;

pub fn invocation_context(context: &Context) -> InvocationContext {
    let env_config = &context.env_config;
    InvocationContext {
        request_id: context.request_id.clone(),
        function_name: env_config.function_name.clone(),
        function_version: env_config.version.clone(),
        memory_limit_mb: env_config.memory,
        log_group_name: env_config.log_group.clone(),
        log_stream_name: env_config.log_stream.clone(),
        invoked_function_arn: context.invoked_function_arn.clone(),
        deadline_ms: context.deadline,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use lambda_runtime::Config;

    use super::*;

    #[test]
    fn copies_runtime_metadata() {
        let mut context = Context::default();
        context.request_id = "req-9".to_string();
        context.deadline = 42;
        context.invoked_function_arn = "arn:aws:lambda:us-east-1:123:function:Trigger".to_string();
        let mut config = Config::default();
        config.function_name = "Trigger".to_string();
        config.memory = 256;
        config.version = "7".to_string();
        config.log_stream = "stream-7".to_string();
        config.log_group = "/aws/lambda/Trigger".to_string();
        context.env_config = Arc::new(config);

        let converted = invocation_context(&context);
        assert_eq!(converted.request_id, "req-9");
        assert_eq!(converted.function_name, "Trigger");
        assert_eq!(converted.memory_limit_mb, 256);
        assert_eq!(converted.log_stream_name, "stream-7");
        assert_eq!(converted.deadline_ms, 42);
    }
}
