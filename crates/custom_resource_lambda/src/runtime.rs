pub use custom_resource_core::{callback, config, contract, invocation, json_text, lifecycle};
