use crate::runtime::invocation::{InvocationMode, InvocationResult};

pub trait WorkerInvoker {
    fn invoke_worker(
        &self,
        mode: InvocationMode,
        payload: &[u8],
    ) -> Result<InvocationResult, String>;
}
