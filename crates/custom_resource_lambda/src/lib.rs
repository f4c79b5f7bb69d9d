//! AWS-oriented adapters and handlers for the custom-resource invoker.
//!
//! This crate owns runtime integration details (Lambda handlers, the worker
//! invocation seam, and the CloudFormation callback seam) and exposes a single
//! runtime module boundary for the contract primitives.

pub mod adapters;
pub mod handlers;
pub mod runtime;
pub mod telemetry;
