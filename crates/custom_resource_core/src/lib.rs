//! Shared custom-resource primitives.
//!
//! This crate owns the lifecycle event view, invocation result normalization,
//! callback report contract, and configuration parsing. It intentionally
//! excludes AWS SDK and Lambda runtime concerns.

pub mod callback;
pub mod config;
pub mod contract;
pub mod invocation;
pub mod json_text;
pub mod lifecycle;
