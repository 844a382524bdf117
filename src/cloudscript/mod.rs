//! CloudScript client and types.
//!
//! **Feature flag:** `cloudscript` (required to use this module)
//!
//! Server-side function execution. Both operations are entity-token gated.
//! `ExecuteFunction` alone honors the `functions_host` override on
//! [`Settings`](crate::settings::Settings), so a locally running functions
//! host can serve executions while every other operation still targets the
//! title's API host.

pub mod client;
pub mod ops;
pub mod types;

pub use client::Client;
