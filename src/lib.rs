//! # bitnet-probe
//!
//! Diagnostic client for a BitNet OpenAI-compatible shim sitting behind
//! Cloudflare Access. The probe performs exactly two operations against a
//! configurable base URL: an authenticated health check, then a single
//! generation call on either the chat or the completions route, printing
//! the full JSON response and the first choice's text.
//!
//! It is a manual integration-testing tool by design: one request in flight
//! at a time, a failed health check aborts the run, and the first failure on
//! any path is terminal. Streaming responses are intentionally unsupported,
//! matching the shim's own scope.
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Immutable run configuration built from CLI input |
//! | [`types`] | Request/response wire structs for both routes |
//! | [`transport`] | HTTP plumbing: auth headers, timeouts, status translation |
//! | [`client`] | High-level probe operations (health, generate) |
//! | [`report`] | Operator-facing JSON and error rendering |

pub mod client;
pub mod config;
pub mod report;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{GenerationOutcome, ProbeClient};
pub use config::{AccessCredentials, ProbeConfig, Route};
pub use types::GenerationResponse;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;
