//! Wire structs for the shim's OpenAI-compatible surface.
//!
//! Requests are strongly typed per route; responses are decoded leniently
//! since the shim enforces no schema beyond a `choices` list.

pub mod request;
pub mod response;

pub use request::{ChatMessage, ChatRequest, CompletionRequest};
pub use response::{Choice, GenerationResponse};
