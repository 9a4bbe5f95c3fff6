//! High-level probe operations over the shim.
//!
//! `ProbeClient` keeps the surface small: one health call, one generation
//! call. The health check is a hard precondition for the run; callers abort
//! on its failure before any generation request is constructed.

use serde_json::Value;
use tracing::debug;

use crate::config::{ProbeConfig, Route};
use crate::transport::ShimTransport;
use crate::types::{ChatRequest, CompletionRequest, GenerationResponse};
use crate::Result;

/// Outcome of a generation call: the decoded response for field access plus
/// the raw JSON value for operator-facing printing.
#[derive(Debug)]
pub struct GenerationOutcome {
    pub raw: Value,
    pub response: GenerationResponse,
}

pub struct ProbeClient {
    transport: ShimTransport,
}

impl ProbeClient {
    pub fn new(config: &ProbeConfig) -> Result<Self> {
        Ok(Self {
            transport: ShimTransport::new(&config.base_url, &config.credentials)?,
        })
    }

    /// `GET /health`, returning the decoded body on 2xx.
    pub async fn health(&self) -> Result<Value> {
        self.transport.get_health().await
    }

    /// Build the route-appropriate payload and POST it to the shim.
    pub async fn generate(&self, config: &ProbeConfig) -> Result<GenerationOutcome> {
        let body = match config.route {
            Route::Chat => serde_json::to_value(ChatRequest::from_config(config))?,
            Route::Completions => serde_json::to_value(CompletionRequest::from_config(config))?,
        };
        debug!(route = ?config.route, model = %config.model, "sending generation request");
        let raw = self.transport.post_json(config.route.path(), &body).await?;
        let response: GenerationResponse = serde_json::from_value(raw.clone())?;
        Ok(GenerationOutcome { raw, response })
    }
}
