//! Run configuration, built once from CLI input and immutable afterward.

use clap::ValueEnum;
use url::Url;

use crate::{Error, Result};

/// Which generation endpoint to exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Route {
    Chat,
    Completions,
}

impl Route {
    /// Request path on the shim for this route.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Chat => "/v1/chat/completions",
            Route::Completions => "/v1/completions",
        }
    }
}

/// Cloudflare Access service-token pair, attached to every request.
#[derive(Debug, Clone)]
pub struct AccessCredentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Everything one probe run needs: where to call, which route, and the
/// sampling parameters to report to the shim.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Base URL with trailing slashes stripped.
    pub base_url: String,
    pub route: Route,
    pub model: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    /// Stop strings in the order they were given; may be empty.
    pub stop: Vec<String>,
    pub credentials: AccessCredentials,
}

/// Validate a base URL and strip trailing slashes so route paths can be
/// appended directly.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    Url::parse(raw)
        .map_err(|e| Error::Configuration(format!("invalid base URL {raw:?}: {e}")))?;
    Ok(raw.trim_end_matches('/').to_string())
}
