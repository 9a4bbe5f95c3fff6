use std::env;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::debug;

use crate::config::AccessCredentials;
use crate::{Error, Result};

const HEALTH_TIMEOUT_SECS: u64 = 10;
const GENERATION_TIMEOUT_SECS: u64 = 120;

const CLIENT_ID_HEADER: &str = "CF-Access-Client-Id";
const CLIENT_SECRET_HEADER: &str = "CF-Access-Client-Secret";

/// HTTP plumbing shared by all probe calls: one reqwest client, the shim's
/// base URL, and the Cloudflare Access headers attached to every request.
///
/// Per-call timeouts are fixed (10 s health, 120 s generation) with env
/// overrides for unusually slow deployments.
pub struct ShimTransport {
    client: reqwest::Client,
    base_url: String,
    headers: HeaderMap,
    health_timeout: Duration,
    generation_timeout: Duration,
}

impl ShimTransport {
    pub fn new(base_url: &str, credentials: &AccessCredentials) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            CLIENT_ID_HEADER,
            header_value(CLIENT_ID_HEADER, &credentials.client_id)?,
        );
        headers.insert(
            CLIENT_SECRET_HEADER,
            header_value(CLIENT_SECRET_HEADER, &credentials.client_secret)?,
        );

        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            headers,
            health_timeout: env_timeout("PROBE_HEALTH_TIMEOUT_SECS", HEALTH_TIMEOUT_SECS),
            generation_timeout: env_timeout(
                "PROBE_GENERATION_TIMEOUT_SECS",
                GENERATION_TIMEOUT_SECS,
            ),
        })
    }

    /// `GET {base}/health` with the short timeout.
    pub async fn get_health(&self) -> Result<Value> {
        let url = format!("{}/health", self.base_url);
        debug!(%url, "issuing health check");
        let response = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .timeout(self.health_timeout)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `POST {base}{path}` with a JSON body and the long timeout.
    pub async fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "issuing generation request");
        let response = self
            .client
            .post(&url)
            .headers(self.headers.clone())
            .timeout(self.generation_timeout)
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Decode a response body, translating non-2xx statuses into `Remote`
    /// errors that preserve the server's body (JSON when it parses, raw
    /// text otherwise).
    async fn decode(response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }
        let text = response.text().await.unwrap_or_default();
        let body = match serde_json::from_str::<Value>(&text) {
            Ok(json) => json,
            Err(_) => Value::String(text),
        };
        Err(Error::Remote {
            status: status.as_u16(),
            body,
        })
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| Error::Configuration(format!("{name} is not a valid header value")))
}

fn env_timeout(var: &str, default_secs: u64) -> Duration {
    let secs = env::var(var)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(default_secs);
    Duration::from_secs(secs)
}
