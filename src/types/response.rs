use serde::Deserialize;

use crate::config::Route;
use crate::{Error, Result};

/// Message carried by a chat-route choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// One element of the response's `choices` list. Chat responses populate
/// `message`, completion responses populate `text`; both are optional here
/// so decoding never fails on a shape mismatch and extraction can report a
/// precise error instead.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Decoded generation response.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl GenerationResponse {
    /// Route-specific access to the first choice's generated text.
    pub fn first_text(&self, route: Route) -> Result<&str> {
        let choice = self
            .choices
            .first()
            .ok_or_else(|| Error::MalformedResponse("response has no choices".to_string()))?;
        match route {
            Route::Chat => choice
                .message
                .as_ref()
                .and_then(|m| m.content.as_deref())
                .ok_or_else(|| {
                    Error::MalformedResponse(
                        "choices[0].message.content missing from chat response".to_string(),
                    )
                }),
            Route::Completions => choice.text.as_deref().ok_or_else(|| {
                Error::MalformedResponse(
                    "choices[0].text missing from completion response".to_string(),
                )
            }),
        }
    }
}
