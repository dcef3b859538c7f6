// src/render_client.rs
// HTTP client for the text-to-video rendering service

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::RenderConfig;
use crate::types::GenerationParameters;

/// Shown when the service fails without a structured error body.
pub const GENERIC_FAILURE_MESSAGE: &str = "Gagal membuat video";

#[derive(Error, Debug)]
pub enum RenderError {
    /// Transport failures and malformed success bodies; displays as the
    /// underlying failure's own message.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// Non-success HTTP status; carries the service's `detail` message
    /// verbatim, or the generic fallback.
    #[error("{0}")]
    Service(String),
}

// ============================================================================
// API REQUEST/RESPONSE STRUCTURES
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub text: String,
    /// Integer seconds, floored to 60 when the payload is built.
    pub duration: u32,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub background: String,
    pub text_color: String,
}

impl GenerateRequest {
    /// Build the wire payload from a parameter snapshot.
    ///
    /// Everything is copied verbatim except `duration`, which is the one
    /// value the client normalizes before submission.
    pub fn from_parameters(params: &GenerationParameters) -> Self {
        Self {
            text: params.text.clone(),
            duration: clamped_duration(params.duration_seconds),
            width: params.width,
            height: params.height,
            fps: params.fps,
            background: params.background_color.clone(),
            text_color: params.text_color.clone(),
        }
    }
}

// NaN compares false against the floor, and f64::max ignores it, so
// non-numeric input clamps to 60 along with anything below the minimum.
fn clamped_duration(raw: f64) -> u32 {
    raw.max(60.0) as u32
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Path-only locator for the produced asset.
    pub url: String,
    /// Actual duration of the produced asset in seconds.
    pub duration: f64,
    /// Other response fields, passed through unchanged.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

// ============================================================================
// IMPLEMENTATION
// ============================================================================

#[derive(Debug, Clone)]
pub struct RenderClient {
    client: Client,
    base_url: String,
    request_timeout: Option<std::time::Duration>,
}

impl RenderClient {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            request_timeout: config.request_timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit one generation request and parse the response.
    ///
    /// Non-success statuses become `RenderError::Service` with the body's
    /// `detail` when one parses, otherwise the generic fallback message.
    pub async fn generate(&self, payload: &GenerateRequest) -> Result<GenerateResponse, RenderError> {
        let url = format!("{}/api/generate", self.base_url);

        let mut request = self.client.post(&url).json(payload);
        if let Some(timeout) = self.request_timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail)
                .filter(|detail| !detail.is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
            tracing::warn!("Rendering service error ({}): {}", status, detail);
            return Err(RenderError::Service(detail));
        }

        let result: GenerateResponse = response.json().await?;
        Ok(result)
    }
}
