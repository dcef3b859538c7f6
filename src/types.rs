// types.rs - Shared data structures for the generation form and its results
use serde::{Deserialize, Serialize};

/// User-editable generation parameters held by the form store.
///
/// Nothing here is validated on edit; normalization (the duration floor)
/// happens once, when a request payload is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationParameters {
    pub text: String,
    /// Desired length in seconds. Floored to 60 at submission time, not on
    /// input; NaN (non-numeric form input) also floors to 60.
    pub duration_seconds: f64,
    pub width: u32,
    pub height: u32,
    /// Suggested range is 10-60, advisory only.
    pub fps: u32,
    pub background_color: String,
    pub text_color: String,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            text: "Tulis naskahmu di sini. Aplikasi ini akan membuat video dengan teks berjalan selama minimal 60 detik. Kamu bisa mengubah warna, ukuran, dan FPS.".to_string(),
            duration_seconds: 60.0,
            width: 1280,
            height: 720,
            fps: 24,
            background_color: "#0f172a".to_string(),
            text_color: "#e2e8f0".to_string(),
        }
    }
}

/// Single-field edit command for the form store.
///
/// Applying one overwrites exactly one parameter, never validates, and never
/// touches the request status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ParameterEdit {
    Text(String),
    DurationSeconds(f64),
    Width(u32),
    Height(u32),
    Fps(u32),
    BackgroundColor(String),
    TextColor(String),
}

/// Lifecycle state of the single outstanding generation request.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// No request has been issued this cycle
    #[default]
    Idle,
    /// Request submitted, response not yet resolved
    InFlight,
    /// Last request resolved with a playable result
    Succeeded,
    /// Last request resolved with an error message
    Failed,
}

/// Terminal outcome of a successful request cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationResult {
    /// Path-only locator exactly as returned by the rendering service.
    pub resource_path: String,
    /// Actual duration of the produced asset, echoed back for display.
    pub duration_seconds: f64,
    /// `base_url + resource_path`, playable and downloadable as-is.
    pub resolved_url: String,
    /// Any other response fields, passed through unchanged.
    pub extra: serde_json::Map<String, serde_json::Value>,
}
