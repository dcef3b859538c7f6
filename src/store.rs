// src/store.rs
//! Form state store for the generation UI
//! Holds the seven user parameters plus the status/result/error triplet for
//! the single outstanding request. Status transitions are driven only by the
//! orchestrator; the store itself cannot fail.

use tokio::sync::RwLock;

use crate::types::{GenerationParameters, GenerationResult, ParameterEdit, RequestStatus};

#[derive(Debug, Clone, Default)]
struct FormState {
    parameters: GenerationParameters,
    status: RequestStatus,
    result: Option<GenerationResult>,
    error: Option<String>,
}

/// Shared form state, typically wrapped in an `Arc`.
#[derive(Debug, Default)]
pub struct FormStore {
    state: RwLock<FormState>,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite a single parameter. No validation, no status change;
    /// allowed at any time, including while a request is in flight (the
    /// in-flight payload was snapshotted at submission).
    pub async fn set_parameter(&self, edit: ParameterEdit) {
        let mut state = self.state.write().await;
        match edit {
            ParameterEdit::Text(text) => state.parameters.text = text,
            ParameterEdit::DurationSeconds(seconds) => state.parameters.duration_seconds = seconds,
            ParameterEdit::Width(width) => state.parameters.width = width,
            ParameterEdit::Height(height) => state.parameters.height = height,
            ParameterEdit::Fps(fps) => state.parameters.fps = fps,
            ParameterEdit::BackgroundColor(color) => state.parameters.background_color = color,
            ParameterEdit::TextColor(color) => state.parameters.text_color = color,
        }
    }

    /// Clone of the current parameters, taken once per request cycle.
    pub async fn snapshot(&self) -> GenerationParameters {
        self.state.read().await.parameters.clone()
    }

    /// Start a request cycle: status becomes `InFlight`, any prior result
    /// or error is cleared. Idempotent while already in flight.
    pub async fn begin_request(&self) {
        let mut state = self.state.write().await;
        state.status = RequestStatus::InFlight;
        state.result = None;
        state.error = None;
    }

    pub async fn complete_success(&self, result: GenerationResult) {
        let mut state = self.state.write().await;
        state.status = RequestStatus::Succeeded;
        state.result = Some(result);
        state.error = None;
    }

    pub async fn complete_failure(&self, message: impl Into<String>) {
        let mut state = self.state.write().await;
        state.status = RequestStatus::Failed;
        state.error = Some(message.into());
        state.result = None;
    }

    pub async fn status(&self) -> RequestStatus {
        self.state.read().await.status
    }

    pub async fn result(&self) -> Option<GenerationResult> {
        self.state.read().await.result.clone()
    }

    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }
}
