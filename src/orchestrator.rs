// src/orchestrator.rs
//! Generation request orchestrator
//! Owns the request lifecycle: snapshot the form, build the payload, issue
//! exactly one call to the rendering service, and write the outcome back.

use std::sync::Arc;

use tracing::{error, info};

use crate::config::RenderConfig;
use crate::render_client::{GenerateRequest, RenderClient};
use crate::store::FormStore;
use crate::types::{GenerationResult, RequestStatus};

#[derive(Debug, Clone)]
pub struct Orchestrator {
    store: Arc<FormStore>,
    client: RenderClient,
}

impl Orchestrator {
    pub fn new(store: Arc<FormStore>, config: &RenderConfig) -> Self {
        Self {
            store,
            client: RenderClient::new(config),
        }
    }

    pub fn store(&self) -> &Arc<FormStore> {
        &self.store
    }

    /// Run one full request cycle against the rendering service.
    ///
    /// The parameter snapshot is taken once at call start, so edits made
    /// while the request is in flight do not affect the submitted payload.
    /// Every path ends in exactly one of `Succeeded`/`Failed`; the store is
    /// never left `InFlight` once the call resolves, transport and parse
    /// failures included.
    pub async fn generate(&self) -> RequestStatus {
        let params = self.store.snapshot().await;
        self.store.begin_request().await;

        let payload = GenerateRequest::from_parameters(&params);
        info!(
            duration = payload.duration,
            width = payload.width,
            height = payload.height,
            fps = payload.fps,
            "Submitting generation request"
        );

        match self.client.generate(&payload).await {
            Ok(response) => {
                let resolved_url = format!("{}{}", self.client.base_url(), response.url);
                info!("Video ready: {} ({}s)", resolved_url, response.duration);
                let result = GenerationResult {
                    resource_path: response.url,
                    duration_seconds: response.duration,
                    resolved_url,
                    extra: response.extra,
                };
                self.store.complete_success(result).await;
                RequestStatus::Succeeded
            }
            Err(e) => {
                error!("Generation request failed: {}", e);
                self.store.complete_failure(e.to_string()).await;
                RequestStatus::Failed
            }
        }
    }
}
