// src/config.rs
use std::env;
use std::time::Duration;

/// Immutable configuration for the rendering service connection.
///
/// Built once at startup and injected into the orchestrator; never mutated
/// afterwards. An empty `base_url` means same-origin relative requests.
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    pub base_url: String,
    /// Per-request timeout. `None` (the default) lets a slow call stay
    /// in flight indefinitely.
    pub request_timeout: Option<Duration>,
}

impl RenderConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout: None,
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Read configuration from the environment (after loading `.env`).
    ///
    /// `RENDER_BASE_URL` defaults to the empty string; an optional
    /// `RENDER_REQUEST_TIMEOUT_SECS` enables the per-request timeout.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url = match env::var("RENDER_BASE_URL") {
            Ok(url) => url,
            Err(_) => {
                tracing::warn!("RENDER_BASE_URL not set. Using same-origin relative requests.");
                String::new()
            }
        };

        let request_timeout = env::var("RENDER_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .map(Duration::from_secs);

        Self {
            base_url,
            request_timeout,
        }
    }
}
