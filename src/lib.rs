// lib.rs - Client-side orchestrator for a text-to-video rendering service
pub mod config;
pub mod orchestrator;
pub mod render_client;
pub mod store;
pub mod types;

// Re-export commonly used types for convenience
pub use config::RenderConfig;
pub use orchestrator::Orchestrator;
pub use render_client::{
    GenerateRequest, GenerateResponse, RenderClient, RenderError, GENERIC_FAILURE_MESSAGE,
};
pub use store::FormStore;
pub use types::{GenerationParameters, GenerationResult, ParameterEdit, RequestStatus};
