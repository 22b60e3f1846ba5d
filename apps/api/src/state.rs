use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Nothing in here is mutable; requests share no state.
#[derive(Clone)]
pub struct AppState {
    /// `OpenAiClient` when a key is configured, `UnconfiguredGenerator` otherwise.
    pub generator: Arc<dyn TextGenerator>,
    pub config: Config,
}
