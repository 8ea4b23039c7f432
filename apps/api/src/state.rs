use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::plan::parser::PlanParser;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when `AI_API_KEY` is unset; every plan request then fails with
    /// a configuration error.
    pub llm: Option<LlmClient>,
    pub config: Config,
    /// Pluggable completion parser. Default: SingleAttemptParser.
    pub parser: Arc<dyn PlanParser>,
}
