use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Service-boundary error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant renders as `{ "error": "<message>" }`. Upstream details are
/// logged here and never echoed to the caller.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("AI service not configured")]
    ConfigMissing,

    #[error("Upstream rate limit: {0}")]
    RateLimited(String),

    #[error("Upstream credits exhausted: {0}")]
    QuotaExhausted(String),

    #[error("Upstream failure: {0}")]
    Upstream(String),

    #[error("Unparseable model output: {0}")]
    Parse(String),

    #[error("Model output failed shape validation: {0}")]
    InvalidPlan(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable taxonomy code, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "INPUT_INVALID",
            AppError::ConfigMissing => "CONFIG_MISSING",
            AppError::RateLimited(_) => "RATE_LIMITED",
            AppError::QuotaExhausted(_) => "QUOTA_EXHAUSTED",
            AppError::Upstream(_) => "UPSTREAM_FAILURE",
            AppError::Parse(_) => "PARSE_FAILURE",
            AppError::InvalidPlan(_) => "INVALID_PLAN",
            AppError::Internal(_) => "UNKNOWN",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::QuotaExhausted(_) => StatusCode::PAYMENT_REQUIRED,
            AppError::ConfigMissing
            | AppError::Upstream(_)
            | AppError::Parse(_)
            | AppError::InvalidPlan(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message shown to the caller.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::ConfigMissing => "AI service not configured".to_string(),
            AppError::RateLimited(_) => "Rate limit exceeded. Please try again later.".to_string(),
            AppError::QuotaExhausted(_) => {
                "AI credits exhausted. Please add credits to your workspace.".to_string()
            }
            AppError::Upstream(_) => "Failed to generate prep plan".to_string(),
            AppError::Parse(_) => "Failed to parse AI response. Please try again.".to_string(),
            AppError::InvalidPlan(_) => {
                "AI returned an incomplete prep plan. Please try again.".to_string()
            }
            AppError::Internal(_) => "An internal server error occurred".to_string(),
        }
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Api { status: 429, message } => AppError::RateLimited(message),
            LlmError::Api { status: 402, message } => AppError::QuotaExhausted(message),
            LlmError::EmptyContent => AppError::Parse("LLM returned empty content".to_string()),
            other => AppError::Upstream(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Validation(msg) => tracing::warn!(code = self.code(), "Rejected: {msg}"),
            AppError::Internal(e) => tracing::error!(code = self.code(), "Internal error: {e:?}"),
            other => tracing::error!(code = other.code(), "{other}"),
        }

        let body = Json(json!({ "error": self.public_message() }));

        (status, body).into_response()
    }
}
