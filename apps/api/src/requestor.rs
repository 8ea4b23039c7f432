//! Plan Requestor — the client side of plan generation.
//!
//! One submission = one POST to the plan endpoint. The loading flag is held
//! by an RAII guard so every exit path clears it, including panics.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::plan::models::PrepPlan;

pub const READY_MESSAGE: &str = "Your personalized prep plan is ready!";

/// Errors surfaced to the user. `Display` is the notification text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("Please paste a job description")]
    EmptyInput,

    #[error("A prep plan is already being generated")]
    Busy,

    /// Message supplied by the service.
    #[error("{0}")]
    Service(String),

    /// Success envelope without a plan.
    #[error("Failed to generate prep plan")]
    MissingPlan,

    /// Network failure or an unreadable response.
    #[error("Something went wrong. Please try again.")]
    Unexpected,
}

/// Transient user-facing notifications.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Notifier that drops everything. Useful for headless callers.
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn success(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

/// Either envelope the service may return. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    success: bool,
    plan: Option<PrepPlan>,
    error: Option<String>,
}

pub struct PlanRequestor {
    http: Client,
    endpoint: String,
    notifier: Arc<dyn Notifier>,
    loading: AtomicBool,
}

/// Clears the loading flag on drop.
struct LoadingGuard<'a>(&'a AtomicBool);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl PlanRequestor {
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Duration,
        notifier: Arc<dyn Notifier>,
    ) -> reqwest::Result<Self> {
        Ok(Self {
            http: Client::builder().timeout(timeout).build()?,
            endpoint: endpoint.into(),
            notifier,
            loading: AtomicBool::new(false),
        })
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Submits one job description and returns the plan unchanged.
    ///
    /// Every failure emits exactly one error notification; success emits one
    /// success notification.
    pub async fn request_plan(&self, job_description: &str) -> Result<PrepPlan, UserError> {
        let result = self.submit(job_description).await;
        match &result {
            Ok(_) => self.notifier.success(READY_MESSAGE),
            Err(e) => self.notifier.error(&e.to_string()),
        }
        result
    }

    async fn submit(&self, job_description: &str) -> Result<PrepPlan, UserError> {
        if job_description.trim().is_empty() {
            return Err(UserError::EmptyInput);
        }

        if self
            .loading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(UserError::Busy);
        }
        let _guard = LoadingGuard(&self.loading);

        debug!("Requesting prep plan from {}", self.endpoint);
        let response = self
            .http
            .post(&self.endpoint)
            .json(&serde_json::json!({ "jobDescription": job_description }))
            .send()
            .await
            .map_err(|e| {
                error!("Error generating prep plan: {e}");
                UserError::Unexpected
            })?;

        let status = response.status();
        let envelope = response.json::<Envelope>().await.map_err(|e| {
            error!(status = status.as_u16(), "Unreadable plan response: {e}");
            UserError::Unexpected
        })?;

        if let Some(message) = envelope.error {
            warn!(status = status.as_u16(), "Plan service reported: {message}");
            return Err(UserError::Service(message));
        }

        if !status.is_success() {
            warn!(status = status.as_u16(), "Plan service failed without a message");
            return Err(UserError::Unexpected);
        }

        match envelope.plan {
            Some(plan) if envelope.success => Ok(plan),
            _ => Err(UserError::MissingPlan),
        }
    }
}
