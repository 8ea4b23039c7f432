//! Plan Generation — runs one job description through the model and back.
//!
//! Flow: validate → config check → build prompts → one LLM call →
//!       extract + parse (single attempt) → shape check → return.
//!
//! Nothing here retries. A failed stage is terminal for the request.

use std::fmt;

use tracing::{error, info, warn};

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::plan::models::PrepPlan;
use crate::plan::parser::PlanParser;
use crate::plan::prompts::{build_user_prompt, PLAN_SYSTEM};

/// Per-request lifecycle. Only forward transitions exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Received,
    Validating,
    Rejected,
    CallingUpstream,
    UpstreamError,
    Parsing,
    ParseError,
    Succeeded,
}

impl Stage {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Stage::Rejected | Stage::UpstreamError | Stage::ParseError | Stage::Succeeded
        )
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Received => "RECEIVED",
            Stage::Validating => "VALIDATING",
            Stage::Rejected => "REJECTED",
            Stage::CallingUpstream => "CALLING_UPSTREAM",
            Stage::UpstreamError => "UPSTREAM_ERROR",
            Stage::Parsing => "PARSING",
            Stage::ParseError => "PARSE_ERROR",
            Stage::Succeeded => "SUCCEEDED",
        };
        f.write_str(name)
    }
}

/// Generates a plan for one job description.
///
/// `llm` is `None` when no API key is configured; that is reported as
/// `AppError::ConfigMissing` after input validation.
pub async fn generate_plan(
    llm: Option<&LlmClient>,
    parser: &dyn PlanParser,
    job_description: Option<&str>,
) -> Result<PrepPlan, AppError> {
    info!(stage = %Stage::Received, "Received prep plan request");

    info!(stage = %Stage::Validating);
    let job_description = match job_description {
        Some(jd) if !jd.trim().is_empty() => jd,
        _ => {
            warn!(stage = %Stage::Rejected, "Empty job description");
            return Err(AppError::Validation(
                "Job description is required".to_string(),
            ));
        }
    };

    let Some(llm) = llm else {
        error!(stage = %Stage::Rejected, "AI_API_KEY is not configured");
        return Err(AppError::ConfigMissing);
    };

    info!(
        stage = %Stage::CallingUpstream,
        model = llm.model(),
        jd_chars = job_description.chars().count(),
        "Analyzing job description with AI"
    );
    let user_prompt = build_user_prompt(job_description);
    let completion = llm
        .complete(PLAN_SYSTEM, &user_prompt)
        .await
        .map_err(|e| {
            error!(stage = %Stage::UpstreamError, "LLM call failed: {e}");
            AppError::from(e)
        })?;

    info!(stage = %Stage::Parsing, "AI response received, parsing");
    let plan = parser.parse(&completion).map_err(|e| {
        error!(stage = %Stage::ParseError, code = e.code(), "{e}");
        e
    })?;

    info!(
        stage = %Stage::Succeeded,
        projects = plan.projects.len(),
        challenges = plan.coding_challenges.len(),
        behavioral = plan.behavioral_questions.len(),
        "Prep plan generated successfully"
    );
    Ok(plan)
}
