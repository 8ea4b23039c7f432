//! Plan parsing — turns one free-form completion into a validated `PrepPlan`.
//!
//! Default: `SingleAttemptParser` (one extraction, one parse, no repair).
//! `AppState` holds an `Arc<dyn PlanParser>` so a repairing strategy can be
//! swapped in without touching the handler.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::plan::models::PrepPlan;
use crate::plan::validation::{cardinality_advisories, check_shape};

/// First fenced block, with or without a language tag. Captures the inner text.
static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```(?:[A-Za-z][\w+-]*)?\s*([\s\S]*?)\s*```").expect("fence pattern is valid")
});

/// Returns the candidate JSON text: the inner content of the first fenced
/// block if the completion has one, otherwise the whole completion.
pub fn extract_candidate(completion: &str) -> &str {
    match FENCED_BLOCK.captures(completion).and_then(|c| c.get(1)) {
        Some(inner) => inner.as_str(),
        None => completion.trim(),
    }
}

/// The plan parser trait. Implement this to change how model output is
/// recovered without touching the endpoint or the generator.
pub trait PlanParser: Send + Sync {
    fn parse(&self, completion: &str) -> Result<PrepPlan, AppError>;
}

/// Extracts the candidate text, parses it exactly once, then shape-checks it.
///
/// Syntactically invalid JSON is `AppError::Parse`; valid JSON that does not
/// form a complete plan is `AppError::InvalidPlan`.
pub struct SingleAttemptParser;

impl PlanParser for SingleAttemptParser {
    fn parse(&self, completion: &str) -> Result<PrepPlan, AppError> {
        let candidate = extract_candidate(completion);
        debug!("Parsing candidate JSON ({} bytes)", candidate.len());

        let value: serde_json::Value =
            serde_json::from_str(candidate).map_err(|e| AppError::Parse(e.to_string()))?;

        let plan: PrepPlan =
            serde_json::from_value(value).map_err(|e| AppError::InvalidPlan(e.to_string()))?;

        check_shape(&plan).map_err(|violations| AppError::InvalidPlan(violations.join("; ")))?;

        for advisory in cardinality_advisories(&plan) {
            warn!("Plan outside target range: {advisory}");
        }

        Ok(plan)
    }
}
