//! Session — the topmost composing unit on the client side.
//!
//! Owns the requestor and the current plan. Views receive `Arc<PrepPlan>`
//! snapshots; nothing else holds plan state.

use std::sync::Arc;

use crate::plan::models::PrepPlan;
use crate::requestor::{PlanRequestor, UserError};

pub struct Session {
    requestor: PlanRequestor,
    current: Option<Arc<PrepPlan>>,
}

impl Session {
    pub fn new(requestor: PlanRequestor) -> Self {
        Self {
            requestor,
            current: None,
        }
    }

    /// Requests a plan and, on success, replaces the current snapshot.
    /// A failed submission leaves the previous plan in place.
    pub async fn submit(&mut self, job_description: &str) -> Result<Arc<PrepPlan>, UserError> {
        let plan = Arc::new(self.requestor.request_plan(job_description).await?);
        self.current = Some(Arc::clone(&plan));
        Ok(plan)
    }

    pub fn current_plan(&self) -> Option<Arc<PrepPlan>> {
        self.current.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.requestor.is_loading()
    }

    /// Discards the current plan.
    pub fn reset(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::requestor::SilentNotifier;

    fn offline_session() -> Session {
        let requestor = PlanRequestor::new(
            "http://127.0.0.1:1/plan",
            Duration::from_secs(1),
            Arc::new(SilentNotifier),
        )
        .unwrap();
        Session::new(requestor)
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_no_plan() {
        let mut session = offline_session();
        assert_eq!(session.submit("").await.unwrap_err(), UserError::EmptyInput);
        assert!(session.current_plan().is_none());
        assert!(!session.is_loading());
    }

    #[test]
    fn test_reset_clears_plan() {
        let mut session = offline_session();
        session.current = Some(Arc::new(crate::plan::models::fixtures::acme_plan()));
        assert!(session.current_plan().is_some());
        session.reset();
        assert!(session.current_plan().is_none());
    }
}
