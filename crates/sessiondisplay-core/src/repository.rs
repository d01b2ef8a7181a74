//! Read-only collaborators the display service depends on

use sessiondisplay_records::{Evaluations, Session, TestList};
use uuid::Uuid;

/// Session lookup
pub trait SessionsRepository: Send + Sync {
    /// The session with its entries in logged order, if it exists
    fn try_find(&self, session_id: Uuid) -> anyhow::Result<Option<Session>>;
}

/// Test list lookup
pub trait TestListsRepository: Send + Sync {
    /// Live test lists of a project
    fn find_all_by_project_id(&self, project_id: Uuid) -> anyhow::Result<Vec<TestList>>;

    /// Live test lists holding a test case created from the session
    fn find_all_by_session_id(&self, session_id: Uuid) -> anyhow::Result<Vec<TestList>>;
}

/// Evaluation lookup
pub trait EvaluationsRepository: Send + Sync {
    /// Criteria of the given prompt templates, each with the session's result if recorded
    fn evaluations_for_session(
        &self,
        session_id: Uuid,
        prompt_template_ids: &[Uuid],
    ) -> anyhow::Result<Evaluations>;
}
