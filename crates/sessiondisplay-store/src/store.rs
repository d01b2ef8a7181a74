//! Repository implementations over a directory of JSONL files

use crate::io::read_jsonl;
use crate::paths::Paths;
use serde::{Deserialize, Serialize};
use sessiondisplay_core::{EvaluationsRepository, SessionsRepository, TestListsRepository};
use sessiondisplay_records::{
    try_map_rows_to_session, EvaluationCriteria, EvaluationResult, Evaluations, Session,
    SessionEntryRow, TestList,
};
use std::collections::HashSet;
use tracing::debug;
use uuid::Uuid;

/// Records that a test list holds a case created from a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestListSessionLink {
    pub test_list_id: Uuid,
    pub session_id: Uuid,
}

/// File-backed store answering every lookup the display service needs
#[derive(Debug, Clone)]
pub struct JsonlStore {
    paths: Paths,
}

impl JsonlStore {
    pub fn new(paths: Paths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &Paths {
        &self.paths
    }

    fn live_test_lists(&self) -> anyhow::Result<Vec<TestList>> {
        let lists: Vec<TestList> = read_jsonl(&self.paths.test_lists_file())?;
        Ok(lists
            .into_iter()
            .filter(|list| list.deleted_at.is_none())
            .collect())
    }
}

impl SessionsRepository for JsonlStore {
    fn try_find(&self, session_id: Uuid) -> anyhow::Result<Option<Session>> {
        let rows: Vec<SessionEntryRow> = read_jsonl(&self.paths.session_entries_file())?;
        let mut rows: Vec<SessionEntryRow> = rows
            .into_iter()
            .filter(|row| row.session_id == session_id)
            .collect();
        rows.sort_by_key(|row| row.logged_at);

        debug!(%session_id, rows = rows.len(), "loaded session rows");
        Ok(try_map_rows_to_session(rows))
    }
}

impl TestListsRepository for JsonlStore {
    fn find_all_by_project_id(&self, project_id: Uuid) -> anyhow::Result<Vec<TestList>> {
        let mut lists: Vec<TestList> = self
            .live_test_lists()?
            .into_iter()
            .filter(|list| list.project_id == project_id)
            .collect();
        lists.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(lists)
    }

    fn find_all_by_session_id(&self, session_id: Uuid) -> anyhow::Result<Vec<TestList>> {
        let links: Vec<TestListSessionLink> =
            read_jsonl(&self.paths.test_list_sessions_file())?;
        let linked: HashSet<Uuid> = links
            .into_iter()
            .filter(|link| link.session_id == session_id)
            .map(|link| link.test_list_id)
            .collect();

        Ok(self
            .live_test_lists()?
            .into_iter()
            .filter(|list| linked.contains(&list.id))
            .collect())
    }
}

impl EvaluationsRepository for JsonlStore {
    fn evaluations_for_session(
        &self,
        session_id: Uuid,
        prompt_template_ids: &[Uuid],
    ) -> anyhow::Result<Evaluations> {
        let criteria: Vec<EvaluationCriteria> =
            read_jsonl(&self.paths.evaluation_criteria_file())?;
        let results: Vec<EvaluationResult> = read_jsonl(&self.paths.evaluation_results_file())?;

        Ok(criteria
            .into_iter()
            .filter(|c| prompt_template_ids.contains(&c.prompt_template_id))
            .map(|c| {
                let result = results
                    .iter()
                    .find(|r| r.evaluation_criteria_id == c.id && r.session_id == session_id)
                    .cloned();
                (c, result)
            })
            .collect())
    }
}
