//! Session rendering entry points

use crate::config::DisplayConfig;
use crate::error::{DisplayError, Result};
use crate::fold::fold_session_into_groups;
use crate::overview::{multi_session_overview, single_group_overview};
use crate::repository::{EvaluationsRepository, SessionsRepository, TestListsRepository};
use crate::types::{
    display_evaluations, DisplayMetadataInfo, SessionDisplayInfo, SessionEntryGroup,
    TestListInfo, TestListInfoWithSelection,
};
use sessiondisplay_records::{EvaluationPair, Session, TestList};
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, info};
use uuid::Uuid;

/// A test list accepts a session when it has no declared inputs or the
/// exact same input names
fn accepts_inputs(test_list: &TestList, input_keys: &BTreeSet<&str>) -> bool {
    match &test_list.input_keys {
        None => true,
        Some(keys) => keys.iter().map(String::as_str).collect::<BTreeSet<_>>() == *input_keys,
    }
}

/// Renders logged sessions for display
pub struct SessionDisplayService {
    sessions_repo: Box<dyn SessionsRepository>,
    test_lists_repo: Box<dyn TestListsRepository>,
    evaluations_repo: Box<dyn EvaluationsRepository>,
    config: DisplayConfig,
}

impl SessionDisplayService {
    pub fn new(
        sessions_repo: Box<dyn SessionsRepository>,
        test_lists_repo: Box<dyn TestListsRepository>,
        evaluations_repo: Box<dyn EvaluationsRepository>,
        config: DisplayConfig,
    ) -> Self {
        Self {
            sessions_repo,
            test_lists_repo,
            evaluations_repo,
            config,
        }
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Fold a session into groups and pick the matching overview
    pub fn get_displayable_sessions(
        &self,
        session: &Session,
        evaluations: &[EvaluationPair],
        project_id: Uuid,
    ) -> (Vec<SessionEntryGroup>, Vec<DisplayMetadataInfo>) {
        let groups =
            fold_session_into_groups(&session.entries, evaluations, project_id, &self.config);

        let overview = if groups.len() == 1 {
            single_group_overview(session, project_id, &self.config)
        } else {
            multi_session_overview(session, &self.config)
        };

        (groups, overview)
    }

    /// Project test lists the session's inputs fit, flagged when the session is already in them
    pub fn find_compatible_test_lists_for_session(
        &self,
        session: &Session,
        project_id: Uuid,
    ) -> Result<Vec<TestListInfoWithSelection>> {
        let first = session
            .entries
            .first()
            .ok_or(DisplayError::EmptySession(session.id))?;
        let input_keys: BTreeSet<&str> = first.inputs.keys().map(String::as_str).collect();

        let test_lists = self.test_lists_repo.find_all_by_project_id(project_id)?;
        let selected: HashSet<Uuid> = self
            .test_lists_repo
            .find_all_by_session_id(session.id)?
            .into_iter()
            .map(|test_list| test_list.id)
            .collect();

        Ok(test_lists
            .iter()
            .filter(|test_list| accepts_inputs(test_list, &input_keys))
            .map(|test_list| TestListInfoWithSelection {
                info: TestListInfo::from(test_list),
                selected: selected.contains(&test_list.id),
            })
            .collect())
    }

    /// Everything needed to show one session; `None` when it does not exist
    pub fn get_session_display_info(
        &self,
        session_id: Uuid,
        project_id: Uuid,
    ) -> Result<Option<SessionDisplayInfo>> {
        let Some(session) = self.sessions_repo.try_find(session_id)? else {
            debug!(%session_id, "session not found");
            return Ok(None);
        };

        let evaluations = self
            .evaluations_repo
            .evaluations_for_session(session_id, &session.prompt_template_ids())?;

        let test_lists = self.find_compatible_test_lists_for_session(&session, project_id)?;
        let (session_groups, session_overview) =
            self.get_displayable_sessions(&session, &evaluations, project_id);

        let created_at = session
            .entries
            .first()
            .map(|entry| entry.logged_at.timestamp())
            .ok_or(DisplayError::EmptySession(session.id))?;

        info!(
            %session_id,
            entries = session.entries.len(),
            groups = session_groups.len(),
            "rendered session"
        );

        Ok(Some(SessionDisplayInfo {
            created_at,
            session_id: session.id,
            session_groups,
            session_overview,
            evaluations: display_evaluations(&evaluations),
            test_lists,
        }))
    }
}
