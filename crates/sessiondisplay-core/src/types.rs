//! Display types produced for a rendered session

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sessiondisplay_records::{
    EvaluationCriteria, EvaluationPair, EvaluationResult, FunctionCall, PromptModel, TestList,
};
use std::fmt;
use uuid::Uuid;

/// A labelled fact shown next to a prompt or session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayMetadataInfo {
    pub field: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub is_env_deleted: bool,
}

impl DisplayMetadataInfo {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            link: None,
            is_env_deleted: false,
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_env_deleted(mut self, is_env_deleted: bool) -> Self {
        self.is_env_deleted = is_env_deleted;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationCriteriaInfo {
    pub id: Uuid,
    pub name: String,
    pub question: String,
    pub criteria_type: String,
    pub llm_eval_enabled: bool,
}

impl From<&EvaluationCriteria> for EvaluationCriteriaInfo {
    fn from(criteria: &EvaluationCriteria) -> Self {
        Self {
            id: criteria.id,
            name: criteria.name.clone(),
            question: criteria.question.clone(),
            criteria_type: criteria.criteria_type.clone(),
            llm_eval_enabled: criteria.llm_eval_enabled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResultInfo {
    pub id: Uuid,
    pub score: Option<Value>,
}

impl From<&EvaluationResult> for EvaluationResultInfo {
    fn from(result: &EvaluationResult) -> Self {
        Self {
            id: result.id,
            score: result.score().cloned(),
        }
    }
}

/// Criteria paired with their result, ready for display
pub type DisplayEvaluations = Vec<(EvaluationCriteriaInfo, Option<EvaluationResultInfo>)>;

pub(crate) fn display_evaluations(evaluations: &[EvaluationPair]) -> DisplayEvaluations {
    evaluations
        .iter()
        .map(|(criteria, result)| {
            (
                EvaluationCriteriaInfo::from(criteria),
                result.as_ref().map(EvaluationResultInfo::from),
            )
        })
        .collect()
}

/// Everything shown for one group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayableSessionGroup {
    pub prompt_name: String,
    pub prompt_metadata: Vec<DisplayMetadataInfo>,
    pub prompt_template_content: PromptModel,
    pub cost: Option<String>,
    pub content: Option<PromptModel>,
    pub response: String,
    pub session_latency: Option<String>,
    pub evaluations: DisplayEvaluations,
    pub function_call_response: Option<FunctionCall>,
    pub function_specification: Option<String>,
}

/// Kind of a display group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    /// A standalone completion or one step of a multi-step run
    Chain,
    /// A multi-turn conversation collapsed onto its final turn
    Chat,
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKind::Chain => write!(f, "chain"),
            GroupKind::Chat => write!(f, "chat"),
        }
    }
}

/// One rendered group of a session
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "display_info", rename_all = "lowercase")]
pub enum SessionEntryGroup {
    Chain(DisplayableSessionGroup),
    Chat(DisplayableSessionGroup),
}

impl SessionEntryGroup {
    pub fn new(kind: GroupKind, display: DisplayableSessionGroup) -> Self {
        match kind {
            GroupKind::Chain => SessionEntryGroup::Chain(display),
            GroupKind::Chat => SessionEntryGroup::Chat(display),
        }
    }

    pub fn kind(&self) -> GroupKind {
        match self {
            SessionEntryGroup::Chain(_) => GroupKind::Chain,
            SessionEntryGroup::Chat(_) => GroupKind::Chat,
        }
    }

    pub fn display(&self) -> &DisplayableSessionGroup {
        match self {
            SessionEntryGroup::Chain(display) | SessionEntryGroup::Chat(display) => display,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestListInfo {
    pub id: Uuid,
    pub test_list_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub delete_url: String,
    pub update_url: String,
    pub details_url: String,
    pub is_deleted: bool,
}

impl From<&TestList> for TestListInfo {
    fn from(record: &TestList) -> Self {
        let details_url = format!("/projects/{}/test_lists/{}", record.project_id, record.id);
        Self {
            id: record.id,
            test_list_id: record.id,
            name: record.name.clone(),
            description: record.description.clone(),
            delete_url: format!("{details_url}/delete"),
            update_url: format!("{details_url}/update"),
            details_url,
            is_deleted: record.deleted_at.is_some(),
        }
    }
}

/// A test list the session could be added to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestListInfoWithSelection {
    pub info: TestListInfo,
    /// The session already belongs to this list
    pub selected: bool,
}

/// Rendered view of one session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionDisplayInfo {
    /// First entry's log time, Unix seconds
    pub created_at: i64,
    pub session_id: Uuid,
    pub session_groups: Vec<SessionEntryGroup>,
    pub session_overview: Vec<DisplayMetadataInfo>,
    pub evaluations: DisplayEvaluations,
    pub test_lists: Vec<TestListInfoWithSelection>,
}
