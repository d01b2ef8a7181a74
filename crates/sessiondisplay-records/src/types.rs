//! Logged session record types

use crate::prompt::{ChatMessage, PromptModel};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Function call returned by the model instead of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: String,
}

/// One logged LLM call within a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEntry {
    pub id: Uuid,
    pub logged_at: DateTime<Utc>,
    pub template_name: String,
    pub prompt_template_id: Uuid,
    pub prompt_template_version_id: Uuid,
    pub template_content: PromptModel,
    #[serde(default)]
    pub inputs: BTreeMap<String, String>,
    pub api_key_name: Option<String>,
    pub llm_model: Option<String>,
    pub llm_provider: Option<String>,
    /// Model parameters in the order they were logged
    #[serde(default)]
    pub llm_parameters: Map<String, Value>,
    pub response: String,
    pub format_type: Option<String>,
    pub is_complete: Option<bool>,
    pub prompt_token_count: Option<u64>,
    pub return_token_count: Option<u64>,
    pub prompt_token_cost: Option<Decimal>,
    pub return_token_cost: Option<Decimal>,
    pub interpolated_prompt_content: Option<PromptModel>,
    /// Seconds between request start and end
    pub session_latency: Option<Decimal>,
    pub function_call_response: Option<FunctionCall>,
    pub environment_name: Option<String>,
    #[serde(default)]
    pub is_env_deleted: bool,
}

impl SessionEntry {
    /// Chat history sent with this call, when it carried at least one turn
    pub fn chat_history(&self) -> Option<&[ChatMessage]> {
        self.interpolated_prompt_content
            .as_ref()
            .filter(|prompt| prompt.has_messages())
            .and_then(PromptModel::messages)
    }
}

/// A logged session with its entries in insertion order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub entries: Vec<SessionEntry>,
    pub aggregate_prompt_token_count: Option<u64>,
    pub aggregate_return_token_count: Option<u64>,
    pub aggregate_prompt_token_cost: Option<Decimal>,
    pub aggregate_return_token_cost: Option<Decimal>,
    pub aggregate_session_latency: Option<Decimal>,
}

/// Saturating total of the present values, `None` when it is zero
fn non_zero_sum<T>(values: impl Iterator<Item = Option<T>>, add: fn(T, T) -> T) -> Option<T>
where
    T: Default + PartialEq,
{
    let total = values.flatten().fold(T::default(), add);
    (total != T::default()).then_some(total)
}

impl Session {
    /// Build a session and its aggregates from ordered entries
    pub fn from_entries(id: Uuid, entries: Vec<SessionEntry>) -> Self {
        let aggregate_prompt_token_count = non_zero_sum(
            entries.iter().map(|e| e.prompt_token_count),
            u64::saturating_add,
        );
        let aggregate_return_token_count = non_zero_sum(
            entries.iter().map(|e| e.return_token_count),
            u64::saturating_add,
        );
        let aggregate_prompt_token_cost = non_zero_sum(
            entries.iter().map(|e| e.prompt_token_cost),
            Decimal::saturating_add,
        );
        let aggregate_return_token_cost = non_zero_sum(
            entries.iter().map(|e| e.return_token_cost),
            Decimal::saturating_add,
        );
        let aggregate_session_latency = Some(
            entries
                .iter()
                .filter_map(|e| e.session_latency)
                .sum::<Decimal>(),
        );

        Self {
            id,
            entries,
            aggregate_prompt_token_count,
            aggregate_return_token_count,
            aggregate_prompt_token_cost,
            aggregate_return_token_cost,
            aggregate_session_latency,
        }
    }

    /// Distinct prompt template ids, in first-seen order
    pub fn prompt_template_ids(&self) -> Vec<Uuid> {
        let mut ids: Vec<Uuid> = Vec::new();
        for entry in &self.entries {
            if !ids.contains(&entry.prompt_template_id) {
                ids.push(entry.prompt_template_id);
            }
        }
        ids
    }
}

/// A criterion evaluated against sessions of one prompt template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationCriteria {
    pub id: Uuid,
    pub name: String,
    pub question: String,
    /// "yes-no" or "1-5"
    #[serde(rename = "type")]
    pub criteria_type: String,
    pub prompt_template_id: Uuid,
    #[serde(default)]
    pub llm_eval_enabled: bool,
}

/// Score recorded for one criterion on one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub id: Uuid,
    pub evaluation_criteria_id: Uuid,
    pub session_id: Uuid,
    pub manual_score: Option<Value>,
    pub auto_eval_score: Option<Value>,
}

impl EvaluationResult {
    /// Manual score wins over the automatic one
    pub fn score(&self) -> Option<&Value> {
        self.manual_score
            .as_ref()
            .filter(|v| !v.is_null())
            .or(self.auto_eval_score.as_ref().filter(|v| !v.is_null()))
    }
}

/// A criterion paired with its result, if one was recorded
pub type EvaluationPair = (EvaluationCriteria, Option<EvaluationResult>);

/// Every criterion that applies to a session
pub type Evaluations = Vec<EvaluationPair>;

/// A named collection of test cases within a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestList {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Input names every test case must carry; unset accepts any inputs
    pub input_keys: Option<Vec<String>>,
    pub deleted_at: Option<DateTime<Utc>>,
}
