//! Flat logged rows and their mapping into sessions

use crate::calculator::calculate_latency;
use crate::prompt::PromptModel;
use crate::types::{FunctionCall, Session, SessionEntry};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use uuid::Uuid;

/// One logged call as stored, before prompts are parsed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEntryRow {
    pub session_id: Uuid,
    pub id: Uuid,
    pub logged_at: DateTime<Utc>,
    pub template_name: String,
    pub prompt_template_id: Uuid,
    pub prompt_template_version_id: Uuid,
    pub template_content: String,
    #[serde(default)]
    pub inputs: BTreeMap<String, String>,
    pub api_key_name: Option<String>,
    pub llm_model: Option<String>,
    pub llm_provider: Option<String>,
    #[serde(default)]
    pub llm_parameters: Map<String, Value>,
    pub response: String,
    pub format_type: Option<String>,
    pub is_complete: Option<bool>,
    pub interpolated_prompt_content: Option<String>,
    pub prompt_token_count: Option<u64>,
    pub response_token_count: Option<u64>,
    pub prompt_token_cost: Option<Decimal>,
    pub response_token_cost: Option<Decimal>,
    pub function_call_response: Option<FunctionCall>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub environment_name: Option<String>,
    #[serde(default)]
    pub is_env_deleted: bool,
}

impl SessionEntryRow {
    pub fn into_entry(self) -> SessionEntry {
        SessionEntry {
            id: self.id,
            logged_at: self.logged_at,
            template_name: self.template_name,
            prompt_template_id: self.prompt_template_id,
            prompt_template_version_id: self.prompt_template_version_id,
            template_content: PromptModel::from_string(&self.template_content),
            inputs: self.inputs,
            api_key_name: self.api_key_name,
            llm_model: self.llm_model,
            llm_provider: self.llm_provider,
            llm_parameters: self.llm_parameters,
            response: self.response,
            format_type: self.format_type,
            is_complete: self.is_complete,
            prompt_token_count: self.prompt_token_count,
            return_token_count: self.response_token_count,
            prompt_token_cost: self.prompt_token_cost,
            return_token_cost: self.response_token_cost,
            interpolated_prompt_content: self
                .interpolated_prompt_content
                .as_deref()
                .map(PromptModel::from_string),
            session_latency: calculate_latency(self.start_time, self.end_time),
            function_call_response: self.function_call_response,
            environment_name: self.environment_name,
            is_env_deleted: self.is_env_deleted,
        }
    }
}

/// Assemble the rows of one session, in logged order.
///
/// Returns `None` when there are no rows; the session id is taken from the
/// first row.
pub fn try_map_rows_to_session(rows: Vec<SessionEntryRow>) -> Option<Session> {
    let session_id = rows.first()?.session_id;
    let entries = rows.into_iter().map(SessionEntryRow::into_entry).collect();
    Some(Session::from_entries(session_id, entries))
}
