#![allow(dead_code)]

use chrono::{Duration, Utc};
use serde_json::Map;
use sessiondisplay_core::{DisplayConfig, SessionDisplayService};
use sessiondisplay_records::{ChatMessage, PromptModel, SessionEntry, SessionEntryRow};
use sessiondisplay_store::{append_jsonl, JsonlStore, Paths};
use std::collections::BTreeMap;
use uuid::Uuid;

pub fn user(content: &str) -> ChatMessage {
    ChatMessage::new("user", content)
}

pub fn assistant(content: &str) -> ChatMessage {
    ChatMessage::new("assistant", content)
}

pub fn sample_entry(template_name: &str, messages: Option<Vec<ChatMessage>>) -> SessionEntry {
    SessionEntry {
        id: Uuid::new_v4(),
        logged_at: Utc::now(),
        template_name: template_name.to_string(),
        prompt_template_id: Uuid::new_v4(),
        prompt_template_version_id: Uuid::new_v4(),
        template_content: PromptModel::text("{{question}}"),
        inputs: BTreeMap::from([("question".to_string(), "why".to_string())]),
        api_key_name: None,
        llm_model: None,
        llm_provider: None,
        llm_parameters: Map::new(),
        response: format!("{template_name} response"),
        format_type: None,
        is_complete: Some(true),
        prompt_token_count: None,
        return_token_count: None,
        prompt_token_cost: None,
        return_token_cost: None,
        interpolated_prompt_content: Some(match messages {
            Some(messages) => PromptModel::chat(messages),
            None => PromptModel::text("why"),
        }),
        session_latency: None,
        function_call_response: None,
        environment_name: None,
        is_env_deleted: false,
    }
}

pub fn chat_entry(template_name: &str, messages: Vec<ChatMessage>, response: &str) -> SessionEntry {
    let mut entry = sample_entry(template_name, Some(messages));
    entry.response = response.to_string();
    entry
}

/// A logged row with cost, tokens and a one second latency
pub fn sample_row(
    session_id: Uuid,
    template_name: &str,
    interpolated: &str,
    offset_ms: i64,
) -> SessionEntryRow {
    let logged_at = Utc::now() + Duration::milliseconds(offset_ms);
    SessionEntryRow {
        session_id,
        id: Uuid::new_v4(),
        logged_at,
        template_name: template_name.to_string(),
        prompt_template_id: Uuid::new_v4(),
        prompt_template_version_id: Uuid::new_v4(),
        template_content: "Answer {{question}}".to_string(),
        inputs: BTreeMap::from([("question".to_string(), "why".to_string())]),
        api_key_name: Some("prod-key".to_string()),
        llm_model: Some("gpt-4o".to_string()),
        llm_provider: Some("openai".to_string()),
        llm_parameters: Map::new(),
        response: format!("{template_name} response"),
        format_type: None,
        is_complete: Some(true),
        interpolated_prompt_content: Some(interpolated.to_string()),
        prompt_token_count: Some(1200),
        response_token_count: Some(300),
        prompt_token_cost: Some("0.02".parse().unwrap()),
        response_token_cost: Some("0.01".parse().unwrap()),
        function_call_response: None,
        start_time: Some(logged_at),
        end_time: Some(logged_at + Duration::seconds(1)),
        environment_name: Some("production".to_string()),
        is_env_deleted: false,
    }
}

pub fn write_rows(paths: &Paths, rows: &[SessionEntryRow]) {
    append_jsonl(&paths.session_entries_file(), rows).unwrap();
}

pub fn service(paths: &Paths) -> SessionDisplayService {
    let store = JsonlStore::new(paths.clone());
    SessionDisplayService::new(
        Box::new(store.clone()),
        Box::new(store.clone()),
        Box::new(store),
        DisplayConfig::default(),
    )
}
