use chrono::Utc;
use criterion::{criterion_group, criterion_main, Criterion};
use serde_json::Map;
use sessiondisplay_core::{fold_session_into_groups, DisplayConfig};
use sessiondisplay_records::{ChatMessage, PromptModel, SessionEntry};
use std::collections::BTreeMap;
use std::hint::black_box;
use uuid::Uuid;

fn entry(template_name: &str, prompt: PromptModel, response: String) -> SessionEntry {
    SessionEntry {
        id: Uuid::new_v4(),
        logged_at: Utc::now(),
        template_name: template_name.to_string(),
        prompt_template_id: Uuid::nil(),
        prompt_template_version_id: Uuid::nil(),
        template_content: PromptModel::text("{{question}}"),
        inputs: BTreeMap::from([("question".to_string(), "next".to_string())]),
        api_key_name: None,
        llm_model: Some("gpt-4o".to_string()),
        llm_provider: Some("openai".to_string()),
        llm_parameters: Map::new(),
        response,
        format_type: None,
        is_complete: Some(true),
        prompt_token_count: Some(100),
        return_token_count: Some(20),
        prompt_token_cost: None,
        return_token_cost: None,
        interpolated_prompt_content: Some(prompt),
        session_latency: None,
        function_call_response: None,
        environment_name: None,
        is_env_deleted: false,
    }
}

/// One conversation growing by a user and assistant turn per entry
fn growing_chat(turns: usize) -> Vec<SessionEntry> {
    let mut history = Vec::new();
    let mut entries = Vec::with_capacity(turns);
    for turn in 0..turns {
        history.push(ChatMessage::new("user", format!("question {turn}")));
        let response = format!("answer {turn}");
        entries.push(entry("chat", PromptModel::chat(history.clone()), response.clone()));
        history.push(ChatMessage::new("assistant", response));
    }
    entries
}

fn bench_fold_growing_chat_50_turns(c: &mut Criterion) {
    let entries = growing_chat(50);
    let config = DisplayConfig::default();
    let project_id = Uuid::new_v4();

    c.bench_function("fold_growing_chat_50_turns", |b| {
        b.iter(|| fold_session_into_groups(black_box(&entries), &[], project_id, &config));
    });
}

fn bench_fold_text_chain_100_steps(c: &mut Criterion) {
    let entries: Vec<SessionEntry> = (0..100)
        .map(|step| {
            entry(
                &format!("step-{}", step % 4),
                PromptModel::text(format!("step {step}")),
                format!("result {step}"),
            )
        })
        .collect();
    let config = DisplayConfig::default();
    let project_id = Uuid::new_v4();

    c.bench_function("fold_text_chain_100_steps", |b| {
        b.iter(|| fold_session_into_groups(black_box(&entries), &[], project_id, &config));
    });
}

criterion_group!(
    benches,
    bench_fold_growing_chat_50_turns,
    bench_fold_text_chain_100_steps
);
criterion_main!(benches);
