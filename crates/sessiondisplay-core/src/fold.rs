//! Single-pass folding of session entries into display groups
//!
//! A session group is either a chain (one prompt, or several prompts run in
//! succession) or a continuous chat: a run of entries that each add a turn
//! to the same history. A chat is shown once, on its final entry.

use crate::config::DisplayConfig;
use crate::types::{GroupKind, SessionEntryGroup};
use sessiondisplay_records::{ChatMessage, EvaluationPair, SessionEntry};
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

fn evaluations_by_prompt(
    all_evaluations: &[EvaluationPair],
) -> HashMap<Uuid, Vec<EvaluationPair>> {
    let mut by_prompt: HashMap<Uuid, Vec<EvaluationPair>> = HashMap::new();
    for (criteria, result) in all_evaluations {
        by_prompt
            .entry(criteria.prompt_template_id)
            .or_default()
            .push((criteria.clone(), result.clone()));
    }
    by_prompt
}

/// `upcoming` continues `current` when they agree on every turn both have
fn is_continuation(current: &[ChatMessage], upcoming: &[ChatMessage]) -> bool {
    upcoming.iter().zip(current).all(|(next, prev)| next == prev)
}

/// Group for a chat entry, with its response appended as the last turn
fn chat_group(
    entry: &SessionEntry,
    kind: GroupKind,
    evaluations: &[EvaluationPair],
    project_id: Uuid,
    config: &DisplayConfig,
) -> SessionEntryGroup {
    let content = entry.interpolated_prompt_content.as_ref().and_then(|prompt| {
        prompt.with_appended(ChatMessage::new(
            config.response_role.clone(),
            entry.response.clone(),
        ))
    });
    SessionEntryGroup::from_entry(entry, kind, evaluations, project_id, content, config)
}

/// Fold ordered session entries into display groups
pub fn fold_session_into_groups(
    entries: &[SessionEntry],
    all_evaluations: &[EvaluationPair],
    project_id: Uuid,
    config: &DisplayConfig,
) -> Vec<SessionEntryGroup> {
    let by_prompt = evaluations_by_prompt(all_evaluations);
    let mut groups = Vec::new();
    let mut is_continued_conversation = false;

    for (index, entry) in entries.iter().enumerate() {
        let next = entries.get(index + 1);
        let evaluations = by_prompt
            .get(&entry.prompt_template_id)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        match next {
            Some(next) if next.template_name == entry.template_name => {
                match (entry.chat_history(), next.chat_history()) {
                    (Some(current), Some(upcoming)) => {
                        is_continued_conversation = is_continuation(current, upcoming);
                        if is_continued_conversation {
                            debug!(index, "chat continues into next entry");
                        } else {
                            debug!(index, "same-template chat diverges, emitting singleton");
                            groups.push(chat_group(
                                entry,
                                GroupKind::Chain,
                                evaluations,
                                project_id,
                                config,
                            ));
                        }
                    }
                    _ => {
                        debug!(index, "same-template text step");
                        groups.push(SessionEntryGroup::from_entry(
                            entry,
                            GroupKind::Chain,
                            evaluations,
                            project_id,
                            None,
                            config,
                        ));
                    }
                }
            }
            _ if is_continued_conversation => {
                // Final turn of a conversation. Conversation-level
                // evaluations are not supported yet, so none are attached.
                debug!(index, "closing continued chat");
                groups.push(chat_group(entry, GroupKind::Chat, &[], project_id, config));
            }
            _ => {
                debug!(index, "standalone entry");
                groups.push(SessionEntryGroup::from_entry(
                    entry,
                    GroupKind::Chain,
                    evaluations,
                    project_id,
                    None,
                    config,
                ));
            }
        }

        if next.is_some_and(|n| n.template_name != entry.template_name) {
            is_continued_conversation = false;
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::Map;
    use sessiondisplay_records::{EvaluationCriteria, PromptModel};
    use std::collections::BTreeMap;

    fn msg(role: &str, content: &str) -> ChatMessage {
        ChatMessage::new(role, content)
    }

    fn entry(template_name: &str, prompt: Option<PromptModel>, response: &str) -> SessionEntry {
        SessionEntry {
            id: Uuid::new_v4(),
            logged_at: Utc::now(),
            template_name: template_name.to_string(),
            prompt_template_id: Uuid::new_v4(),
            prompt_template_version_id: Uuid::new_v4(),
            template_content: PromptModel::text("template"),
            inputs: BTreeMap::new(),
            api_key_name: None,
            llm_model: None,
            llm_provider: None,
            llm_parameters: Map::new(),
            response: response.to_string(),
            format_type: None,
            is_complete: None,
            prompt_token_count: None,
            return_token_count: None,
            prompt_token_cost: None,
            return_token_cost: None,
            interpolated_prompt_content: prompt,
            session_latency: None,
            function_call_response: None,
            environment_name: None,
            is_env_deleted: false,
        }
    }

    fn chat(template_name: &str, messages: &[ChatMessage], response: &str) -> SessionEntry {
        entry(
            template_name,
            Some(PromptModel::chat(messages.to_vec())),
            response,
        )
    }

    fn criteria_for(entry: &SessionEntry) -> EvaluationPair {
        (
            EvaluationCriteria {
                id: Uuid::new_v4(),
                name: "helpful".to_string(),
                question: "Helpful?".to_string(),
                criteria_type: "yes-no".to_string(),
                prompt_template_id: entry.prompt_template_id,
                llm_eval_enabled: false,
            },
            None,
        )
    }

    fn fold(entries: &[SessionEntry], evaluations: &[EvaluationPair]) -> Vec<SessionEntryGroup> {
        fold_session_into_groups(
            entries,
            evaluations,
            Uuid::new_v4(),
            &DisplayConfig::default(),
        )
    }

    #[test]
    fn test_is_continuation() {
        let a = [msg("user", "u1")];
        let b = [msg("user", "u1"), msg("assistant", "a1"), msg("user", "u2")];
        assert!(is_continuation(&a, &b));
        // zip stops at the shorter list
        assert!(is_continuation(&b, &a));
        assert!(!is_continuation(&a, &[msg("user", "other")]));
    }

    #[test]
    fn test_single_entry_is_standalone() {
        let only = chat("t", &[msg("user", "u1")], "a1");
        let evaluations = vec![criteria_for(&only)];
        let groups = fold(&[only], &evaluations);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].kind(), GroupKind::Chain);
        // standalone path keeps content as logged, no synthetic turn
        assert_eq!(
            groups[0].display().content.as_ref().unwrap().messages().unwrap().len(),
            1
        );
        assert_eq!(groups[0].display().evaluations.len(), 1);
    }

    #[test]
    fn test_growing_chat_collapses() {
        let mut entries = vec![
            chat("T", &[msg("user", "u1")], "a1"),
            chat(
                "T",
                &[msg("user", "u1"), msg("assistant", "a1"), msg("user", "u2")],
                "a2",
            ),
            chat(
                "T",
                &[
                    msg("user", "u1"),
                    msg("assistant", "a1"),
                    msg("user", "u2"),
                    msg("assistant", "a2"),
                    msg("user", "u3"),
                ],
                "a3",
            ),
        ];
        let shared_template = entries[0].prompt_template_id;
        for e in &mut entries {
            e.prompt_template_id = shared_template;
        }
        let evaluations = vec![criteria_for(&entries[0])];

        let groups = fold(&entries, &evaluations);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].kind(), GroupKind::Chat);
        assert!(groups[0].display().evaluations.is_empty());

        let messages = groups[0].display().content.as_ref().unwrap().messages().unwrap();
        assert_eq!(messages.len(), 6);
        assert_eq!(messages[5], msg("assistant", "a3"));
        assert_eq!(groups[0].display().response, "a3");
    }

    #[test]
    fn test_divergent_chats_split_into_singleton_and_standalone() {
        let entries = vec![
            chat("T", &[msg("user", "first")], "r1"),
            chat("T", &[msg("user", "second")], "r2"),
        ];
        let groups = fold(&entries, &[]);

        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|g| g.kind() == GroupKind::Chain));
        let first = groups[0].display().content.as_ref().unwrap().messages().unwrap();
        assert_eq!(first, &[msg("user", "first"), msg("assistant", "r1")]);
        // the last entry has no lookahead, so it is a plain standalone group
        let second = groups[1].display().content.as_ref().unwrap().messages().unwrap();
        assert_eq!(second, &[msg("user", "second")]);
    }

    #[test]
    fn test_empty_chat_history_is_not_a_conversation() {
        let entries = vec![chat("t", &[], "a1"), chat("t", &[msg("user", "u1")], "a2")];
        let groups = fold(&entries, &[]);

        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|g| g.kind() == GroupKind::Chain));
        assert_eq!(
            groups[0].display().content,
            Some(PromptModel::chat(Vec::new()))
        );
    }

    #[test]
    fn test_same_template_text_chain() {
        let entries = vec![
            entry("T", Some(PromptModel::text("one")), "r1"),
            entry("T", Some(PromptModel::text("two")), "r2"),
            entry("T", None, "r3"),
        ];
        let groups = fold(&entries, &[]);
        assert_eq!(groups.len(), 3);
        assert!(groups.iter().all(|g| g.kind() == GroupKind::Chain));
        assert_eq!(
            groups[0].display().content,
            Some(PromptModel::text("one"))
        );
    }

    #[test]
    fn test_template_change_resets_continuation() {
        let entries = vec![
            chat("T", &[msg("user", "u1")], "a1"),
            chat("T", &[msg("user", "u1"), msg("assistant", "a1")], "a2"),
            chat("U", &[msg("user", "u1"), msg("assistant", "a1")], "x"),
        ];
        let groups = fold(&entries, &[]);

        let kinds: Vec<GroupKind> = groups.iter().map(SessionEntryGroup::kind).collect();
        assert_eq!(kinds, vec![GroupKind::Chat, GroupKind::Chain]);
        assert_eq!(groups[0].display().prompt_name, "T");
        assert_eq!(groups[1].display().prompt_name, "U");
    }

    #[test]
    fn test_chain_then_chat_then_chain() {
        let entries = vec![
            entry("classify", Some(PromptModel::text("classify this")), "question"),
            chat("support", &[msg("user", "hi")], "hello"),
            chat(
                "support",
                &[msg("user", "hi"), msg("assistant", "hello"), msg("user", "bye")],
                "goodbye",
            ),
            entry("summarize", Some(PromptModel::text("summarize")), "done"),
        ];
        let groups = fold(&entries, &[]);

        let summary: Vec<(GroupKind, &str)> = groups
            .iter()
            .map(|g| (g.kind(), g.display().prompt_name.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (GroupKind::Chain, "classify"),
                (GroupKind::Chat, "support"),
                (GroupKind::Chain, "summarize"),
            ]
        );
    }

    #[test]
    fn test_evaluations_matched_by_template_id() {
        let first = entry("a", Some(PromptModel::text("x")), "1");
        let second = entry("b", Some(PromptModel::text("y")), "2");
        let evaluations = vec![criteria_for(&first), criteria_for(&first)];

        let groups = fold(&[first, second], &evaluations);
        assert_eq!(groups[0].display().evaluations.len(), 2);
        assert!(groups[1].display().evaluations.is_empty());
    }

    #[test]
    fn test_empty_session_folds_to_nothing() {
        assert!(fold(&[], &[]).is_empty());
    }
}
