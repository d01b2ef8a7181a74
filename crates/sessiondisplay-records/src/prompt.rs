//! Prompt content: plain text or role-tagged chat turns

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// One role-tagged turn of a chat prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// A rendered prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PromptModel {
    /// Ordered chat history
    Chat { messages: Vec<ChatMessage> },
    /// Single completion prompt
    Text { content: String },
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\{\{\s*([^{}\s]+)\s*\}\}").expect("placeholder pattern is valid")
    })
}

fn substitute(text: &str, values: &BTreeMap<String, String>) -> String {
    placeholder_pattern()
        .replace_all(text, |caps: &Captures| match values.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

impl PromptModel {
    pub fn chat(messages: Vec<ChatMessage>) -> Self {
        PromptModel::Chat { messages }
    }

    pub fn text(content: impl Into<String>) -> Self {
        PromptModel::Text {
            content: content.into(),
        }
    }

    /// Parse stored prompt content.
    ///
    /// A JSON array of `{role, content}` objects is a chat prompt; anything
    /// else is kept verbatim as text.
    pub fn from_string(raw: &str) -> Self {
        match serde_json::from_str::<Vec<ChatMessage>>(raw) {
            Ok(messages) => PromptModel::Chat { messages },
            Err(_) => PromptModel::text(raw),
        }
    }

    /// Chat turns, if this is a chat prompt
    pub fn messages(&self) -> Option<&[ChatMessage]> {
        match self {
            PromptModel::Chat { messages } => Some(messages),
            PromptModel::Text { .. } => None,
        }
    }

    /// True for a chat prompt with at least one turn
    pub fn has_messages(&self) -> bool {
        self.messages().is_some_and(|m| !m.is_empty())
    }

    /// Replace `{{name}}` placeholders with the given values.
    ///
    /// Placeholders without a value are left as they are.
    pub fn format(&self, values: &BTreeMap<String, String>) -> PromptModel {
        match self {
            PromptModel::Chat { messages } => PromptModel::Chat {
                messages: messages
                    .iter()
                    .map(|m| ChatMessage::new(m.role.clone(), substitute(&m.content, values)))
                    .collect(),
            },
            PromptModel::Text { content } => PromptModel::text(substitute(content, values)),
        }
    }

    /// Copy of this chat prompt with one more turn at the end
    pub fn with_appended(&self, message: ChatMessage) -> Option<PromptModel> {
        let mut messages = self.messages()?.to_vec();
        messages.push(message);
        Some(PromptModel::Chat { messages })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string_chat() {
        let raw = r#"[{"role":"system","content":"be brief"},{"role":"user","content":"hi"}]"#;
        let prompt = PromptModel::from_string(raw);
        let messages = prompt.messages().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1], ChatMessage::new("user", "hi"));
    }

    #[test]
    fn test_from_string_text() {
        let prompt = PromptModel::from_string("Summarize {{article}}");
        assert_eq!(prompt, PromptModel::text("Summarize {{article}}"));
        assert!(prompt.messages().is_none());
        assert!(!prompt.has_messages());
    }

    #[test]
    fn test_empty_chat_has_no_messages() {
        let prompt = PromptModel::from_string("[]");
        assert_eq!(prompt.messages().map(|m| m.len()), Some(0));
        assert!(!prompt.has_messages());
    }

    #[test]
    fn test_format_replaces_known_placeholders() {
        let mut values = BTreeMap::new();
        values.insert("topic".to_string(), "{{topic: rust}}".to_string());

        let text = PromptModel::text("Write about {{ topic }} and {{other}}");
        assert_eq!(
            text.format(&values),
            PromptModel::text("Write about {{topic: rust}} and {{other}}")
        );

        let chat = PromptModel::chat(vec![ChatMessage::new("user", "Tell me about {{topic}}")]);
        let formatted = chat.format(&values);
        assert_eq!(
            formatted.messages().unwrap()[0].content,
            "Tell me about {{topic: rust}}"
        );
    }

    #[test]
    fn test_with_appended() {
        let chat = PromptModel::chat(vec![ChatMessage::new("user", "hi")]);
        let extended = chat
            .with_appended(ChatMessage::new("assistant", "hello"))
            .unwrap();
        assert_eq!(extended.messages().unwrap().len(), 2);
        // original untouched
        assert_eq!(chat.messages().unwrap().len(), 1);

        let text = PromptModel::text("plain");
        assert!(text
            .with_appended(ChatMessage::new("assistant", "x"))
            .is_none());
    }

    #[test]
    fn test_serde_shapes() {
        let chat = PromptModel::chat(vec![ChatMessage::new("user", "hi")]);
        let json = serde_json::to_value(&chat).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"messages": [{"role": "user", "content": "hi"}]})
        );

        let parsed: PromptModel = serde_json::from_str(r#"{"content":"plain"}"#).unwrap();
        assert_eq!(parsed, PromptModel::text("plain"));
    }
}
