use super::prompt::{user_prompt, SYSTEM_PROMPT};
use crate::config::Config;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

/// Body of a chat-completion request
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl ChatCompletionRequest {
    pub fn new(config: &Config, label: &str, text: &str) -> Self {
        Self {
            model: config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt(label, text),
                },
            ],
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Choice {
    /// Legacy completions field
    pub text: Option<String>,
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Trimmed text of the first choice, message content before legacy text
    pub fn summary(&self) -> Option<String> {
        let choice = self.choices.first()?;
        choice
            .message
            .as_ref()
            .and_then(|message| message.content.as_deref())
            .filter(|content| !content.trim().is_empty())
            .or(choice.text.as_deref())
            .map(|summary| summary.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> ChatCompletionResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn request_carries_two_messages_and_settings() {
        let body = serde_json::to_value(ChatCompletionRequest::new(
            &Config::default(),
            "Tanya",
            "text",
        ))
        .unwrap();
        assert_eq!(body["model"], "deepseek-chat");
        assert_eq!(body["max_tokens"], 1000);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert!(body["messages"][1]["content"]
            .as_str()
            .unwrap()
            .contains("Tanya text"));
    }

    #[test]
    fn prefers_message_content() {
        let response = parse(json!({
            "choices": [{"text": "legacy", "message": {"content": "  chat  "}}]
        }));
        assert_eq!(response.summary().as_deref(), Some("chat"));
    }

    #[test]
    fn falls_back_to_legacy_text() {
        let response = parse(json!({"choices": [{"text": " legacy\n"}]}));
        assert_eq!(response.summary().as_deref(), Some("legacy"));
    }

    #[test]
    fn no_choices_means_no_summary() {
        assert!(parse(json!({"choices": []})).summary().is_none());
        assert!(parse(json!({})).summary().is_none());
    }
}
