mod models;
mod prompt;

pub use models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
pub use prompt::SYSTEM_PROMPT;

use crate::config::Config;
use crate::error::{config_error, from_reqwest, summarization_error, DigestResult, Error};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, info};

/// Client for an OpenAI-compatible chat-completion API
#[derive(Clone)]
pub struct ChatCompletionClient {
    config: Arc<Config>,
    client: Client,
}

impl ChatCompletionClient {
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self { config, client }
    }
}

#[async_trait]
impl super::Summarizer for ChatCompletionClient {
    async fn summarize(&self, text: &str, label: &str) -> DigestResult<String> {
        let api_key = self
            .config
            .deepseek_api_key
            .as_deref()
            .ok_or_else(|| config_error("Missing DeepSeek API key"))?;

        if text.trim().is_empty() {
            return Err(Error::EmptyInput(label.to_string()));
        }

        info!("Summarizing {} ({} characters)", label, text.len());
        let request = ChatCompletionRequest::new(&self.config, label, text);

        let response = self
            .client
            .post(&self.config.completion_url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let context = format!("{} summarization request", label);
                from_reqwest(&context, e, summarization_error)
            })?;

        if !response.status().is_success() {
            return Err(summarization_error(&format!(
                "{} summarization error: HTTP {}",
                label,
                response.status().as_u16()
            )));
        }

        let data: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| {
                from_reqwest("Failed to parse completion response", e, summarization_error)
            })?;
        debug!("Raw completion response for {}: {:?}", label, data);

        data.summary().ok_or_else(|| {
            summarization_error(&format!("{} summarization returned no content", label))
        })
    }
}
