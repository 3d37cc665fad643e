//! OpenAI-compatible chat-completions client (Groq by default)

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{api_key_from_env, truncate_body, CollaboratorError, CollaboratorResult, TextGenerator};
use crate::config::LlmSettings;

const SERVICE: &str = "chat completions";

/// Text generator backed by a chat-completions endpoint
///
/// Each prompt is sent as a single user message. The client is cheap to clone
/// and shares its connection pool.
#[derive(Debug, Clone)]
pub struct GroqClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

impl GroqClient {
    /// Build a client from settings, reading the key from `settings.api_key_env`
    ///
    /// `max_tokens` is per use: enhancement and narration get separate clients.
    pub fn from_settings(settings: &LlmSettings, max_tokens: u32) -> CollaboratorResult<Self> {
        let api_key = api_key_from_env(&settings.api_key_env)?;
        Self::new(settings, api_key, max_tokens)
    }

    /// Build a client with an explicit key
    pub fn new(settings: &LlmSettings, api_key: impl Into<String>, max_tokens: u32) -> CollaboratorResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", settings.base_url.trim_end_matches('/')),
            api_key: api_key.into(),
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_tokens,
        })
    }

    /// Same client with a different reply length cap
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    fn request<'a>(&'a self, prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: [ChatMessage { role: "user", content: prompt }],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

impl TextGenerator for GroqClient {
    async fn generate_text(&self, prompt: &str) -> CollaboratorResult<String> {
        log::debug!("Chat completion request: model={} max_tokens={}", self.model, self.max_tokens);

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&self.request(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CollaboratorError::Status {
                service: SERVICE,
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let reply: ChatResponse = response.json().await?;
        first_content(reply).ok_or(CollaboratorError::EmptyResponse(SERVICE))
    }
}

fn first_content(reply: ChatResponse) -> Option<String> {
    reply
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
}
