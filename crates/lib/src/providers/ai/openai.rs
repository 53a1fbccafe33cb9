use crate::{
    constants::{
        DEFAULT_API_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE, NOT_CONFIGURED_EN,
        NOT_CONFIGURED_JA, NO_REPLY_EN, NO_REPLY_JA, UNREACHABLE_EN, UNREACHABLE_JA,
    },
    errors::ChatError,
    providers::ai::{validate_messages, ChatProvider},
    types::{ChatMessage, Language},
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

// --- OpenAI-compatible request and response structures ---

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
}

#[derive(Deserialize, Debug)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
struct ChatChoice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize, Debug)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Deserialize, Debug)]
struct ApiErrorDetail {
    message: Option<String>,
}

/// Pulls `error.message` out of a service error payload, if there is one.
fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .and_then(|e| e.message)
        .filter(|m| !m.trim().is_empty())
}

// --- Configuration ---

/// Connection settings for a chat-completion endpoint.
///
/// These are fixed when the provider is built, never per call.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            temperature: default_temperature(),
            api_key: None,
        }
    }
}

impl ChatConfig {
    /// The credential, if one is set and not blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

impl fmt::Debug for ChatConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatConfig")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("api_key_set", &self.api_key().is_some())
            .finish()
    }
}

/// The user-facing texts the provider substitutes when it has nothing better.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackMessages {
    /// Used when the credential is missing.
    pub not_configured: String,
    /// Used when a failure carries no message from the service.
    pub unreachable: String,
    /// Used when the service succeeds but returns no content.
    pub no_reply: String,
}

impl FallbackMessages {
    pub fn for_language(language: Language) -> Self {
        let (not_configured, unreachable, no_reply) = match language {
            Language::En => (NOT_CONFIGURED_EN, UNREACHABLE_EN, NO_REPLY_EN),
            Language::Ja => (NOT_CONFIGURED_JA, UNREACHABLE_JA, NO_REPLY_JA),
        };
        Self {
            not_configured: not_configured.to_string(),
            unreachable: unreachable.to_string(),
            no_reply: no_reply.to_string(),
        }
    }
}

impl Default for FallbackMessages {
    fn default() -> Self {
        Self::for_language(Language::En)
    }
}

// --- OpenAI Provider implementation ---

/// A provider for the OpenAI chat-completions API and compatible services.
#[derive(Clone, Debug)]
pub struct OpenAiProvider {
    client: ReqwestClient,
    config: ChatConfig,
    fallbacks: FallbackMessages,
}

impl OpenAiProvider {
    /// Creates a new `OpenAiProvider`.
    ///
    /// A missing credential is not an error here; it is reported by every
    /// `complete` call instead, so the rest of the application can still run.
    pub fn new(config: ChatConfig) -> Result<Self, ChatError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(ChatError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            config,
            fallbacks: FallbackMessages::default(),
        })
    }

    pub fn with_fallbacks(mut self, fallbacks: FallbackMessages) -> Self {
        self.fallbacks = fallbacks;
        self
    }

    fn transport_error(&self, status: Option<u16>, message: Option<String>) -> ChatError {
        ChatError::Transport {
            status,
            message: message.unwrap_or_else(|| self.fallbacks.unreachable.clone()),
        }
    }
}

#[async_trait]
impl ChatProvider for OpenAiProvider {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ChatError> {
        let api_key = self
            .config
            .api_key()
            .ok_or_else(|| ChatError::Configuration(self.fallbacks.not_configured.clone()))?;
        validate_messages(messages)?;

        let request_body = ChatCompletionRequest {
            model: &self.config.model,
            messages,
            temperature: self.config.temperature,
        };

        debug!(
            api_url = %self.config.api_url,
            model = %self.config.model,
            message_count = messages.len(),
            "--> Sending chat completion request"
        );

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Chat completion request failed");
                self.transport_error(e.status().map(|s| s.as_u16()), None)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            warn!(error = %e, "Failed to read chat completion response body");
            self.transport_error(Some(status.as_u16()), None)
        })?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Chat completion service returned an error");
            return Err(self.transport_error(Some(status.as_u16()), extract_error_message(&body)));
        }

        let completion: ChatCompletionResponse = serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "Failed to deserialize chat completion response");
            self.transport_error(Some(status.as_u16()), None)
        })?;

        let reply = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty());

        match reply {
            Some(text) => {
                debug!(reply_len = text.len(), "<-- Chat completion received");
                Ok(text)
            }
            None => {
                debug!("<-- Chat completion had no content; using fallback reply");
                Ok(self.fallbacks.no_reply.clone())
            }
        }
    }
}
