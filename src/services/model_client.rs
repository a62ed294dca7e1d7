// src/services/model_client.rs
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model API key is not configured (set GEMINI_API_KEY)")]
    MissingApiKey,
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("provider returned {status}: {body}")]
    Provider { status: StatusCode, body: String },
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),
}

impl ModelError {
    /// What a caller outside the service may see. Provider bodies stay in the logs.
    pub fn client_detail(&self) -> String {
        match self {
            ModelError::Provider { status, .. } => format!("provider returned {}", status),
            other => other.to_string(),
        }
    }
}

/// A model that turns a system instruction plus one user message into a
/// finished completion. Any intermediate reasoning stays behind this call.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn complete(&self, instructions: &str, user_message: &str) -> Result<String, ModelError>;
}

#[derive(Serialize)]
struct CompletionMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<CompletionMessage<'a>>,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionContent,
}

#[derive(Deserialize)]
struct CompletionContent {
    content: Option<String>,
}

/// Chat-completions client for any OpenAI-compatible endpoint.
#[derive(Clone)]
pub struct OpenAiCompatClient {
    http: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl std::fmt::Debug for OpenAiCompatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiCompatClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl OpenAiCompatClient {
    pub fn new(
        api_key: Option<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let http = Client::builder().build().map_err(ModelError::Client)?;
        Ok(Self {
            http,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: base_url.into(),
            model: model.into(),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ModelClient for OpenAiCompatClient {
    async fn complete(&self, instructions: &str, user_message: &str) -> Result<String, ModelError> {
        let api_key = self.api_key.as_deref().ok_or(ModelError::MissingApiKey)?;

        let body = CompletionRequest {
            model: &self.model,
            messages: vec![
                CompletionMessage { role: "system", content: instructions },
                CompletionMessage { role: "user", content: user_message },
            ],
        };

        let url = self.completions_url();
        debug!(model = %self.model, %url, message_len = user_message.len(), "sending completion request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ModelError::Provider { status, body: text });
        }

        let parsed: CompletionResponse = serde_json::from_str(&text)
            .map_err(|e| ModelError::MalformedResponse(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ModelError::MalformedResponse("response has no choices".to_string()))?
            .message
            .content
            .ok_or_else(|| ModelError::MalformedResponse("first choice has no text content".to_string()))?;

        info!(model = %self.model, response_len = content.len(), "completion received");
        Ok(content)
    }
}
