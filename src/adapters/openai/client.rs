//! Chat-completions client

use std::sync::LazyLock;
use std::time::Duration;

use anyhow::{Context, anyhow, bail};
use regex::Regex;
use serde_json::{Value, json};

use crate::config::ApiConfig;

/// Matches a reply wrapped in a Markdown code fence
static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*```(?:json)?\s*(.*?)\s*```\s*$").expect("code fence pattern is valid")
});

/// Client for an OpenAI-compatible `/chat/completions` endpoint
#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl OpenAiClient {
    /// Create a client
    pub fn new(
        base_url: &str,
        model: &str,
        api_key: &str,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            model: model.trim().to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Create a client from configuration, reading the API key from the environment
    pub fn from_config(config: &ApiConfig) -> anyhow::Result<Self> {
        let api_key = config.api_key()?;
        Self::new(&config.base_url, &config.model, &api_key, config.timeout())
    }

    /// Model name sent with every request
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a system prompt and user content, returning the JSON reply
    pub(crate) async fn complete_json(&self, system: &str, user: Value) -> anyhow::Result<Value> {
        let endpoint = format!("{}/chat/completions", self.base_url);
        let payload = json!({
            "model": self.model,
            "temperature": 0,
            "response_format": { "type": "json_object" },
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user },
            ],
        });

        log::debug!("POST {endpoint} (model {})", self.model);
        let response = self
            .http
            .post(&endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .with_context(|| format!("request to {endpoint}"))?;

        let status = response.status();
        let body = response.text().await.context("read response body")?;
        if !status.is_success() {
            bail!("AI service returned {status}: {}", truncate(&body, 200));
        }

        let parsed: Value = serde_json::from_str(&body).context("decode response envelope")?;
        let content = parsed
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .ok_or_else(|| anyhow!("response has no message content"))?;

        parse_json_reply(content)
    }
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

/// Parse a model reply as JSON, tolerating a surrounding code fence
pub(crate) fn parse_json_reply(content: &str) -> anyhow::Result<Value> {
    let body = CODE_FENCE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map_or(content.trim(), |m| m.as_str());

    serde_json::from_str(body).with_context(|| format!("reply is not JSON: {}", truncate(body, 200)))
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}…")
    }
}
