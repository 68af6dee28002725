//! Natural-language commands → structured update batches, via an
//! OpenAI-style chat-completion endpoint. The model is instructed to
//! answer with bare JSON, but replies routinely arrive wrapped in prose
//! or code fences, so extraction takes the first `{...}` span rather
//! than trusting the whole body.

use std::sync::LazyLock;

use anyhow::{Context, Result, anyhow};
use regex::Regex;
use serde::{Deserialize, Serialize};
use wd_core::UpdateRequest;

static JSON_OBJECT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)\{.*\}").unwrap());

const SYSTEM_PROMPT: &str = r#"Return JSON ONLY. Format: {"updates": [{"parameter_name": "q", "mode": "set", "value": 0.5}]}. Use lowercase 'q' for mass ratio."#;
const MAX_TOKENS: u32 = 100;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: String,
}

#[derive(Deserialize)]
struct UpdatePayload {
    updates: Vec<UpdateRequest>,
}

/// Client for one chat-completion endpoint and model.
pub struct Translator {
    client: reqwest::Client,
    api_base: String,
    model: String,
    token: Option<String>,
}

impl Translator {
    pub fn new(api_base: String, model: String, token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base,
            model,
            token,
        }
    }

    /// Turn one natural-language command into an update batch.
    pub async fn translate(&self, command: &str) -> Result<Vec<UpdateRequest>> {
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: command,
                },
            ],
            max_tokens: MAX_TOKENS,
        };

        let mut request = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .context("chat completion request failed")?
            .error_for_status()
            .context("chat completion endpoint rejected the request")?
            .json::<ChatResponse>()
            .await
            .context("malformed chat completion response")?;

        let content = response
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or_else(|| anyhow!("chat completion returned no choices"))?;
        tracing::debug!("model reply: {content}");

        parse_update_batch(content)
    }
}

/// First `{...}` span in a model reply, if any. Greedy, so nested
/// objects stay intact.
pub fn extract_json_object(text: &str) -> Option<&str> {
    JSON_OBJECT.find(text).map(|m| m.as_str())
}

/// Pull the update batch out of a model reply or a raw JSON string.
pub fn parse_update_batch(reply: &str) -> Result<Vec<UpdateRequest>> {
    let json = extract_json_object(reply)
        .ok_or_else(|| anyhow!("no JSON object in model reply"))?;
    let payload: UpdatePayload =
        serde_json::from_str(json).context("reply JSON does not match the update contract")?;
    Ok(payload.updates)
}
