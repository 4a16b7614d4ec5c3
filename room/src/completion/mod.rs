//! Client for the language model that plays the AI seats.
//!
//! Every call sends the same game-master directive as the system message,
//! followed by one user prompt, and waits for the whole reply. A failed call
//! is not an error for the game: the caller gets `"[ERROR] <detail>"` back and
//! uses it as that player's answer.

mod directive;

use async_trait::async_trait;
use log::warn;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, RoomResult};

pub use directive::SYSTEM_PROMPT;

pub const FAILURE_PREFIX: &str = "[ERROR]";

#[async_trait]
pub trait Completion: Send + Sync {
    /// One attempt, never fails; see [`is_failure`].
    async fn complete(&self, prompt: &str) -> String;
}

pub fn is_failure(reply: &str) -> bool {
    reply.starts_with(FAILURE_PREFIX)
}

pub fn failure(detail: impl std::fmt::Display) -> String {
    format!("{} {}", FAILURE_PREFIX, detail)
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    stream: bool,
}

#[derive(Debug, Default, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    message: ChatReply,
    error: Option<String>,
}

/// Talks to an Ollama `/api/chat` endpoint in non-streaming mode.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(url: impl ToString, model: impl ToString) -> Self {
        Self {
            client: Client::new(),
            url: url.to_string(),
            model: model.to_string(),
        }
    }

    pub fn model(&self) -> &str {&self.model}

    async fn chat(&self, prompt: &str) -> RoomResult<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage { role: "system", content: SYSTEM_PROMPT },
                ChatMessage { role: "user", content: prompt },
            ],
            stream: false,
        };
        let body = self.client
            .post(&self.url)
            .json(&request)
            .send()
            .await?
            .text()
            .await?;
        let response: ChatResponse = serde_json::from_str(&body)?;
        match response.error {
            Some(reason) => Err(ErrorKind::Backend(reason)),
            None => Ok(response.message.content),
        }
    }
}

#[async_trait]
impl Completion for OllamaClient {
    async fn complete(&self, prompt: &str) -> String {
        match self.chat(prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("completion failed: {}", e);
                failure(e)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod canned {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;

    /// Answers from a script, counting every call.
    #[derive(Default)]
    pub(crate) struct Canned {
        replies: Vec<String>,
        calls: AtomicUsize,
        pub(crate) prompts: Mutex<Vec<String>>,
    }

    impl Canned {
        pub(crate) fn always(reply: &str) -> Self {
            Self {
                replies: vec![reply.to_string()],
                ..Default::default()
            }
        }

        pub(crate) fn cycle(replies: &[&str]) -> Self {
            Self {
                replies: replies.iter().map(|r| r.to_string()).collect(),
                ..Default::default()
            }
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Completion for Canned {
        async fn complete(&self, prompt: &str) -> String {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if let Ok(mut prompts) = self.prompts.lock() {
                prompts.push(prompt.to_string());
            }
            self.replies[n % self.replies.len()].clone()
        }
    }
}
