//! Generative AI client for chat replies and crop advice
//!
//! Talks to a Gemini-style `generateContent` REST endpoint. Failures on
//! this path are recovered into a fixed fallback string rather than
//! propagated: chat UX prioritizes always responding over surfacing
//! upstream errors.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::ChatTurn;
use std::time::Duration;

use crate::config::GeminiConfig;
use crate::error::{AppError, AppResult};

/// Reply returned to the user when the AI service cannot be reached
pub const AI_UNAVAILABLE_REPLY: &str = "⚠ Sorry, the AI service is not available right now.";

/// Generative AI client
#[derive(Clone)]
pub struct GenerativeAiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: String,
}

impl GenerativeAiClient {
    /// Create a new client from configuration
    pub fn new(config: &GeminiConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.clone(),
        }
    }

    /// Serialize a conversation into a single role-prefixed prompt
    pub fn flatten_prompt(history: &[ChatTurn]) -> String {
        history
            .iter()
            .map(|turn| format!("{}: {}", turn.role.label(), turn.content))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Generate a reply for the given conversation.
    ///
    /// Never fails: any upstream problem yields the fixed fallback string.
    pub async fn generate(&self, history: &[ChatTurn]) -> String {
        match self.try_generate(history).await {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!("Generative AI request failed: {}", err);
                AI_UNAVAILABLE_REPLY.to_string()
            }
        }
    }

    async fn try_generate(&self, history: &[ChatTurn]) -> AppResult<String> {
        if self.api_key.is_empty() {
            return Err(AppError::Configuration(
                "Generative AI API key not configured".to_string(),
            ));
        }

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Self::flatten_prompt(history),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("AI request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Internal(format!(
                "AI API error: {} - {}",
                status, body
            )));
        }

        let data: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to parse AI response: {}", e)))?;

        data.candidates
            .and_then(|mut candidates| {
                if candidates.is_empty() {
                    None
                } else {
                    candidates.remove(0).content.parts
                }
            })
            .and_then(|parts| parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| AppError::Internal("AI response contained no candidates".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ChatTurn;

    #[test]
    fn test_flatten_prompt_role_prefixed_lines() {
        let history = vec![
            ChatTurn::system("Be helpful."),
            ChatTurn::user("When should I sow wheat?"),
            ChatTurn::assistant("After the monsoon."),
        ];

        let prompt = GenerativeAiClient::flatten_prompt(&history);
        assert_eq!(
            prompt,
            "system: Be helpful.\nuser: When should I sow wheat?\nassistant: After the monsoon."
        );
    }

    #[test]
    fn test_flatten_prompt_empty_history() {
        assert_eq!(GenerativeAiClient::flatten_prompt(&[]), "");
    }
}
