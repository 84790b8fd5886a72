//! Multi-turn chat service
//!
//! Orchestrates one chat request: session lookup, history append,
//! AI reply generation, and history trimming. This path never returns
//! an error for upstream failures; the generative client substitutes a
//! fallback reply instead.

use std::sync::Arc;

use shared::{ChatTurn, Language};

use crate::external::GenerativeAiClient;
use crate::services::session::SessionStore;

/// Chat service
#[derive(Clone)]
pub struct ChatService {
    sessions: Arc<SessionStore>,
    ai: GenerativeAiClient,
}

impl ChatService {
    pub fn new(sessions: Arc<SessionStore>, ai: GenerativeAiClient) -> Self {
        Self { sessions, ai }
    }

    /// Process one chat message and return `(session_id, reply)`.
    pub async fn send_message(
        &self,
        message: &str,
        lang: Language,
        session_id: Option<&str>,
    ) -> (String, String) {
        let id = self.sessions.get_or_create(session_id, lang);

        self.sessions.append(&id, ChatTurn::user(message));

        let history = self.sessions.history(&id);
        let reply = self.ai.generate(&history).await;

        self.sessions.append(&id, ChatTurn::assistant(reply.clone()));
        self.sessions.trim(&id);

        (id, reply)
    }
}
