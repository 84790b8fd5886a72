//! In-memory chat session store
//!
//! Process-lifetime storage of multi-turn conversations, keyed by an
//! opaque session identifier. Constructed once at startup and injected
//! through application state so tests can run against a fresh store.
//! There is no TTL: sessions live until the process exits, bounded only
//! by the per-session history cap.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use shared::{ChatTurn, Language};
use uuid::Uuid;

/// Maximum history length per session; beyond this the oldest
/// non-system turns are discarded
pub const MAX_HISTORY: usize = 20;

/// Number of most-recent turns kept alongside the system turn on trim
const KEPT_RECENT: usize = MAX_HISTORY - 1;

/// Process-wide session store
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, Vec<ChatTurn>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a session, creating it if absent.
    ///
    /// When no identifier is supplied a new opaque one is minted. A fresh
    /// session starts with exactly one system turn in the requested
    /// language. Returns the (possibly minted) identifier.
    pub fn get_or_create(&self, session_id: Option<&str>, lang: Language) -> String {
        let id = match session_id {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => Uuid::new_v4().simple().to_string(),
        };

        let mut sessions = self.lock();
        sessions
            .entry(id.clone())
            .or_insert_with(|| vec![ChatTurn::system(lang.system_prompt())]);
        id
    }

    /// Append a turn to an existing session. Appends to nothing if the
    /// session is unknown.
    pub fn append(&self, session_id: &str, turn: ChatTurn) {
        let mut sessions = self.lock();
        if let Some(history) = sessions.get_mut(session_id) {
            history.push(turn);
        }
    }

    /// Trim a session that has grown past the cap, keeping the system
    /// turn plus the most recent turns. After trimming the history is
    /// exactly `MAX_HISTORY` entries and entry 0 is unchanged.
    pub fn trim(&self, session_id: &str) {
        let mut sessions = self.lock();
        if let Some(history) = sessions.get_mut(session_id) {
            if history.len() > MAX_HISTORY {
                let system = history[0].clone();
                let tail = history.split_off(history.len() - KEPT_RECENT);
                *history = std::iter::once(system).chain(tail).collect();
            }
        }
    }

    /// Snapshot of a session's history, empty if unknown
    pub fn history(&self, session_id: &str) -> Vec<ChatTurn> {
        self.lock().get(session_id).cloned().unwrap_or_default()
    }

    /// Number of live sessions
    pub fn session_count(&self) -> usize {
        self.lock().len()
    }

    /// Drop all sessions (test lifecycle)
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<ChatTurn>>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ChatRole;

    #[test]
    fn test_new_session_starts_with_system_turn() {
        let store = SessionStore::new();
        let id = store.get_or_create(None, Language::Hindi);

        let history = store.history(&id);
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].role, ChatRole::System);
        assert_eq!(history[0].content, Language::Hindi.system_prompt());
    }

    #[test]
    fn test_minted_ids_are_unique() {
        let store = SessionStore::new();
        let a = store.get_or_create(None, Language::English);
        let b = store.get_or_create(None, Language::English);
        assert_ne!(a, b);
        assert_eq!(store.session_count(), 2);
    }

    #[test]
    fn test_existing_session_reused_without_new_system_turn() {
        let store = SessionStore::new();
        let id = store.get_or_create(None, Language::Hindi);
        store.append(&id, ChatTurn::user("namaste"));
        store.append(&id, ChatTurn::assistant("namaste!"));

        // A follow-up request with the same id must not reset the history,
        // even when it asks for a different language.
        let same = store.get_or_create(Some(&id), Language::English);
        assert_eq!(same, id);

        let history = store.history(&id);
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].content, Language::Hindi.system_prompt());
    }

    #[test]
    fn test_trim_keeps_system_plus_recent() {
        let store = SessionStore::new();
        let id = store.get_or_create(None, Language::English);

        for i in 0..30 {
            store.append(&id, ChatTurn::user(format!("message {}", i)));
            store.trim(&id);
        }

        let history = store.history(&id);
        assert_eq!(history.len(), MAX_HISTORY);
        assert_eq!(history[0].role, ChatRole::System);
        assert_eq!(history[0].content, Language::English.system_prompt());
        // Most recent turns survive
        assert_eq!(history[MAX_HISTORY - 1].content, "message 29");
        assert_eq!(history[1].content, "message 11");
    }

    #[test]
    fn test_trim_noop_at_or_below_cap() {
        let store = SessionStore::new();
        let id = store.get_or_create(None, Language::English);

        for i in 0..19 {
            store.append(&id, ChatTurn::user(format!("message {}", i)));
        }
        assert_eq!(store.history(&id).len(), 20);

        // Exactly at the cap: nothing is discarded
        store.trim(&id);
        assert_eq!(store.history(&id).len(), 20);
    }

    #[test]
    fn test_clear_drops_all_sessions() {
        let store = SessionStore::new();
        store.get_or_create(None, Language::English);
        store.get_or_create(None, Language::Malayalam);
        store.clear();
        assert_eq!(store.session_count(), 0);
    }
}
