//! The session store
//!
//! Reads and writes the session directory (`zenith_chat_history`) and the
//! per-session message logs (`zenith_chat_<id>`), both kept as JSON arrays
//! in a [`BlobStorage`] backend.
//!
//! Every read is fail-soft: missing or corrupt data is treated as "no
//! history" and individual records that fail validation are dropped without
//! taking the rest down. Writes are best-effort; a failed write is logged at
//! `warn` and never surfaced to the caller.

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, warn};

use super::storage::{BlobStorage, FileStorage, MemoryStorage};
use super::types::{next_stamp, ChatMessage, SessionSummary};
use crate::constants::{CHAT_HISTORY_KEY, CHAT_KEY_PREFIX, TITLE_MAX_CHARS};

/// Local chat-history store
pub struct SessionStore {
    storage: Box<dyn BlobStorage>,
}

impl SessionStore {
    /// Open a file-backed store rooted at `data_dir`
    pub fn open<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            storage: Box::new(FileStorage::new(data_dir)),
        }
    }

    /// Create a store backed by memory only
    pub fn in_memory() -> Self {
        Self {
            storage: Box::new(MemoryStorage::new()),
        }
    }

    /// Create a store over a custom storage backend
    pub fn with_storage(storage: Box<dyn BlobStorage>) -> Self {
        Self { storage }
    }

    /// List all session summaries, newest activity first
    pub fn list_sessions(&self) -> Vec<SessionSummary> {
        let mut sessions: Vec<SessionSummary> = self.read_records(CHAT_HISTORY_KEY);
        sessions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        sessions
    }

    /// Load the message log of a session, in append order
    pub fn load_messages(&self, session_id: &str) -> Vec<ChatMessage> {
        self.read_records(&log_key(session_id))
    }

    /// Append a message to a session, creating the session when
    /// `session_id` is `None`. Returns the id of the session written to.
    ///
    /// The session's directory entry is refreshed on every append: its
    /// preview becomes the appended message's content and its timestamp is
    /// set to now.
    pub fn append_message(&mut self, session_id: Option<&str>, message: ChatMessage) -> String {
        let (id, created) = match session_id {
            Some(existing) => (existing.to_string(), false),
            None => (format!("chat-{}", next_stamp()), true),
        };

        let content = message.content.clone();

        let mut messages = self.load_messages(&id);
        messages.push(message);
        self.write_records(&log_key(&id), &messages);

        let mut sessions: Vec<SessionSummary> = self.read_records(CHAT_HISTORY_KEY);
        match sessions.iter_mut().find(|s| s.id == id) {
            Some(summary) => {
                summary.preview = content;
                summary.timestamp = Utc::now();
            }
            None => {
                // New session, or an append to an id whose directory entry
                // went missing: (re)create the entry at the head.
                sessions.insert(
                    0,
                    SessionSummary {
                        id: id.clone(),
                        title: derive_title(&content),
                        preview: content,
                        timestamp: Utc::now(),
                        unread: false,
                    },
                );
                if created {
                    debug!(session_id = %id, "created new chat session");
                }
            }
        }
        self.write_records(CHAT_HISTORY_KEY, &sessions);

        id
    }

    /// Delete a session's directory entry and message log. Idempotent;
    /// deleting an unknown id is a no-op.
    pub fn delete_session(&mut self, session_id: &str) {
        let sessions: Vec<SessionSummary> = self.read_records(CHAT_HISTORY_KEY);
        let remaining: Vec<SessionSummary> = sessions
            .into_iter()
            .filter(|s| s.id != session_id)
            .collect();
        self.write_records(CHAT_HISTORY_KEY, &remaining);

        if let Err(e) = self.storage.remove(&log_key(session_id)) {
            warn!(session_id, error = %e, "failed to remove message log");
        }
    }

    /// Delete the directory and every message log. Idempotent.
    pub fn clear_all(&mut self) {
        for key in self.storage.keys() {
            if key.starts_with(CHAT_KEY_PREFIX) {
                if let Err(e) = self.storage.remove(&key) {
                    warn!(key, error = %e, "failed to remove record");
                }
            }
        }
    }

    /// Read a JSON array record, validating each element and dropping the
    /// ones that do not match the schema.
    fn read_records<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let Some(raw) = self.storage.get(key) else {
            return Vec::new();
        };
        let values: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(values) => values,
            Err(e) => {
                warn!(key, error = %e, "corrupt record treated as empty");
                return Vec::new();
            }
        };
        values
            .into_iter()
            .filter_map(|value| match serde_json::from_value(value) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(key, error = %e, "dropping record that failed validation");
                    None
                }
            })
            .collect()
    }

    /// Serialize and write a record; failures are logged, not returned.
    fn write_records<T: Serialize>(&mut self, key: &str, records: &[T]) {
        let raw = match serde_json::to_string(records) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key, error = %e, "failed to serialize record");
                return;
            }
        };
        if let Err(e) = self.storage.set(key, &raw) {
            warn!(key, error = %e, "failed to persist record");
        }
    }
}

/// Storage key of a session's message log
fn log_key(session_id: &str) -> String {
    format!("{}{}", CHAT_KEY_PREFIX, session_id)
}

/// Derive a session title from its first message: the first 50 characters
fn derive_title(content: &str) -> String {
    content.chars().take(TITLE_MAX_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::types::Role;
    use tempfile::TempDir;

    #[test]
    fn test_first_append_creates_session() {
        let mut store = SessionStore::in_memory();

        let id = store.append_message(None, ChatMessage::user("สวัสดี"));
        assert!(id.starts_with("chat-"));

        let sessions = store.list_sessions();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].id, id);
        assert_eq!(sessions[0].title, "สวัสดี");
        assert_eq!(sessions[0].preview, "สวัสดี");
        assert!(!sessions[0].unread);

        let messages = store.load_messages(&id);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[0].content, "สวัสดี");
    }

    #[test]
    fn test_appends_preserve_order() {
        let mut store = SessionStore::in_memory();

        let id = store.append_message(None, ChatMessage::user("one"));
        store.append_message(Some(&id), ChatMessage::assistant("two"));
        store.append_message(Some(&id), ChatMessage::user("three"));

        let messages = store.load_messages(&id);
        let contents: Vec<&str> = messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_title_is_first_fifty_chars() {
        let mut store = SessionStore::in_memory();

        let long: String = "ก".repeat(80);
        store.append_message(None, ChatMessage::user(long));

        let sessions = store.list_sessions();
        assert_eq!(sessions[0].title.chars().count(), 50);
        assert_eq!(sessions[0].preview.chars().count(), 80);
    }

    #[test]
    fn test_append_refreshes_preview_and_timestamp() {
        let mut store = SessionStore::in_memory();

        let id = store.append_message(None, ChatMessage::user("first"));
        let before = store.list_sessions()[0].timestamp;

        store.append_message(Some(&id), ChatMessage::assistant("second"));
        let sessions = store.list_sessions();
        assert_eq!(sessions[0].preview, "second");
        assert_eq!(sessions[0].title, "first");
        assert!(sessions[0].timestamp >= before);
    }

    #[test]
    fn test_list_is_newest_activity_first() {
        let mut store = SessionStore::in_memory();

        let first = store.append_message(None, ChatMessage::user("a"));
        let second = store.append_message(None, ChatMessage::user("b"));

        let sessions = store.list_sessions();
        assert_eq!(sessions[0].id, second);
        assert_eq!(sessions[1].id, first);

        // Appending to the older session moves it back to the head
        store.append_message(Some(&first), ChatMessage::user("c"));
        let sessions = store.list_sessions();
        assert_eq!(sessions[0].id, first);
    }

    #[test]
    fn test_delete_removes_entry_and_log() {
        let mut store = SessionStore::in_memory();

        let id = store.append_message(None, ChatMessage::user("bye"));
        store.delete_session(&id);

        assert!(store.list_sessions().is_empty());
        assert!(store.load_messages(&id).is_empty());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut store = SessionStore::in_memory();

        let keep = store.append_message(None, ChatMessage::user("keep"));
        let gone = store.append_message(None, ChatMessage::user("gone"));

        store.delete_session(&gone);
        store.delete_session(&gone);
        store.delete_session("never-existed");

        let sessions = store.list_sessions();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].id, keep);
    }

    #[test]
    fn test_clear_all_removes_everything() {
        let mut store = SessionStore::in_memory();

        let a = store.append_message(None, ChatMessage::user("a"));
        let b = store.append_message(None, ChatMessage::user("b"));

        store.clear_all();
        assert!(store.list_sessions().is_empty());
        assert!(store.load_messages(&a).is_empty());
        assert!(store.load_messages(&b).is_empty());

        // Clearing an already-empty store is fine
        store.clear_all();
        assert!(store.list_sessions().is_empty());
    }

    #[test]
    fn test_corrupt_directory_reads_as_empty() {
        let mut storage = MemoryStorage::new();
        storage.set(CHAT_HISTORY_KEY, "{not json").unwrap();
        let store = SessionStore::with_storage(Box::new(storage));

        assert!(store.list_sessions().is_empty());
    }

    #[test]
    fn test_invalid_entries_are_dropped_individually() {
        let mut storage = MemoryStorage::new();
        let raw = format!(
            "[{},{}]",
            r#"{"id":"chat-1","title":"t","preview":"p","timestamp":"2025-01-01T00:00:00Z","unread":false}"#,
            r#"{"id":42}"#
        );
        storage.set(CHAT_HISTORY_KEY, &raw).unwrap();
        let store = SessionStore::with_storage(Box::new(storage));

        let sessions = store.list_sessions();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].id, "chat-1");
    }

    #[test]
    fn test_message_with_unknown_role_is_dropped() {
        let mut storage = MemoryStorage::new();
        let raw = r#"[{"id":"msg-1","content":"ok","role":"user","timestamp":"2025-01-01T00:00:00Z"},
                      {"id":"msg-2","content":"bad","role":"moderator","timestamp":"2025-01-01T00:00:00Z"}]"#;
        storage.set("zenith_chat_chat-1", raw).unwrap();
        let store = SessionStore::with_storage(Box::new(storage));

        let messages = store.load_messages("chat-1");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "ok");
    }

    #[test]
    fn test_load_messages_unknown_id_is_empty() {
        let store = SessionStore::in_memory();
        assert!(store.load_messages("chat-0").is_empty());
    }

    #[test]
    fn test_file_backed_store_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();

        let id = {
            let mut store = SessionStore::open(temp_dir.path());
            let id = store.append_message(None, ChatMessage::user("persisted"));
            store.append_message(Some(&id), ChatMessage::assistant("reply"));
            id
        };

        let store = SessionStore::open(temp_dir.path());
        let sessions = store.list_sessions();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].preview, "reply");

        let messages = store.load_messages(&id);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, "persisted");
        assert_eq!(messages[1].content, "reply");
    }
}
