//! Session data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
            Role::System => write!(f, "system"),
        }
    }
}

/// A chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message id, role-prefixed creation timestamp
    pub id: String,
    /// Message content
    pub content: String,
    /// Message role
    pub role: Role,
    /// Message timestamp
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: format!("msg-{}", next_stamp()),
            content: content.into(),
            role: Role::User,
            timestamp: Utc::now(),
        }
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            id: format!("msg-ai-{}", next_stamp()),
            content: content.into(),
            role: Role::Assistant,
            timestamp: Utc::now(),
        }
    }

    /// Create a system message (inline notices rendered in the log)
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            id: format!("msg-error-{}", next_stamp()),
            content: content.into(),
            role: Role::System,
            timestamp: Utc::now(),
        }
    }
}

/// A session summary as kept in the directory record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Session id, immutable once created
    pub id: String,
    /// Title, the head of the first message of the session
    pub title: String,
    /// Content of the most recently appended message
    pub preview: String,
    /// Last activity timestamp
    pub timestamp: DateTime<Utc>,
    /// Unread marker
    #[serde(default)]
    pub unread: bool,
}

/// Millisecond timestamps used in ids, forced strictly increasing so two
/// messages created in the same millisecond never share an id.
static LAST_STAMP: AtomicI64 = AtomicI64::new(0);

pub(crate) fn next_stamp() -> i64 {
    let now = Utc::now().timestamp_millis();
    let mut prev = LAST_STAMP.load(Ordering::Relaxed);
    loop {
        let next = if now > prev { now } else { prev + 1 };
        match LAST_STAMP.compare_exchange(prev, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(actual) => prev = actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors_set_role_and_prefix() {
        let user = ChatMessage::user("hello");
        assert_eq!(user.role, Role::User);
        assert!(user.id.starts_with("msg-"));

        let assistant = ChatMessage::assistant("hi");
        assert_eq!(assistant.role, Role::Assistant);
        assert!(assistant.id.starts_with("msg-ai-"));

        let system = ChatMessage::system("oops");
        assert_eq!(system.role, Role::System);
        assert!(system.id.starts_with("msg-error-"));
    }

    #[test]
    fn test_message_ids_are_unique() {
        let ids: Vec<String> = (0..100).map(|_| ChatMessage::user("x").id).collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn test_role_round_trips_lowercase() {
        let json = serde_json::to_string(&Role::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
        let role: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, Role::User);
    }

    #[test]
    fn test_unknown_role_fails_to_parse() {
        assert!(serde_json::from_str::<Role>("\"moderator\"").is_err());
    }
}
