//! Chat engine: the message processing loop

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};
use vipchat_core::config::ChatConfig;
use vipchat_core::session::{ChatMessage, SessionStore};
use vipchat_core::{Error, Result};
use vipchat_responder::Responder;

/// Inline notice appended when the responder fails
const SEND_ERROR_MESSAGE: &str =
    "ขออภัย เกิดข้อผิดพลาดในการส่งข้อความ กรุณาลองใหม่อีกครั้ง";

/// Result of sending one message through the engine
#[derive(Debug, Clone)]
pub struct SendOutcome {
    /// Session written to (newly created on the first send)
    pub session_id: String,
    /// The appended user message
    pub user: ChatMessage,
    /// The appended reply: assistant on success, system on failure
    pub reply: ChatMessage,
}

/// Drives one conversation against the session store and a responder
pub struct ChatEngine {
    store: SessionStore,
    responder: Arc<dyn Responder>,
    config: ChatConfig,
    session_id: Option<String>,
}

impl ChatEngine {
    /// Create an engine with no active session; the first send creates one
    pub fn new(store: SessionStore, responder: Arc<dyn Responder>, config: ChatConfig) -> Self {
        Self {
            store,
            responder,
            config,
            session_id: None,
        }
    }

    /// Resume an existing session
    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// The active session id, if a session exists yet
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Messages of the active session, oldest first
    pub fn messages(&self) -> Vec<ChatMessage> {
        match &self.session_id {
            Some(id) => self.store.load_messages(id),
            None => Vec::new(),
        }
    }

    /// Send a user message and obtain the reply.
    ///
    /// The user message is appended first; after the configured typing
    /// delay the responder's reply is appended as an assistant message. A
    /// responder failure becomes an inline system message instead of an
    /// error. Only input validation can fail, and it fails before anything
    /// is written.
    pub async fn send(&mut self, text: &str) -> Result<SendOutcome> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::Validation("message must not be empty".to_string()));
        }
        if text.chars().count() > self.config.max_message_length {
            return Err(Error::Validation(format!(
                "message exceeds {} characters",
                self.config.max_message_length
            )));
        }

        let user = ChatMessage::user(text);
        let session_id = self
            .store
            .append_message(self.session_id.as_deref(), user.clone());
        self.session_id = Some(session_id.clone());
        debug!(session_id = %session_id, "user message appended");

        // Simulated typing latency; no cancellation, the reply always lands
        // after the user message.
        if self.config.typing_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.typing_delay_ms)).await;
        }

        let reply = match self.responder.respond(text).await {
            Ok(content) => ChatMessage::assistant(content),
            Err(e) => {
                warn!(session_id = %session_id, error = %e, "responder failed");
                ChatMessage::system(SEND_ERROR_MESSAGE)
            }
        };
        self.store.append_message(Some(&session_id), reply.clone());

        Ok(SendOutcome {
            session_id,
            user,
            reply,
        })
    }
}
