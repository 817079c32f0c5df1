//! Shared application constants
//!
//! Storage keys, chat limits, and the REST/WebSocket names reserved for the
//! future backend. The endpoint and event constants are not dispatched
//! anywhere yet; they pin down the wire vocabulary so the responder seam can
//! be filled in without renaming.

/// Application display name
pub const APP_NAME: &str = "Zenith Comp AI Assistant";
/// Company name
pub const COMPANY_NAME: &str = "Zenith Comp";
/// Brand tagline
pub const BRAND_TAGLINE: &str = "Reaching the Peak of Innovation";

/// Storage key for the session directory (list of session summaries)
pub const CHAT_HISTORY_KEY: &str = "zenith_chat_history";
/// Prefix for per-session message-log keys; the session id is appended
pub const CHAT_KEY_PREFIX: &str = "zenith_chat_";

/// Maximum length of a single message, in characters
pub const MAX_MESSAGE_LENGTH: usize = 2000;
/// Maximum number of messages kept per session
pub const MAX_MESSAGES_HISTORY: usize = 100;
/// Number of characters of the first message used as the session title
pub const TITLE_MAX_CHARS: usize = 50;
/// Simulated typing delay before a reply is appended, in milliseconds
pub const TYPING_DELAY_MS: u64 = 1000;

/// REST endpoint paths reserved for the future backend
pub mod api {
    pub const CHAT: &str = "/api/v1/chat";
    pub const ROOMS: &str = "/api/v1/rooms";
    pub const MESSAGES: &str = "/api/v1/messages";
    pub const AI: &str = "/api/v1/ai";
    pub const AUTH: &str = "/api/v1/auth";
    pub const WEBSOCKET: &str = "/ws";
}

/// WebSocket event names reserved for the future backend
pub mod ws_events {
    pub const CONNECT: &str = "connect";
    pub const DISCONNECT: &str = "disconnect";
    pub const MESSAGE_SENT: &str = "message_sent";
    pub const MESSAGE_RECEIVED: &str = "message_received";
    pub const TYPING_START: &str = "typing_start";
    pub const TYPING_STOP: &str = "typing_stop";
    pub const USER_JOINED: &str = "user_joined";
    pub const USER_LEFT: &str = "user_left";
    pub const BOT_RESPONSE: &str = "bot_response";
}
