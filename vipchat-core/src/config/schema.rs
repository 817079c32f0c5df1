//! Configuration schema definitions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::constants;

/// Root configuration for vipchat
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Chat behavior configuration
    #[serde(default)]
    pub chat: ChatConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Chat behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Maximum length of a single message, in characters
    #[serde(default = "default_max_message_length")]
    pub max_message_length: usize,
    /// Maximum number of messages kept per session
    #[serde(default = "default_max_messages_history")]
    pub max_messages_history: usize,
    /// Simulated typing delay before a reply appears, in milliseconds
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,
}

fn default_max_message_length() -> usize {
    constants::MAX_MESSAGE_LENGTH
}

fn default_max_messages_history() -> usize {
    constants::MAX_MESSAGES_HISTORY
}

fn default_typing_delay_ms() -> u64 {
    constants::TYPING_DELAY_MS
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            max_message_length: default_max_message_length(),
            max_messages_history: default_max_messages_history(),
            typing_delay_ms: default_typing_delay_ms(),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the chat-history records
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    "~/.vipchat/chats".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (text, json)
    #[serde(default = "default_log_format")]
    pub format: String,
    /// Directory for log files
    #[serde(default = "default_log_dir")]
    pub dir: String,
    /// Module-specific overrides
    #[serde(default)]
    pub overrides: HashMap<String, String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            dir: default_log_dir(),
            overrides: HashMap::new(),
        }
    }
}
